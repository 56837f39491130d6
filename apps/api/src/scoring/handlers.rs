//! Axum route handlers for scoring and profile resolution.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::quiz::models::Question;
use crate::scoring::aggregator::score_answers;
use crate::scoring::resolver::ResolvedProfile;
use crate::scoring::ScoreSet;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScoreQuizRequest {
    pub questions: Vec<Question>,
    /// Selected option id per question, in presentation order.
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreQuizResponse {
    pub scores: ScoreSet,
    pub profile: ResolvedProfile,
}

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    pub scores: ScoreSet,
}

/// POST /api/v1/quiz/score
///
/// Replays the answer sheet into a final ScoreSet and resolves it.
pub async fn handle_score_quiz(
    State(state): State<AppState>,
    payload: Result<Json<ScoreQuizRequest>, JsonRejection>,
) -> Result<Json<ScoreQuizResponse>, AppError> {
    let Json(request) = payload?;
    let scores = score_answers(&request.questions, &request.answers)?;
    let profile = state.resolver().resolve(&scores);
    info!(
        "Scored {} answers: dominant={}",
        request.answers.len(),
        profile.dominant
    );
    Ok(Json(ScoreQuizResponse { scores, profile }))
}

/// POST /api/v1/profile/resolve
pub async fn handle_resolve_profile(
    State(state): State<AppState>,
    payload: Result<Json<ResolveRequest>, JsonRejection>,
) -> Result<Json<ResolvedProfile>, AppError> {
    let Json(request) = payload?;
    Ok(Json(state.resolver().resolve(&request.scores)))
}
