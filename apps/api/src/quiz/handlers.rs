//! Axum route handlers for the Quiz API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::quiz::generator::generate_quiz;
use crate::quiz::models::{
    GeneratedQuiz, Persona, PersonaInfo, QuizMode, QuizModeInfo, PERSONAS, QUIZ_MODES,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateQuizRequest {
    pub persona: Persona,
    pub mode: QuizMode,
}

/// GET /api/v1/personas
pub async fn handle_list_personas() -> Json<&'static [PersonaInfo]> {
    Json(PERSONAS)
}

/// GET /api/v1/quiz/modes
pub async fn handle_list_modes() -> Json<&'static [QuizModeInfo]> {
    Json(QUIZ_MODES)
}

/// POST /api/v1/quiz/generate
///
/// Single attempt against the configured question source. On failure the
/// client is told to restart; nothing is kept.
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    payload: Result<Json<GenerateQuizRequest>, JsonRejection>,
) -> Result<Json<GeneratedQuiz>, AppError> {
    let Json(request) = payload?;
    let quiz = generate_quiz(state.question_source.as_ref(), request.persona, request.mode).await?;
    Ok(Json(quiz))
}
