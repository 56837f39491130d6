pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::quiz::handlers as quiz;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Quiz setup
        .route("/api/v1/personas", get(quiz::handle_list_personas))
        .route("/api/v1/quiz/modes", get(quiz::handle_list_modes))
        .route("/api/v1/quiz/generate", post(quiz::handle_generate_quiz))
        // Scoring and profile
        .route("/api/v1/quiz/score", post(scoring::handle_score_quiz))
        .route(
            "/api/v1/profile/resolve",
            post(scoring::handle_resolve_profile),
        )
        // Reference data
        .route("/api/v1/roles", get(catalog::handle_list_roles))
        .route(
            "/api/v1/universities",
            get(catalog::handle_search_universities),
        )
        .route(
            "/api/v1/universities/:id/contact",
            post(catalog::handle_university_contact),
        )
        .with_state(state)
}
