use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::quiz::generator::QuizError;
use crate::scoring::ScoringError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Upstream quiz generation failed; the client restarts from the entry screen.
    #[error("Quiz generation error: {0}")]
    QuizGeneration(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ScoringError> for AppError {
    fn from(e: ScoringError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QuizError> for AppError {
    fn from(e: QuizError) -> Self {
        AppError::QuizGeneration(e.to_string())
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String, bool) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                false,
            ),
            AppError::QuizGeneration(msg) => {
                tracing::error!("Quiz generation error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "QUIZ_GENERATION_FAILED",
                    "Erreur lors de la préparation du quiz. Veuillez réessayer.".to_string(),
                    true,
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    false,
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, restart) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
                "restart": restart
            }
        }));

        (status, body).into_response()
    }
}
