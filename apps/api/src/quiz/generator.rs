//! Quiz generation behind one pluggable `QuestionSource` trait.
//!
//! `LlmQuestionSource` asks the generative content service for a fresh quiz.
//! `StaticQuestionSource` serves an embedded fixture and is used when no API
//! key is configured. `AppState` holds an `Arc<dyn QuestionSource>`.

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::llm_client::{LlmClient, LlmError};
use crate::quiz::models::{GeneratedQuiz, Persona, Question, QuizMode};
use crate::quiz::prompts::{build_quiz_prompt, quiz_system_prompt};
use crate::quiz::validation::validate_questions;

const FIXTURE_JSON: &str = include_str!("fixtures/questions.json");

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("question generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("generated quiz is malformed: {0}")]
    Malformed(String),
}

/// Envelope the generative service is asked to return.
#[derive(Debug, Deserialize)]
pub struct QuestionBatch {
    pub questions: Vec<Question>,
}

#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn questions(&self, persona: Persona, mode: QuizMode)
        -> Result<Vec<Question>, QuizError>;

    /// Label reported to clients: "llm" | "static".
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmQuestionSource
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmQuestionSource(pub LlmClient);

#[async_trait]
impl QuestionSource for LlmQuestionSource {
    async fn questions(
        &self,
        persona: Persona,
        mode: QuizMode,
    ) -> Result<Vec<Question>, QuizError> {
        let prompt = build_quiz_prompt(
            mode.question_count(),
            persona.info().prompt_context,
            mode.as_str(),
        );
        let batch: QuestionBatch = self.0.call_json(&prompt, &quiz_system_prompt()).await?;
        Ok(batch.questions)
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// StaticQuestionSource
// ────────────────────────────────────────────────────────────────────────────

/// Serves the first `count` questions of a fixed question bank.
pub struct StaticQuestionSource {
    bank: Vec<Question>,
}

impl StaticQuestionSource {
    pub fn new(bank: Vec<Question>) -> Self {
        Self { bank }
    }

    pub fn embedded() -> Result<Self, serde_json::Error> {
        let batch: QuestionBatch = serde_json::from_str(FIXTURE_JSON)?;
        Ok(Self::new(batch.questions))
    }
}

#[async_trait]
impl QuestionSource for StaticQuestionSource {
    async fn questions(
        &self,
        _persona: Persona,
        mode: QuizMode,
    ) -> Result<Vec<Question>, QuizError> {
        Ok(self
            .bank
            .iter()
            .take(mode.question_count())
            .cloned()
            .collect())
    }

    fn backend(&self) -> &'static str {
        "static"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Fetches questions from `source`, checks their shape and wraps them in a
/// fresh `GeneratedQuiz`. Any failure is final: the caller restarts the flow.
pub async fn generate_quiz(
    source: &dyn QuestionSource,
    persona: Persona,
    mode: QuizMode,
) -> Result<GeneratedQuiz, QuizError> {
    info!(
        "Generating {:?} quiz for persona {:?} via {}",
        mode,
        persona,
        source.backend()
    );

    let questions = source.questions(persona, mode).await.map_err(|e| {
        error!("Quiz generation failed: {e}");
        e
    })?;

    validate_questions(&questions).map_err(|reason| {
        error!("Generated quiz rejected: {reason}");
        QuizError::Malformed(reason)
    })?;

    if questions.len() != mode.question_count() {
        warn!(
            "Requested {} questions, received {}",
            mode.question_count(),
            questions.len()
        );
    }

    Ok(GeneratedQuiz {
        quiz_id: Uuid::new_v4(),
        persona,
        mode,
        generated_at: Utc::now(),
        source_backend: source.backend().to_string(),
        questions,
    })
}
