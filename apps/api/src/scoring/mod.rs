// Scoring core: answers -> ScoreSet -> ResolvedProfile.
// Pure and synchronous. Catalog data is passed in, never read from globals.

pub mod aggregator;
pub mod dimension;
pub mod handlers;
pub mod resolver;

use thiserror::Error;

pub use dimension::{PartialScoreSet, ScoreSet, StrengthDimension};

/// Rejections raised at the accumulation boundary.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown strength dimension '{0}'")]
    UnknownDimension(String),

    #[error("invalid points {value} for {dimension}: contributions must be non-negative")]
    InvalidPoints {
        dimension: StrengthDimension,
        value: i64,
    },

    #[error("score overflow on {dimension}")]
    Overflow { dimension: StrengthDimension },

    #[error("expected {expected} answers, got {actual}")]
    AnswerCount { expected: usize, actual: usize },

    #[error("question {question_id} has no option '{option_id}', please answer it again")]
    UnknownOption { question_id: u32, option_id: String },

    #[error("quiz is not finished: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    #[error("all {total} questions have already been answered")]
    AlreadyComplete { total: usize },
}
