// Quiz: personas, modes, question generation.
// All generative calls go through llm_client; scoring lives in crate::scoring.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod validation;
