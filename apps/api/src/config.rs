use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::scoring::resolver::DEFAULT_CEILING;

/// Application configuration loaded from environment variables.
/// Every variable is optional; startup fails only on malformed values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Absent → quizzes come from the embedded fixture bank.
    pub anthropic_api_key: Option<String>,
    pub score_ceiling: NonZeroU32,
    /// Directory overriding the embedded catalog JSON files.
    pub catalog_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            score_ceiling: parse_ceiling(optional_env("SCORE_CEILING").as_deref())?,
            catalog_dir: optional_env("CATALOG_DIR").map(PathBuf::from),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            anthropic_api_key: None,
            score_ceiling: DEFAULT_CEILING,
            catalog_dir: None,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_ceiling(raw: Option<&str>) -> Result<NonZeroU32> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_CEILING);
    };
    let value = raw
        .trim()
        .parse::<u32>()
        .context("SCORE_CEILING must be a positive integer")?;
    NonZeroU32::new(value).context("SCORE_CEILING must be greater than zero")
}
