mod catalog;
mod config;
mod errors;
mod llm_client;
mod quiz;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::contact::{ContactLookup, LlmContactLookup, StaticContactLookup};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::quiz::generator::{LlmQuestionSource, QuestionSource, StaticQuestionSource};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting OTB API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = match &config.catalog_dir {
        Some(dir) => Catalog::from_dir(dir)?,
        None => Catalog::embedded()?,
    };

    // LLM-backed quizzes and contact lookups when a key is configured,
    // embedded data otherwise
    let llm = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(llm)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set, serving quizzes and contacts from embedded data");
            None
        }
    };

    let question_source: Arc<dyn QuestionSource> = match &llm {
        Some(llm) => Arc::new(LlmQuestionSource(llm.clone())),
        None => Arc::new(StaticQuestionSource::embedded()?),
    };
    let contact_lookup: Arc<dyn ContactLookup> = match llm {
        Some(llm) => Arc::new(LlmContactLookup(llm)),
        None => Arc::new(StaticContactLookup),
    };

    info!("Score ceiling: {}", config.score_ceiling);

    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        question_source,
        contact_lookup,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()), // TODO: restrict origins to the web client's domain
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
