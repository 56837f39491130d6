use std::sync::Arc;

use crate::catalog::contact::ContactLookup;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::quiz::generator::QuestionSource;
use crate::scoring::resolver::ProfileResolver;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds only immutable data; no per-user state lives on the server.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    /// Pluggable question source. LLM when an API key is configured, fixture otherwise.
    pub question_source: Arc<dyn QuestionSource>,
    pub contact_lookup: Arc<dyn ContactLookup>,
}

impl AppState {
    pub fn resolver(&self) -> ProfileResolver<'_> {
        ProfileResolver::from_catalog(&self.catalog, self.config.score_ceiling)
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use crate::catalog::contact::StaticContactLookup;
    use crate::quiz::generator::StaticQuestionSource;

    AppState {
        config: Config::default(),
        catalog: Arc::new(Catalog::embedded().unwrap()),
        question_source: Arc::new(StaticQuestionSource::embedded().unwrap()),
        contact_lookup: Arc::new(StaticContactLookup),
    }
}
