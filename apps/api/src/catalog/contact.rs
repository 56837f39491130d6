//! Live contact lookup for a training institution.
//!
//! The embedded directory can go stale, so a client may ask for the
//! institution's current address, phone and email. `LlmContactLookup` makes
//! one search-grounded call; `StaticContactLookup` answers from the catalog
//! when no API key is configured. A failed lookup is reported in the
//! response body, never as an HTTP error.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::prompts::{build_contact_prompt, CONTACT_SYSTEM_ROLE};
use crate::catalog::University;
use crate::llm_client::{LlmClient, LlmError};

pub const NOT_FOUND_TEXT: &str = "Non trouvé.";
pub const SEARCH_ERROR_TEXT: &str = "Erreur de recherche.";

/// A page the answer was grounded on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSource {
    pub title: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default)]
pub struct ContactAnswer {
    pub text: String,
    pub sources: Vec<ContactSource>,
}

#[async_trait]
pub trait ContactLookup: Send + Sync {
    async fn lookup(&self, university: &University) -> Result<ContactAnswer, LlmError>;

    /// Label reported to clients: "llm" | "static".
    fn backend(&self) -> &'static str;
}

pub struct LlmContactLookup(pub LlmClient);

#[async_trait]
impl ContactLookup for LlmContactLookup {
    async fn lookup(&self, university: &University) -> Result<ContactAnswer, LlmError> {
        let prompt = build_contact_prompt(&university.name, &university.location);
        let response = self.0.search(&prompt, CONTACT_SYSTEM_ROLE).await?;
        Ok(ContactAnswer {
            text: response.joined_text(),
            sources: response
                .sources()
                .into_iter()
                .map(|(title, uri)| ContactSource { title, uri })
                .collect(),
        })
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Echoes the directory entry.
pub struct StaticContactLookup;

#[async_trait]
impl ContactLookup for StaticContactLookup {
    async fn lookup(&self, university: &University) -> Result<ContactAnswer, LlmError> {
        Ok(ContactAnswer {
            text: format!(
                "Adresse : {}\nTéléphone : {}\nEmail : {}",
                university.location, university.phone, university.email
            ),
            sources: Vec::new(),
        })
    }

    fn backend(&self) -> &'static str {
        "static"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    Found,
    NotFound,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct UniversityContact {
    pub university_id: String,
    pub name: String,
    pub status: ContactStatus,
    pub info: String,
    pub sources: Vec<ContactSource>,
    pub tel_url: String,
    pub whatsapp_url: String,
    pub source_backend: String,
}

/// Runs one lookup and folds every outcome into a displayable card.
pub async fn lookup_contact(
    lookup: &dyn ContactLookup,
    university: &University,
) -> UniversityContact {
    info!(
        "Looking up contact for {} via {}",
        university.id,
        lookup.backend()
    );

    let (status, info, sources) = match lookup.lookup(university).await {
        Ok(answer) if answer.text.trim().is_empty() => {
            (ContactStatus::NotFound, NOT_FOUND_TEXT.to_string(), answer.sources)
        }
        Ok(answer) => (ContactStatus::Found, answer.text, answer.sources),
        Err(e) => {
            warn!("Contact lookup failed for {}: {e}", university.id);
            (ContactStatus::Failed, SEARCH_ERROR_TEXT.to_string(), Vec::new())
        }
    };

    UniversityContact {
        university_id: university.id.clone(),
        name: university.name.clone(),
        status,
        info,
        sources,
        tel_url: university.tel_url(),
        whatsapp_url: university.whatsapp_url(),
        source_backend: lookup.backend().to_string(),
    }
}
