//! Static reference data: profile templates, tech roles, training institutions.
//!
//! Built once at startup (embedded JSON, or a `CATALOG_DIR` override) and
//! shared read-only through `AppState`. Nothing here is mutated at runtime.

pub mod contact;
pub mod handlers;
pub mod icons;
pub mod models;
pub mod prompts;

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::scoring::StrengthDimension;
pub use models::{JobMatch, ProfileTemplate, RoadmapYear, TechRole, University};

const PROFILES_JSON: &str = include_str!("data/profiles.json");
const ROLES_JSON: &str = include_str!("data/roles.json");
const UNIVERSITIES_JSON: &str = include_str!("data/universities.json");

const ROADMAP_YEARS: usize = 3;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("default profile {0} has no template")]
    MissingDefault(StrengthDimension),

    #[error("invalid catalog entry: {0}")]
    Invalid(String),
}

/// Profile templates keyed by dominant dimension, plus the designated
/// fallback used when a dimension has no template.
#[derive(Debug, Clone)]
pub struct ProfileCatalog {
    templates: BTreeMap<StrengthDimension, ProfileTemplate>,
    default_dimension: StrengthDimension,
    default_template: ProfileTemplate,
}

/// Result of a template lookup.
#[derive(Debug, Clone, Copy)]
pub struct TemplateLookup<'a> {
    pub dimension: StrengthDimension,
    pub template: &'a ProfileTemplate,
    pub fallback: bool,
}

impl ProfileCatalog {
    /// Designates the first canonical dimension as the fallback profile.
    pub fn new(
        templates: BTreeMap<StrengthDimension, ProfileTemplate>,
    ) -> Result<Self, CatalogError> {
        Self::with_default(templates, StrengthDimension::ALL[0])
    }

    pub fn with_default(
        templates: BTreeMap<StrengthDimension, ProfileTemplate>,
        default_dimension: StrengthDimension,
    ) -> Result<Self, CatalogError> {
        for (dimension, template) in &templates {
            validate_template(*dimension, template)?;
        }
        let default_template = templates
            .get(&default_dimension)
            .cloned()
            .ok_or(CatalogError::MissingDefault(default_dimension))?;

        Ok(Self {
            templates,
            default_dimension,
            default_template,
        })
    }

    /// Template for `dimension`, or the designated default when none is registered.
    pub fn lookup(&self, dimension: StrengthDimension) -> TemplateLookup<'_> {
        match self.templates.get(&dimension) {
            Some(template) => TemplateLookup {
                dimension,
                template,
                fallback: false,
            },
            None => TemplateLookup {
                dimension: self.default_dimension,
                template: &self.default_template,
                fallback: true,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }
}

fn validate_template(
    dimension: StrengthDimension,
    template: &ProfileTemplate,
) -> Result<(), CatalogError> {
    if let Some(job) = template.jobs.iter().find(|j| j.match_percent > 100) {
        return Err(CatalogError::Invalid(format!(
            "profile {dimension}: job '{}' has match {} > 100",
            job.title, job.match_percent
        )));
    }
    if template.roadmap.len() != ROADMAP_YEARS {
        return Err(CatalogError::Invalid(format!(
            "profile {dimension}: roadmap has {} entries, expected {ROADMAP_YEARS}",
            template.roadmap.len()
        )));
    }
    Ok(())
}

/// Every static table the service needs.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub profiles: ProfileCatalog,
    pub roles: Vec<TechRole>,
    pub universities: Vec<University>,
}

impl Catalog {
    /// Catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_sources(
            ("profiles.json", PROFILES_JSON),
            ("roles.json", ROLES_JSON),
            ("universities.json", UNIVERSITIES_JSON),
        )
    }

    /// Loads `profiles.json`, `roles.json` and `universities.json` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, CatalogError> {
        let read = |name: &str| {
            std::fs::read_to_string(dir.join(name)).map_err(|source| CatalogError::Io {
                file: dir.join(name).display().to_string(),
                source,
            })
        };
        let profiles = read("profiles.json")?;
        let roles = read("roles.json")?;
        let universities = read("universities.json")?;

        Self::from_sources(
            ("profiles.json", &profiles),
            ("roles.json", &roles),
            ("universities.json", &universities),
        )
    }

    fn from_sources(
        profiles: (&str, &str),
        roles: (&str, &str),
        universities: (&str, &str),
    ) -> Result<Self, CatalogError> {
        let templates: BTreeMap<StrengthDimension, ProfileTemplate> =
            parse(profiles.0, profiles.1)?;
        let roles: Vec<TechRole> = parse(roles.0, roles.1)?;
        let universities: Vec<University> = parse(universities.0, universities.1)?;

        let profiles = ProfileCatalog::new(templates)?;
        info!(
            "Catalog loaded: {} profiles, {} roles, {} universities",
            profiles.len(),
            roles.len(),
            universities.len()
        );

        Ok(Self {
            profiles,
            roles,
            universities,
        })
    }

    pub fn university(&self, id: &str) -> Option<&University> {
        self.universities.iter().find(|u| u.id == id)
    }

    /// Institutions matching `query`; an empty query returns all of them.
    pub fn search_universities(&self, query: &str) -> Vec<&University> {
        let query = query.trim().to_lowercase();
        self.universities
            .iter()
            .filter(|u| query.is_empty() || u.matches(&query))
            .collect()
    }
}

fn parse<T: DeserializeOwned>(file: &str, json: &str) -> Result<T, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Parse {
        file: file.to_string(),
        source,
    })
}
