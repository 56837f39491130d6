use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::catalog::contact::{lookup_contact, UniversityContact};
use crate::catalog::{TechRole, University};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct UniversityQuery {
    pub q: Option<String>,
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<Vec<TechRole>> {
    Json(state.catalog.roles.clone())
}

/// GET /api/v1/universities?q=
pub async fn handle_search_universities(
    State(state): State<AppState>,
    Query(params): Query<UniversityQuery>,
) -> Json<Vec<University>> {
    let query = params.q.unwrap_or_default();
    Json(
        state
            .catalog
            .search_universities(&query)
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// POST /api/v1/universities/:id/contact
///
/// One live lookup of the institution's current coordinates. Lookup
/// failures come back as `status: "failed"`; only an unknown id is an error.
pub async fn handle_university_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UniversityContact>, AppError> {
    let university = state
        .catalog
        .university(&id)
        .ok_or_else(|| AppError::Validation(format!("unknown university '{id}'")))?;
    Ok(Json(
        lookup_contact(state.contact_lookup.as_ref(), university).await,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::catalog::contact::tests::FailingLookup;
    use crate::catalog::contact::{ContactStatus, SEARCH_ERROR_TEXT};
    use crate::state::test_state;

    #[tokio::test]
    async fn test_list_roles() {
        let Json(roles) = handle_list_roles(State(test_state())).await;
        assert_eq!(roles.len(), 22);
    }

    #[tokio::test]
    async fn test_search_universities_filters() {
        let Json(found) = handle_search_universities(
            State(test_state()),
            Query(UniversityQuery {
                q: Some("cybersécurité".to_string()),
            }),
        )
        .await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "ifri");
    }

    #[tokio::test]
    async fn test_search_universities_without_query() {
        let state = test_state();
        let total = state.catalog.universities.len();
        let Json(found) =
            handle_search_universities(State(state), Query(UniversityQuery::default())).await;
        assert_eq!(found.len(), total);
    }

    #[tokio::test]
    async fn test_university_contact_static_backend() {
        let Json(contact) =
            handle_university_contact(State(test_state()), Path("ifri".to_string()))
                .await
                .unwrap();
        assert_eq!(contact.status, ContactStatus::Found);
        assert_eq!(contact.name, "IFRI / EPAC");
        assert_eq!(contact.whatsapp_url, "https://wa.me/22955028888");
    }

    #[tokio::test]
    async fn test_university_contact_unknown_id_is_validation_error() {
        let err = handle_university_contact(State(test_state()), Path("sorbonne".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("sorbonne")));
    }

    #[tokio::test]
    async fn test_university_contact_upstream_failure_is_not_an_error() {
        let state = AppState {
            contact_lookup: Arc::new(FailingLookup),
            ..test_state()
        };
        let Json(contact) = handle_university_contact(State(state), Path("epitech".to_string()))
            .await
            .unwrap();
        assert_eq!(contact.status, ContactStatus::Failed);
        assert_eq!(contact.info, SEARCH_ERROR_TEXT);
        assert_eq!(contact.source_backend, "failing");
    }
}
