//! Person management routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use ledgerdesk_core::person::{PersonFilter, PersonInput};
use ledgerdesk_shared::types::{PageRequest, PersonCode};
use serde::Deserialize;
use tracing::info;

use crate::AppState;
use crate::error::{ApiError, ApiResult};

/// Creates the person routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/persons", get(search_persons).post(create_person))
        .route("/persons/all", get(list_persons))
        .route(
            "/persons/{code}",
            get(get_person).put(update_person).delete(delete_person),
        )
}

// ============================================================================
// Request Types
// ============================================================================

/// Query parameters for the paged person search.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPersonsQuery {
    /// Exact ID number.
    pub id_number: Option<String>,
    /// Surname fragment.
    pub surname: Option<String>,
    /// Number of an account the person owns.
    pub account_number: Option<String>,
    /// 1-based page number (default 1).
    pub page_number: Option<i64>,
    /// Page size (default 10, clamped into 1..=10).
    pub page_size: Option<i64>,
}

/// Request body for updating a person.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersonRequest {
    /// Must equal the code in the path.
    #[serde(default)]
    pub code: Option<PersonCode>,
    /// Updated fields.
    #[serde(flatten)]
    pub person: PersonInput,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/persons` - search persons page by page.
async fn search_persons(
    State(state): State<AppState>,
    Query(query): Query<SearchPersonsQuery>,
) -> ApiResult<Response> {
    let defaults = PageRequest::default();
    let page = PageRequest::new(
        query.page_number.unwrap_or(defaults.page_number),
        query.page_size.unwrap_or(defaults.page_size),
    );
    let filter = PersonFilter {
        id_number: query.id_number,
        surname: query.surname,
        account_number: query.account_number,
    };

    let result = state.persons.search(filter, page).await?;
    Ok(Json(result).into_response())
}

/// GET `/persons/all` - list every person.
async fn list_persons(State(state): State<AppState>) -> ApiResult<Response> {
    let persons = state.persons.get_all().await?;
    Ok(Json(persons).into_response())
}

/// GET `/persons/{code}` - a person with its accounts.
async fn get_person(
    State(state): State<AppState>,
    Path(code): Path<PersonCode>,
) -> ApiResult<Response> {
    match state.persons.get_detail(code).await? {
        Some(detail) => Ok(Json(detail).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// POST `/persons` - create a person.
async fn create_person(
    State(state): State<AppState>,
    Json(payload): Json<PersonInput>,
) -> ApiResult<Response> {
    let person = state.persons.create(payload).await?;

    info!(person_code = %person.code, id_number = %person.id_number, "Person created");
    Ok((StatusCode::CREATED, Json(person)).into_response())
}

/// PUT `/persons/{code}` - update a person.
async fn update_person(
    State(state): State<AppState>,
    Path(code): Path<PersonCode>,
    Json(payload): Json<UpdatePersonRequest>,
) -> ApiResult<Response> {
    if payload.code != Some(code) {
        return Err(ApiError::route_code_mismatch());
    }

    match state.persons.update(code, payload.person).await? {
        Some(person) => {
            info!(person_code = %code, "Person updated");
            Ok(Json(person).into_response())
        }
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// DELETE `/persons/{code}` - delete a person whose accounts are all closed.
async fn delete_person(
    State(state): State<AppState>,
    Path(code): Path<PersonCode>,
) -> ApiResult<Response> {
    if state.persons.delete(code).await? {
        info!(person_code = %code, "Person deleted");
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok(StatusCode::NOT_FOUND.into_response())
    }
}
