//! Account management routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use ledgerdesk_core::account::AccountInput;
use ledgerdesk_shared::types::{AccountCode, PersonCode};
use serde::Deserialize;
use tracing::info;

use crate::AppState;
use crate::error::{ApiError, ApiResult};

/// Creates the account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", post(create_account))
        .route("/accounts/{code}", get(get_account).put(update_account))
        .route(
            "/accounts/by-number/{account_number}",
            get(get_account_by_number),
        )
        .route("/accounts/by-person/{person_code}", get(list_person_accounts))
        .route("/accounts/{code}/close", post(close_account))
        .route("/accounts/{code}/reopen", post(reopen_account))
}

/// Request body for updating an account.
///
/// Balance and status fields in the payload are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    /// Must equal the code in the path.
    #[serde(default)]
    pub code: Option<AccountCode>,
    /// Updated owner and number.
    #[serde(flatten)]
    pub account: AccountInput,
}

/// GET `/accounts/{code}`
async fn get_account(
    State(state): State<AppState>,
    Path(code): Path<AccountCode>,
) -> ApiResult<Response> {
    match state.accounts.get_by_code(code).await? {
        Some(account) => Ok(Json(account).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// GET `/accounts/by-number/{account_number}`
async fn get_account_by_number(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
) -> ApiResult<Response> {
    match state.accounts.get_by_account_number(&account_number).await? {
        Some(account) => Ok(Json(account).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// GET `/accounts/by-person/{person_code}`
async fn list_person_accounts(
    State(state): State<AppState>,
    Path(person_code): Path<PersonCode>,
) -> ApiResult<Response> {
    let accounts = state.accounts.get_by_person_code(person_code).await?;
    Ok(Json(accounts).into_response())
}

/// POST `/accounts` - open an account for an existing person.
async fn create_account(
    State(state): State<AppState>,
    Json(payload): Json<AccountInput>,
) -> ApiResult<Response> {
    let account = state.accounts.create(payload).await?;

    info!(
        account_code = %account.code,
        person_code = %account.person_code,
        account_number = %account.account_number,
        "Account created"
    );
    Ok((StatusCode::CREATED, Json(account)).into_response())
}

/// PUT `/accounts/{code}` - change owner or number.
async fn update_account(
    State(state): State<AppState>,
    Path(code): Path<AccountCode>,
    Json(payload): Json<UpdateAccountRequest>,
) -> ApiResult<Response> {
    if payload.code != Some(code) {
        return Err(ApiError::route_code_mismatch());
    }

    match state.accounts.update(code, payload.account).await? {
        Some(account) => {
            info!(account_code = %code, "Account updated");
            Ok(Json(account).into_response())
        }
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// POST `/accounts/{code}/close`
async fn close_account(
    State(state): State<AppState>,
    Path(code): Path<AccountCode>,
) -> ApiResult<Response> {
    match state.accounts.close(code).await? {
        Some(account) => {
            info!(account_code = %code, "Account closed");
            Ok(Json(account).into_response())
        }
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// POST `/accounts/{code}/reopen`
async fn reopen_account(
    State(state): State<AppState>,
    Path(code): Path<AccountCode>,
) -> ApiResult<Response> {
    match state.accounts.reopen(code).await? {
        Some(account) => {
            info!(account_code = %code, "Account reopened");
            Ok(Json(account).into_response())
        }
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}
