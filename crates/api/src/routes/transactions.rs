//! Transaction routes.
//!
//! Every successful write is followed by a balance recompute inside the
//! service, so the owning account reflects the change once the response
//! is sent.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use ledgerdesk_core::transaction::TransactionInput;
use ledgerdesk_shared::types::{AccountCode, TransactionCode};
use serde::Deserialize;
use tracing::info;

use crate::AppState;
use crate::error::{ApiError, ApiResult};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", post(create_transaction))
        .route(
            "/transactions/{code}",
            get(get_transaction).put(update_transaction),
        )
        .route(
            "/transactions/by-account/{account_code}",
            get(list_account_transactions),
        )
}

/// Request body for updating a transaction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionRequest {
    /// Must equal the code in the path.
    #[serde(default)]
    pub code: Option<TransactionCode>,
    /// Updated fields. The account code must stay the same.
    #[serde(flatten)]
    pub transaction: TransactionInput,
}

/// GET `/transactions/{code}`
async fn get_transaction(
    State(state): State<AppState>,
    Path(code): Path<TransactionCode>,
) -> ApiResult<Response> {
    match state.transactions.get_by_code(code).await? {
        Some(transaction) => Ok(Json(transaction).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// GET `/transactions/by-account/{account_code}`
async fn list_account_transactions(
    State(state): State<AppState>,
    Path(account_code): Path<AccountCode>,
) -> ApiResult<Response> {
    let transactions = state.transactions.get_by_account_code(account_code).await?;
    Ok(Json(transactions).into_response())
}

/// POST `/transactions` - post a transaction to an open account.
async fn create_transaction(
    State(state): State<AppState>,
    Json(payload): Json<TransactionInput>,
) -> ApiResult<Response> {
    let transaction = state.transactions.create(payload).await?;

    info!(
        transaction_code = %transaction.code,
        account_code = %transaction.account_code,
        amount = %transaction.amount,
        "Transaction posted"
    );
    Ok((StatusCode::CREATED, Json(transaction)).into_response())
}

/// PUT `/transactions/{code}` - amend date, amount or description.
async fn update_transaction(
    State(state): State<AppState>,
    Path(code): Path<TransactionCode>,
    Json(payload): Json<UpdateTransactionRequest>,
) -> ApiResult<Response> {
    if payload.code != Some(code) {
        return Err(ApiError::route_code_mismatch());
    }

    match state.transactions.update(code, payload.transaction).await? {
        Some(transaction) => {
            info!(
                transaction_code = %code,
                account_code = %transaction.account_code,
                amount = %transaction.amount,
                "Transaction updated"
            );
            Ok(Json(transaction).into_response())
        }
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}
