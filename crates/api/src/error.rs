//! JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ledgerdesk_core::ServiceError;
use ledgerdesk_shared::AppError;
use serde::Serialize;
use tracing::error;

/// Raised when a path code and the code inside the payload disagree.
pub const ROUTE_CODE_MISMATCH: &str = "The route code and body code must match.";

/// Result type for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Body of every error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// HTTP status code, repeated in the body.
    pub status_code: u16,
    /// Client-facing message.
    pub message: String,
}

/// Error returned by route handlers.
#[derive(Debug)]
pub struct ApiError(AppError);

impl ApiError {
    /// The path code does not match the payload code.
    #[must_use]
    pub fn route_code_mismatch() -> Self {
        Self(AppError::Validation(ROUTE_CODE_MISMATCH.to_string()))
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, message) = self.0.response_parts();

        if self.0.is_server_error() {
            error!(error = %self.0, "Request failed unexpectedly");
        }

        let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            Json(ErrorBody {
                status_code,
                message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_conflict_is_bad_request_with_message() {
        let response = ApiError::from(ServiceError::conflict("The account is not closed."))
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["message"], "The account is not closed.");
    }

    #[tokio::test]
    async fn test_storage_failure_is_opaque() {
        let response =
            ApiError::from(ServiceError::Repository("connection reset".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["statusCode"], 500);
        assert_eq!(body["message"], "An unexpected error occurred.");
    }

    #[tokio::test]
    async fn test_route_code_mismatch() {
        let response = ApiError::route_code_mismatch().into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], ROUTE_CODE_MISMATCH);
    }
}
