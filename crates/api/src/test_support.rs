//! Helpers for exercising the router against in-memory SQLite.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use ledgerdesk_db::migration::MigratorTrait;
use ledgerdesk_db::{Migrator, connect};
use ledgerdesk_shared::config::DatabaseConfig;
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use crate::{AppState, create_router};

/// Builds the full router over a freshly migrated in-memory database.
pub async fn test_app() -> Router {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        run_migrations: true,
    };
    let db = connect(&config).await.expect("Failed to connect to database");
    Migrator::up(&db, None).await.expect("Failed to run migrations");

    create_router(AppState::new(db))
}

/// Sends one request and returns the status with the parsed JSON body.
///
/// An empty body comes back as `Value::Null`.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Creates a person through the API and returns its code.
pub async fn create_person(app: &Router, id_number: &str, surname: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/persons",
        Some(serde_json::json!({
            "idNumber": id_number,
            "name": "Test",
            "surname": surname,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["code"].as_i64().unwrap()
}

/// Opens an account through the API and returns its code.
pub async fn create_account(app: &Router, person_code: i64, account_number: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/accounts",
        Some(serde_json::json!({
            "personCode": person_code,
            "accountNumber": account_number,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["code"].as_i64().unwrap()
}

/// Reads a decimal serialized as a JSON string.
pub fn decimal(value: &Value) -> Decimal {
    value.as_str().unwrap().parse().unwrap()
}
