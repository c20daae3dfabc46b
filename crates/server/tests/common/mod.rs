use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use server::state::AppState;
use server::store::{LoanStore, StoredLoan};
use shared_types::{LoanResponse, LoanStatus};
use tower::ServiceExt;

/// Build the full router over the given loans.
pub fn test_app(loans: Vec<StoredLoan>) -> (Router, AppState) {
    let state = AppState::new(LoanStore::new(loans));
    (server::openapi::app_router(state.clone()), state)
}

/// A stored loan with every optional field filled in.
pub fn stored_loan(id: &str, officer_id: &str, borrower: &str, status: LoanStatus) -> StoredLoan {
    StoredLoan {
        officer_id: officer_id.to_string(),
        loan: LoanResponse {
            id: id.to_string(),
            full_name: Some(borrower.to_string()),
            reason_for_loan: Some("Working capital".to_string()),
            loan_officer: Some("Grace Eze".to_string()),
            loan_amount: Some(10_000.0),
            created_at: Utc.with_ymd_and_hms(2024, 9, 23, 10, 15, 0).unwrap(),
            status,
        },
    }
}

#[allow(dead_code)]
/// Helper to make a GET request and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[allow(dead_code)]
/// Helper to make a PATCH request with JSON body.
pub async fn patch_json(app: &Router, uri: &str, json: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
