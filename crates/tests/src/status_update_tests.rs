use crate::common::{loan, spawn_backend, unreachable_client};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{
    AppErrorKind, LoanAction, LoanQuery, LoanStatus, RowStatus, Role, StatusUpdateRequest,
};

const OFFICER: &str = "Jon Okoh";

#[tokio::test]
async fn admin_accept_sends_one_patch_and_shows_approved() {
    let (client, state) =
        spawn_backend(vec![loan("a1", "12140090", "Asha Rao", 4_000.0, LoanStatus::Pending)]).await;

    let mut row = RowStatus::new(LoanStatus::Pending);
    let applied = client
        .apply_action(&mut row, Role::Admin, "a1", LoanAction::Accept, OFFICER)
        .await
        .unwrap();

    assert_eq!(applied, Some(LoanStatus::Approved));
    assert_eq!(row.displayed(), &LoanStatus::Approved);
    assert_eq!(row.error(), None);

    let patches: Vec<_> = state
        .store
        .requests()
        .await
        .into_iter()
        .filter(|r| r.method == "PATCH")
        .collect();
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].path, "/loans/status-admin");
    assert_eq!(patches[0].query.as_deref(), Some("_id=a1"));
    assert_eq!(patches[0].body, Some(json!({ "status": "APPROVED" })));

    let stored = state.store.get("a1").await.unwrap();
    assert_eq!(stored.status, LoanStatus::Approved);
}

#[tokio::test]
async fn verifier_reject_sends_officer_name() {
    let (client, state) =
        spawn_backend(vec![loan("v1", "12140090", "Tunde Bello", 6_000.0, LoanStatus::Pending)]).await;

    let mut row = RowStatus::new(LoanStatus::Pending);
    client
        .apply_action(&mut row, Role::Verifier, "v1", LoanAction::Reject, OFFICER)
        .await
        .unwrap();

    assert_eq!(row.displayed(), &LoanStatus::Rejected);

    let requests = state.store.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/loans/status-verifier");
    assert_eq!(requests[0].query.as_deref(), Some("_id=v1"));
    assert_eq!(
        requests[0].body,
        Some(json!({ "status": "REJECTED", "loanOfficer": OFFICER }))
    );

    let stored = state.store.get("v1").await.unwrap();
    assert_eq!(stored.loan_officer.as_deref(), Some(OFFICER));
}

#[tokio::test]
async fn verify_then_refetch_shows_verified() {
    let (client, _state) =
        spawn_backend(vec![loan("v2", "12140090", "Meera Iyer", 900.0, LoanStatus::Pending)]).await;

    let mut row = RowStatus::new(LoanStatus::Pending);
    client
        .apply_action(&mut row, Role::Verifier, "v2", LoanAction::Verify, OFFICER)
        .await
        .unwrap();
    assert_eq!(row.displayed(), &LoanStatus::Verified);

    let records = client
        .fetch_loans(&LoanQuery::ByOfficer("12140090".into()))
        .await
        .unwrap();
    assert_eq!(records[0].status, LoanStatus::Verified);
}

#[tokio::test]
async fn unknown_loan_keeps_row_status_and_reports_error() {
    let (client, state) = spawn_backend(Vec::new()).await;

    let mut row = RowStatus::new(LoanStatus::Pending);
    let err = client
        .apply_action(&mut row, Role::Admin, "missing", LoanAction::Reject, OFFICER)
        .await
        .unwrap_err();
    assert_eq!(err.status, Some(404));

    assert_eq!(row.displayed(), &LoanStatus::Pending);
    assert_eq!(row.error(), Some("The loan service answered with status 404."));
    assert!(!row.is_busy());
    assert_eq!(state.store.requests().await.len(), 1);
}

#[tokio::test]
async fn unreachable_backend_keeps_row_status() {
    let client = unreachable_client().await;

    let mut row = RowStatus::new(LoanStatus::Verified);
    let err = client
        .apply_action(&mut row, Role::Admin, "a1", LoanAction::Accept, OFFICER)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
    assert_eq!(row.displayed(), &LoanStatus::Verified);
    assert_eq!(row.error(), Some("Could not reach the loan service."));
}

#[tokio::test]
async fn busy_row_sends_nothing() {
    let (client, state) =
        spawn_backend(vec![loan("a1", "12140090", "Asha Rao", 4_000.0, LoanStatus::Pending)]).await;

    let mut row = RowStatus::new(LoanStatus::Pending);
    row.begin(LoanAction::Reject);
    let applied = client
        .apply_action(&mut row, Role::Admin, "a1", LoanAction::Accept, OFFICER)
        .await
        .unwrap();

    assert_eq!(applied, None);
    assert!(row.is_busy());
    assert!(state.store.requests().await.is_empty());
    assert_eq!(state.store.get("a1").await.unwrap().status, LoanStatus::Pending);
}

#[tokio::test]
async fn admin_update_ignores_officer_name() {
    let (client, state) =
        spawn_backend(vec![loan("a1", "12140090", "Asha Rao", 4_000.0, LoanStatus::Verified)]).await;

    let mut row = RowStatus::new(LoanStatus::Verified);
    client
        .apply_action(&mut row, Role::Admin, "a1", LoanAction::Reject, "Ada Obi")
        .await
        .unwrap();

    let requests = state.store.requests().await;
    assert_eq!(requests[0].body, Some(json!({ "status": "REJECTED" })));
    assert_eq!(state.store.get("a1").await.unwrap().loan_officer.as_deref(), Some("Grace Eze"));
}

#[tokio::test]
async fn update_status_error_is_http_status() {
    let (client, _state) = spawn_backend(Vec::new()).await;

    let body = StatusUpdateRequest::for_role(Role::Verifier, LoanStatus::Verified, OFFICER);
    let err = client
        .update_status(Role::Verifier, "nope", &body)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::HttpStatus);
    assert_eq!(err.status, Some(404));
}
