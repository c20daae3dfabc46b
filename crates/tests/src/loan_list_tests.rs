use crate::common::{loan, spawn_backend, spawn_stub, unreachable_client};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, LoanQuery, LoanStatus, Role, StatusTone};

#[tokio::test]
async fn one_record_per_loan_in_backend_order() {
    let (client, _state) = spawn_backend(vec![
        loan("a1", "12140090", "Asha Rao", 4_000.0, LoanStatus::Pending),
        loan("a2", "12140091", "Tunde Bello", 6_000.0, LoanStatus::Approved),
        loan("a3", "12140092", "Meera Iyer", 1_500.0, LoanStatus::Rejected),
    ])
    .await;

    let records = client.fetch_loans(&LoanQuery::ByRole(Role::Admin)).await.unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2", "a3"]);
    assert_eq!(records[1].headline(), "Tunde Bello");
    assert_eq!(records[1].amount, Some(6_000.0));
}

#[tokio::test]
async fn role_list_sends_role_query() {
    let (client, state) = spawn_backend(Vec::new()).await;

    let records = client.fetch_loans(&LoanQuery::ByRole(Role::Verifier)).await.unwrap();
    assert!(records.is_empty());

    let requests = state.store.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/loans/");
    assert_eq!(requests[0].query.as_deref(), Some("role=verifier"));
}

#[tokio::test]
async fn officer_list_only_contains_that_officers_loans() {
    let (client, state) = spawn_backend(vec![
        loan("a1", "12140090", "Asha Rao", 4_000.0, LoanStatus::Pending),
        loan("a2", "12140091", "Tunde Bello", 6_000.0, LoanStatus::Pending),
        loan("a3", "12140090", "Meera Iyer", 1_500.0, LoanStatus::Verified),
    ])
    .await;

    let records = client
        .fetch_loans(&LoanQuery::ByOfficer("12140090".into()))
        .await
        .unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a3"]);

    let requests = state.store.requests().await;
    assert_eq!(requests[0].path, "/loans/id");
    assert_eq!(requests[0].query.as_deref(), Some("idNumber=12140090"));
}

#[tokio::test]
async fn badge_tones_follow_status() {
    let (client, _state) = spawn_backend(vec![
        loan("a1", "1", "Asha Rao", 1.0, LoanStatus::Approved),
        loan("a2", "1", "Tunde Bello", 1.0, LoanStatus::Pending),
        loan("a3", "1", "Meera Iyer", 1.0, LoanStatus::Rejected),
        loan("a4", "1", "Karan Shah", 1.0, LoanStatus::Verified),
        loan("a5", "1", "Ravi Nair", 1.0, LoanStatus::Other("ON_HOLD".into())),
    ])
    .await;

    let records = client.fetch_loans(&LoanQuery::ByRole(Role::Admin)).await.unwrap();
    let tones: Vec<StatusTone> = records.iter().map(|r| r.status.tone()).collect();
    assert_eq!(
        tones,
        vec![
            StatusTone::Blue,
            StatusTone::Yellow,
            StatusTone::Red,
            StatusTone::Gray,
            StatusTone::Gray
        ]
    );
    assert_eq!(records[4].status.as_str(), "ON_HOLD");
}

#[tokio::test]
async fn missing_optional_fields_still_render() {
    let client = spawn_stub(
        200,
        r#"[{"_id":"x1","createdAt":"2024-09-23T10:15:00Z","status":"PENDING","loanOfficer":"Grace Eze"}]"#,
    )
    .await;

    let records = client.fetch_loans(&LoanQuery::ByOfficer("1".into())).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].borrower_name, None);
    assert_eq!(records[0].amount, None);
    assert_eq!(records[0].headline(), "Grace Eze");
}

#[tokio::test]
async fn list_failures_are_typed() {
    let err = unreachable_client()
        .await
        .fetch_loans(&LoanQuery::ByRole(Role::Admin))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);

    let err = spawn_stub(200, r#"{"loans":[]}"#)
        .await
        .fetch_loans(&LoanQuery::ByRole(Role::Admin))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::MalformedResponse);

    let err = spawn_stub(404, "{}")
        .await
        .fetch_loans(&LoanQuery::ByRole(Role::Admin))
        .await
        .unwrap_err();
    assert_eq!(err.status, Some(404));
}
