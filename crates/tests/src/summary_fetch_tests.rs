use crate::common::{loan, spawn_backend, spawn_stub, unreachable_client};
use pretty_assertions::assert_eq;
use shared_types::{summary_tiles, AppErrorKind, LoadState, LoanStatus, Role};

fn rendered(tiles: Vec<shared_types::StatTile>) -> Vec<String> {
    tiles.iter().map(ToString::to_string).collect()
}

#[tokio::test]
async fn summary_drives_admin_tiles() {
    let (client, _state) = spawn_backend(vec![
        loan("a1", "12140090", "Asha Rao", 4_000.0, LoanStatus::Approved),
        loan("a2", "12140090", "Tunde Bello", 6_000.0, LoanStatus::Approved),
        loan("a3", "12140091", "Meera Iyer", 1_500.0, LoanStatus::Pending),
        loan("a4", "12140091", "Karan Shah", 2_500.0, LoanStatus::Pending),
        loan("a5", "12140092", "Ravi Nair", 900.0, LoanStatus::Verified),
    ])
    .await;

    let summary = client.fetch_summary().await.expect("summary request failed");
    let summary = summary.expect("backend returned no summary rows");

    assert_eq!(
        rendered(summary_tiles(Some(&summary), Role::Admin)),
        vec!["Active: 3", "Loans: 2", "Borrowers: 5", "Cash Disbursed: 10000"]
    );
    assert_eq!(
        rendered(summary_tiles(Some(&summary), Role::Verifier)),
        vec!["Loans: 2", "Borrowers: 5", "Cash Disbursed: 10000"]
    );
}

#[tokio::test]
async fn empty_backend_reports_zeroes() {
    let (client, _state) = spawn_backend(Vec::new()).await;

    let summary = client.fetch_summary().await.unwrap();
    let tiles = summary_tiles(summary.as_ref(), Role::Admin);
    assert!(tiles.iter().all(|t| t.value == "0"), "{tiles:?}");
}

#[tokio::test]
async fn empty_summary_array_is_no_summary() {
    let client = spawn_stub(200, "[]").await;

    let summary = client.fetch_summary().await.unwrap();
    assert_eq!(summary, None);
    assert_eq!(
        rendered(summary_tiles(summary.as_ref(), Role::Verifier)),
        vec!["Loans: 0", "Borrowers: 0", "Cash Disbursed: 0"]
    );
}

#[tokio::test]
async fn single_object_summary_is_accepted() {
    let client = spawn_stub(
        200,
        r#"{"borrowUserCount":2,"activeUserCount":1,"approvedLoanCount":1,"totalDisbursedloanAmount":1250.5}"#,
    )
    .await;

    let summary = client.fetch_summary().await.unwrap().unwrap();
    assert_eq!(summary.borrower_count, 2);
    assert_eq!(summary.total_disbursed_amount, 1250.5);
}

#[tokio::test]
async fn unreachable_backend_shows_error_instead_of_tiles() {
    let client = unreachable_client().await;

    let result = client.fetch_summary().await;
    let err = result.clone().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);

    let state = LoadState::from_fetch(Some(result));
    assert_eq!(state.ready(), None);
    assert_eq!(state.error(), Some("Could not reach the loan service."));
}

#[tokio::test]
async fn server_error_is_an_http_status_error() {
    let client = spawn_stub(500, r#"{"message":"boom"}"#).await;

    let err = client.fetch_summary().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::HttpStatus);
    assert_eq!(err.status, Some(500));
    assert_eq!(err.friendly_message(), "The loan service answered with status 500.");
}

#[tokio::test]
async fn wrong_field_types_are_malformed() {
    let client = spawn_stub(200, r#"[{"borrowUserCount":"many"}]"#).await;

    let err = client.fetch_summary().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::MalformedResponse);
}
