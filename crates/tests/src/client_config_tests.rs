use crate::common::{loan, spawn_backend, spawn_header_capture, unreachable_client};
use client::LoanClient;
use pretty_assertions::assert_eq;
use shared_types::{ApiSettings, AppErrorKind, ClientConfig, LoanQuery, LoanStatus, Role};

#[tokio::test]
async fn token_is_sent_as_bearer_header() {
    let (with_token, seen) = spawn_header_capture(Some("s3cret")).await;
    let plain = LoanClient::new(ApiSettings {
        token: None,
        ..with_token.settings().clone()
    });

    with_token.fetch_summary().await.unwrap();
    plain.fetch_summary().await.unwrap();

    let seen = seen.lock().await;
    assert_eq!(seen[0].as_deref(), Some("Bearer s3cret"));
    assert_eq!(seen[1], None);
}

#[tokio::test]
async fn blank_token_is_not_sent() {
    let (blank, seen) = spawn_header_capture(Some("")).await;

    blank.fetch_loans(&LoanQuery::ByRole(Role::Admin)).await.unwrap();
    assert_eq!(*seen.lock().await, vec![None]);
}

#[tokio::test]
async fn development_server_masks_logged_token() {
    let (plain, state) = spawn_backend(Vec::new()).await;
    let with_token = LoanClient::new(ApiSettings {
        token: Some("s3cret".into()),
        ..plain.settings().clone()
    });

    with_token.fetch_summary().await.unwrap();
    assert_eq!(
        state.store.requests().await[0].authorization.as_deref(),
        Some("Bearer [redacted]")
    );
}

#[tokio::test]
async fn lists_use_list_host_and_summary_uses_base_host() {
    let (backend, state) =
        spawn_backend(vec![loan("a1", "12140090", "Asha Rao", 100.0, LoanStatus::Pending)]).await;
    let dead = unreachable_client().await;

    let split = LoanClient::new(ApiSettings {
        base_url: dead.settings().base_url.clone(),
        list_base_url: Some(backend.settings().base_url.clone()),
        token: None,
    });

    let records = split.fetch_loans(&LoanQuery::ByRole(Role::Admin)).await.unwrap();
    assert_eq!(records.len(), 1);

    let err = split.fetch_summary().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
    assert_eq!(state.store.requests().await.len(), 1);
}

#[tokio::test]
async fn base_url_override_points_client_at_backend() {
    let (backend, _state) = spawn_backend(Vec::new()).await;
    let override_url = format!("{}/", backend.settings().base_url);

    let config = ClientConfig::from_toml_str(
        r#"
        [api]
        base_url = "https://credit-sea-beige.vercel.app"
        list_base_url = "https://aoushadhi.in"

        [verifier]
        officer_name = "Grace Eze"
        "#,
    )
    .unwrap()
    .with_base_url_override(Some(&override_url));

    assert_eq!(config.api.base_url, backend.settings().base_url);
    assert_eq!(config.verifier.officer_name, "Grace Eze");

    let client = LoanClient::new(config.api);
    assert!(client.fetch_summary().await.unwrap().is_some());
    assert!(client
        .fetch_loans(&LoanQuery::ByRole(Role::Admin))
        .await
        .unwrap()
        .is_empty());
}
