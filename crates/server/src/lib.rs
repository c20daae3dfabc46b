//! Development loan service.
//!
//! Serves the same paths as the deployed backend from an in-memory table so
//! the dashboards and the HTTP client can be exercised locally.

pub mod config;
pub mod health;
pub mod openapi;
pub mod rest;
pub mod state;
pub mod store;

use state::AppState;
use store::LoanStore;

/// Bind `addr`, serve the loan API until the task is dropped, and return the
/// bound address together with the shared state.
pub async fn spawn(
    addr: std::net::SocketAddr,
    store: LoanStore,
) -> std::io::Result<(std::net::SocketAddr, AppState)> {
    let state = AppState::new(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    let router = openapi::app_router(state.clone());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!(error = %e, "loan server stopped");
        }
    });

    Ok((local, state))
}
