pub mod loan;
pub mod request_log;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::state::AppState;

/// Routes of the loan service, mirroring the deployed backend's paths.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/loans/summary", get(loan::loan_summary))
        .route("/loans", get(loan::list_by_role))
        .route("/loans/", get(loan::list_by_role))
        .route("/loans/id", get(loan::list_by_officer))
        .route("/loans/status-admin", patch(loan::update_status_admin))
        .route("/loans/status-verifier", patch(loan::update_status_verifier))
}
