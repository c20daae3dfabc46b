use std::sync::Arc;
use std::time::Instant;

use crate::store::LoanStore;

/// Shared application state passed to Axum handlers via `State`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LoanStore>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(store: LoanStore) -> Self {
        Self {
            store: Arc::new(store),
            started_at: Instant::now(),
        }
    }
}
