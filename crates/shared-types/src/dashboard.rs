use crate::{AppError, LoanAction, LoanStatus, LoanSummary, Role};
use std::fmt;

// ---------------------------------------------------------------------------
// Stat tiles
// ---------------------------------------------------------------------------

/// Which aggregate a stat tile shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Borrowers,
    Active,
    Loans,
    CashDisbursed,
}

impl TileKind {
    pub fn label(&self) -> &'static str {
        match self {
            TileKind::Borrowers => "Borrowers",
            TileKind::Active => "Active",
            TileKind::Loans => "Loans",
            TileKind::CashDisbursed => "Cash Disbursed",
        }
    }

    /// Tiles a role's dashboard shows, in grid order.
    pub fn for_role(role: Role) -> &'static [TileKind] {
        match role {
            Role::Admin => &[
                TileKind::Active,
                TileKind::Loans,
                TileKind::Borrowers,
                TileKind::CashDisbursed,
            ],
            Role::Verifier => &[TileKind::Loans, TileKind::Borrowers, TileKind::CashDisbursed],
        }
    }

    fn value(&self, summary: &LoanSummary) -> String {
        match self {
            TileKind::Borrowers => summary.borrower_count.to_string(),
            TileKind::Active => summary.active_user_count.to_string(),
            TileKind::Loans => summary.approved_loan_count.to_string(),
            TileKind::CashDisbursed => summary.total_disbursed_amount.to_string(),
        }
    }
}

/// A label/value pair ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct StatTile {
    pub kind: TileKind,
    pub value: String,
}

impl StatTile {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

impl fmt::Display for StatTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.value)
    }
}

/// Build a role's tiles. Without a summary every tile shows `0`.
pub fn summary_tiles(summary: Option<&LoanSummary>, role: Role) -> Vec<StatTile> {
    TileKind::for_role(role)
        .iter()
        .map(|kind| StatTile {
            kind: *kind,
            value: summary
                .map(|s| kind.value(s))
                .unwrap_or_else(|| "0".to_string()),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Section load state
// ---------------------------------------------------------------------------

/// What a data-backed section renders: a placeholder, an error line, or data.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> LoadState<T> {
    /// Map the value of a pending fetch (`None` while in flight).
    pub fn from_fetch(result: Option<Result<T, AppError>>) -> Self {
        match result {
            None => LoadState::Loading,
            Some(Err(err)) => LoadState::Failed(err.friendly_message()),
            Some(Ok(value)) => LoadState::Ready(value),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Row status transitions
// ---------------------------------------------------------------------------

/// Displayed status of one loan row plus its in-flight transition.
///
/// The displayed status only changes once the backend has accepted the
/// update (`confirm`). A failed update leaves it untouched and records the
/// error for the row to show.
#[derive(Debug, Clone, PartialEq)]
pub struct RowStatus {
    displayed: LoanStatus,
    pending: Option<LoanStatus>,
    error: Option<String>,
}

impl RowStatus {
    pub fn new(status: LoanStatus) -> Self {
        Self {
            displayed: status,
            pending: None,
            error: None,
        }
    }

    pub fn displayed(&self) -> &LoanStatus {
        &self.displayed
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a transition. Returns the status to send, or `None` while another
    /// transition is still in flight.
    pub fn begin(&mut self, action: LoanAction) -> Option<LoanStatus> {
        if self.is_busy() {
            return None;
        }
        let target = action.target_status();
        self.pending = Some(target.clone());
        self.error = None;
        Some(target)
    }

    /// The backend accepted the pending status.
    pub fn confirm(&mut self) {
        if let Some(status) = self.pending.take() {
            self.displayed = status;
        }
    }

    /// The backend call failed; keep the current status.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.pending = None;
        self.error = Some(message.into());
    }
}

/// Mutable access to a row's status wherever it is kept: a plain value in
/// tests, a reactive signal in the UI.
pub trait RowHandle {
    fn update<T>(&mut self, f: impl FnOnce(&mut RowStatus) -> T) -> T;
}

impl RowHandle for RowStatus {
    fn update<T>(&mut self, f: impl FnOnce(&mut RowStatus) -> T) -> T {
        f(self)
    }
}
