use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use shared_types::{LoanResponse, LoanStatus, Role, SummaryResponse};
use std::collections::{HashSet, VecDeque};
use tokio::sync::RwLock;

/// Requests kept in the log before the oldest are dropped.
pub const REQUEST_LOG_CAPACITY: usize = 500;

/// A loan together with the id of the officer it is assigned to.
#[derive(Debug, Clone)]
pub struct StoredLoan {
    pub officer_id: String,
    pub loan: LoanResponse,
}

/// One request as the server received it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    /// `Authorization` scheme with the credential masked, when one was sent.
    pub authorization: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// In-memory loan table plus a log of the most recent requests served.
#[derive(Debug, Default)]
pub struct LoanStore {
    loans: RwLock<Vec<StoredLoan>>,
    requests: RwLock<VecDeque<RecordedRequest>>,
}

impl LoanStore {
    pub fn new(loans: Vec<StoredLoan>) -> Self {
        Self {
            loans: RwLock::new(loans),
            requests: RwLock::new(VecDeque::with_capacity(REQUEST_LOG_CAPACITY)),
        }
    }

    /// Store pre-filled with a handful of loans in every status.
    pub fn seeded() -> Self {
        Self::new(seed_loans(Utc::now()))
    }

    /// Loans visible to a role. Both roles see the whole book.
    pub async fn list_for_role(&self, _role: Role) -> Vec<LoanResponse> {
        self.loans.read().await.iter().map(|s| s.loan.clone()).collect()
    }

    /// Loans assigned to one officer id.
    pub async fn list_for_officer(&self, officer_id: &str) -> Vec<LoanResponse> {
        self.loans
            .read()
            .await
            .iter()
            .filter(|s| s.officer_id == officer_id)
            .map(|s| s.loan.clone())
            .collect()
    }

    /// Aggregate counts computed from the current table.
    pub async fn summary(&self) -> SummaryResponse {
        let loans = self.loans.read().await;

        let borrowers: HashSet<&str> = loans
            .iter()
            .filter_map(|s| s.loan.full_name.as_deref())
            .collect();
        let active: HashSet<&str> = loans
            .iter()
            .filter(|s| matches!(s.loan.status, LoanStatus::Pending | LoanStatus::Verified))
            .filter_map(|s| s.loan.full_name.as_deref())
            .collect();
        let approved: Vec<&StoredLoan> = loans
            .iter()
            .filter(|s| s.loan.status == LoanStatus::Approved)
            .collect();

        SummaryResponse {
            borrow_user_count: borrowers.len() as u64,
            active_user_count: active.len() as u64,
            approved_loan_count: approved.len() as u64,
            total_disbursed_loan_amount: approved.iter().filter_map(|s| s.loan.loan_amount).sum(),
        }
    }

    /// Set a loan's status. Returns the updated loan, or `None` for an unknown id.
    pub async fn set_status(
        &self,
        id: &str,
        status: LoanStatus,
        loan_officer: Option<String>,
    ) -> Option<LoanResponse> {
        let mut loans = self.loans.write().await;
        let stored = loans.iter_mut().find(|s| s.loan.id == id)?;
        stored.loan.status = status;
        if loan_officer.is_some() {
            stored.loan.loan_officer = loan_officer;
        }
        Some(stored.loan.clone())
    }

    pub async fn get(&self, id: &str) -> Option<LoanResponse> {
        self.loans
            .read()
            .await
            .iter()
            .find(|s| s.loan.id == id)
            .map(|s| s.loan.clone())
    }

    pub async fn len(&self) -> usize {
        self.loans.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.loans.read().await.is_empty()
    }

    /// Append to the request log, dropping the oldest entry once it is full.
    pub async fn record(&self, request: RecordedRequest) {
        let mut requests = self.requests.write().await;
        if requests.len() == REQUEST_LOG_CAPACITY {
            requests.pop_front();
        }
        requests.push_back(request);
    }

    /// Logged requests, oldest first.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().await.iter().cloned().collect()
    }
}

fn new_loan_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..24].to_string()
}

/// Seed rows: three officers, four borrowers, every status.
pub fn seed_loans(now: DateTime<Utc>) -> Vec<StoredLoan> {
    let rows: [(&str, &str, &str, &str, f64, i64, LoanStatus); 6] = [
        ("12140090", "Jon Okoh", "Asha Rao", "School fees", 250_000.0, 1, LoanStatus::Pending),
        ("12140090", "Jon Okoh", "Tunde Bello", "Shop inventory", 75_000.0, 3, LoanStatus::Verified),
        ("12140090", "Jon Okoh", "Meera Iyer", "Medical bills", 120_000.0, 8, LoanStatus::Approved),
        ("12140091", "Grace Eze", "Asha Rao", "Home repair", 40_000.0, 12, LoanStatus::Rejected),
        ("12140091", "Grace Eze", "Karan Shah", "Tractor lease", 1_250_000.0, 20, LoanStatus::Approved),
        ("12140092", "Ravi Nair", "Karan Shah", "Seeds", 18_500.5, 2, LoanStatus::Pending),
    ];

    rows.into_iter()
        .map(|(officer_id, officer, borrower, reason, amount, days_ago, status)| StoredLoan {
            officer_id: officer_id.to_string(),
            loan: LoanResponse {
                id: new_loan_id(),
                full_name: Some(borrower.to_string()),
                reason_for_loan: Some(reason.to_string()),
                loan_officer: Some(officer.to_string()),
                loan_amount: Some(amount),
                created_at: now - Duration::days(days_ago),
                status,
            },
        })
        .collect()
}
