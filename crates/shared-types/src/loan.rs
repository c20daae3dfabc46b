use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Lifecycle status of a loan.
///
/// Values the backend sends that are not recognised here are kept verbatim in
/// `Other` so they can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LoanStatus {
    Pending,
    Approved,
    Rejected,
    Verified,
    Other(String),
}

impl LoanStatus {
    pub fn as_str(&self) -> &str {
        match self {
            LoanStatus::Pending => "PENDING",
            LoanStatus::Approved => "APPROVED",
            LoanStatus::Rejected => "REJECTED",
            LoanStatus::Verified => "VERIFIED",
            LoanStatus::Other(raw) => raw,
        }
    }

    /// Parse a status string. Matching is exact, as the backend sends
    /// upper-case values.
    pub fn parse(s: &str) -> Self {
        match s {
            "PENDING" => LoanStatus::Pending,
            "APPROVED" => LoanStatus::Approved,
            "REJECTED" => LoanStatus::Rejected,
            "VERIFIED" => LoanStatus::Verified,
            other => LoanStatus::Other(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, LoanStatus::Other(_))
    }

    /// Visual tone of the status badge.
    pub fn tone(&self) -> StatusTone {
        match self {
            LoanStatus::Approved => StatusTone::Blue,
            LoanStatus::Pending => StatusTone::Yellow,
            LoanStatus::Rejected => StatusTone::Red,
            LoanStatus::Verified | LoanStatus::Other(_) => StatusTone::Gray,
        }
    }
}

impl From<String> for LoanStatus {
    fn from(s: String) -> Self {
        match LoanStatus::parse(&s) {
            LoanStatus::Other(_) => LoanStatus::Other(s),
            known => known,
        }
    }
}

impl From<LoanStatus> for String {
    fn from(status: LoanStatus) -> Self {
        match status {
            LoanStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge colour for a loan status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Blue,
    Yellow,
    Red,
    Gray,
}

/// Dashboard role. Decides which actions a row offers and which endpoint a
/// status change goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Verifier,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Verifier => "verifier",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Verifier => "Verifier",
        }
    }

    /// Actions shown in a row's menu, in display order.
    pub fn actions(&self) -> &'static [LoanAction] {
        match self {
            Role::Admin => &[LoanAction::Accept, LoanAction::Reject],
            Role::Verifier => &[LoanAction::Verify, LoanAction::Reject],
        }
    }

    /// Path of the PATCH endpoint that records this role's decision.
    pub fn status_path(&self) -> &'static str {
        match self {
            Role::Admin => "/loans/status-admin",
            Role::Verifier => "/loans/status-verifier",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry in a row's action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanAction {
    Verify,
    Reject,
    Accept,
}

impl LoanAction {
    pub fn label(&self) -> &'static str {
        match self {
            LoanAction::Verify => "Verify",
            LoanAction::Reject => "Reject",
            LoanAction::Accept => "Accept",
        }
    }

    /// Status a loan moves to when this action succeeds.
    pub fn target_status(&self) -> LoanStatus {
        match self {
            LoanAction::Verify => LoanStatus::Verified,
            LoanAction::Reject => LoanStatus::Rejected,
            LoanAction::Accept => LoanStatus::Approved,
        }
    }
}

/// Which loans a list shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoanQuery {
    /// `GET /loans/?role={role}`
    ByRole(Role),
    /// `GET /loans/id?idNumber={id}`
    ByOfficer(String),
}

impl LoanQuery {
    pub fn path(&self) -> &'static str {
        match self {
            LoanQuery::ByRole(_) => "/loans/",
            LoanQuery::ByOfficer(_) => "/loans/id",
        }
    }

    pub fn params(&self) -> [(&'static str, String); 1] {
        match self {
            LoanQuery::ByRole(role) => [("role", role.as_str().to_string())],
            LoanQuery::ByOfficer(id) => [("idNumber", id.clone())],
        }
    }
}

// ---------------------------------------------------------------------------
// Wire schemas
// ---------------------------------------------------------------------------

/// One element of the `/loans/summary` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub borrow_user_count: u64,
    pub active_user_count: u64,
    pub approved_loan_count: u64,
    #[serde(rename = "totalDisbursedloanAmount")]
    pub total_disbursed_loan_amount: f64,
}

/// Body of `/loans/summary`: the deployed backend sends an array, a single
/// object is accepted as well.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SummaryPayload {
    Many(Vec<SummaryResponse>),
    One(SummaryResponse),
}

impl SummaryPayload {
    /// Reduce the payload to one summary. Only the first array element is
    /// used; the rest are dropped with a warning.
    pub fn into_summary(self) -> Option<LoanSummary> {
        match self {
            SummaryPayload::One(one) => Some(one.into()),
            SummaryPayload::Many(many) => {
                if many.len() > 1 {
                    tracing::warn!(
                        received = many.len(),
                        "summary response has more than one element, using the first"
                    );
                }
                many.into_iter().next().map(LoanSummary::from)
            }
        }
    }
}

/// A loan as returned by the list endpoints.
///
/// The role-scoped and id-scoped endpoints return different subsets of the
/// optional fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LoanResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_for_loan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_officer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<f64>,
    pub created_at: DateTime<Utc>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "PENDING"))]
    pub status: LoanStatus,
}

/// Body of the status PATCH endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "APPROVED"))]
    pub status: LoanStatus,
    /// Required by the verifier endpoint, absent for the admin endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_officer: Option<String>,
}

impl StatusUpdateRequest {
    pub fn for_role(role: Role, status: LoanStatus, officer_name: &str) -> Self {
        let loan_officer = match role {
            Role::Verifier => Some(officer_name.to_string()),
            Role::Admin => None,
        };
        Self {
            status,
            loan_officer,
        }
    }
}

// ---------------------------------------------------------------------------
// Display models
// ---------------------------------------------------------------------------

/// Aggregate counts shown in a dashboard's stat tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanSummary {
    pub borrower_count: u64,
    pub active_user_count: u64,
    pub approved_loan_count: u64,
    pub total_disbursed_amount: f64,
}

impl From<SummaryResponse> for LoanSummary {
    fn from(r: SummaryResponse) -> Self {
        Self {
            borrower_count: r.borrow_user_count,
            active_user_count: r.active_user_count,
            approved_loan_count: r.approved_loan_count,
            total_disbursed_amount: r.total_disbursed_loan_amount,
        }
    }
}

/// One loan, mapped for display.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanRecord {
    pub id: String,
    pub borrower_name: Option<String>,
    pub officer: Option<String>,
    pub reason: Option<String>,
    pub amount: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub status: LoanStatus,
}

impl LoanRecord {
    /// Name shown next to the avatar: the borrower, else the officer.
    pub fn headline(&self) -> &str {
        self.borrower_name
            .as_deref()
            .or(self.officer.as_deref())
            .unwrap_or("Unknown borrower")
    }
}

impl From<LoanResponse> for LoanRecord {
    fn from(r: LoanResponse) -> Self {
        Self {
            id: r.id,
            borrower_name: non_blank(r.full_name),
            officer: non_blank(r.loan_officer),
            reason: non_blank(r.reason_for_loan),
            amount: r.loan_amount,
            created_at: r.created_at,
            status: r.status,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
