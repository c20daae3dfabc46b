use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::state::AppState;
use shared_types::{AppError, LoanResponse, LoanStatus, Role, StatusUpdateRequest, SummaryResponse};

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoleParams {
    /// `admin` or `verifier`.
    pub role: String,
}

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct OfficerParams {
    pub id_number: String,
}

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusParams {
    #[serde(rename = "_id")]
    pub id: String,
}

fn parse_role(raw: &str) -> Result<Role, AppError> {
    match raw {
        "admin" => Ok(Role::Admin),
        "verifier" => Ok(Role::Verifier),
        other => Err(AppError::bad_request(format!("Unknown role: {other}"))),
    }
}

fn require_known(status: LoanStatus) -> Result<LoanStatus, AppError> {
    if status.is_known() {
        Ok(status)
    } else {
        Err(AppError::bad_request(format!("Invalid status: {status}")))
    }
}

// ---------------------------------------------------------------------------
// GET /loans/summary
// ---------------------------------------------------------------------------

/// Aggregate counts for the dashboard tiles, as a one-element array.
#[utoipa::path(
    get,
    path = "/loans/summary",
    responses(
        (status = 200, description = "Loan summary", body = Vec<SummaryResponse>)
    ),
    tag = "loans"
)]
pub async fn loan_summary(State(state): State<AppState>) -> Json<Vec<SummaryResponse>> {
    Json(vec![state.store.summary().await])
}

// ---------------------------------------------------------------------------
// GET /loans/?role=
// ---------------------------------------------------------------------------

/// List the loans a dashboard role works on.
#[utoipa::path(
    get,
    path = "/loans/",
    params(RoleParams),
    responses(
        (status = 200, description = "Loans for the role", body = Vec<LoanResponse>),
        (status = 400, description = "Unknown role", body = AppError)
    ),
    tag = "loans"
)]
pub async fn list_by_role(
    State(state): State<AppState>,
    Query(params): Query<RoleParams>,
) -> Result<Json<Vec<LoanResponse>>, AppError> {
    let role = parse_role(&params.role)?;
    Ok(Json(state.store.list_for_role(role).await))
}

// ---------------------------------------------------------------------------
// GET /loans/id?idNumber=
// ---------------------------------------------------------------------------

/// List the loans assigned to one officer.
#[utoipa::path(
    get,
    path = "/loans/id",
    params(OfficerParams),
    responses(
        (status = 200, description = "Loans for the officer", body = Vec<LoanResponse>)
    ),
    tag = "loans"
)]
pub async fn list_by_officer(
    State(state): State<AppState>,
    Query(params): Query<OfficerParams>,
) -> Json<Vec<LoanResponse>> {
    Json(state.store.list_for_officer(&params.id_number).await)
}

// ---------------------------------------------------------------------------
// PATCH /loans/status-admin?_id=
// ---------------------------------------------------------------------------

/// Record an administrator's decision.
#[utoipa::path(
    patch,
    path = "/loans/status-admin",
    params(StatusParams),
    request_body = StatusUpdateRequest,
    responses(
        (status = 200, description = "Loan updated", body = LoanResponse),
        (status = 400, description = "Invalid status", body = AppError),
        (status = 404, description = "Loan not found", body = AppError)
    ),
    tag = "loans"
)]
pub async fn update_status_admin(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
    Json(body): Json<StatusUpdateRequest>,
) -> Result<Json<LoanResponse>, AppError> {
    let status = require_known(body.status)?;
    let loan = state
        .store
        .set_status(&params.id, status, None)
        .await
        .ok_or_else(|| AppError::not_found(format!("Loan {} not found", params.id)))?;

    tracing::info!(loan_id = %loan.id, status = %loan.status, "admin updated loan");
    Ok(Json(loan))
}

// ---------------------------------------------------------------------------
// PATCH /loans/status-verifier?_id=
// ---------------------------------------------------------------------------

/// Record a verifier's decision. The body must name the loan officer.
#[utoipa::path(
    patch,
    path = "/loans/status-verifier",
    params(StatusParams),
    request_body = StatusUpdateRequest,
    responses(
        (status = 200, description = "Loan updated", body = LoanResponse),
        (status = 400, description = "Invalid status or missing officer", body = AppError),
        (status = 404, description = "Loan not found", body = AppError)
    ),
    tag = "loans"
)]
pub async fn update_status_verifier(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
    Json(body): Json<StatusUpdateRequest>,
) -> Result<Json<LoanResponse>, AppError> {
    let status = require_known(body.status)?;
    let officer = body
        .loan_officer
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| AppError::bad_request("loanOfficer is required"))?;

    let loan = state
        .store
        .set_status(&params.id, status, Some(officer))
        .await
        .ok_or_else(|| AppError::not_found(format!("Loan {} not found", params.id)))?;

    tracing::info!(loan_id = %loan.id, status = %loan.status, "verifier updated loan");
    Ok(Json(loan))
}
