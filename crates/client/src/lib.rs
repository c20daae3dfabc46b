//! HTTP client for the loan service.
//!
//! Responses are decoded into the schemas in `shared_types` before anything
//! reaches the UI, so a malformed payload surfaces as
//! `AppErrorKind::MalformedResponse` instead of a rendering failure.

use serde::de::DeserializeOwned;
use shared_types::{
    ApiSettings, AppError, LoanAction, LoanQuery, LoanRecord, LoanResponse, LoanStatus,
    LoanSummary, Role, RowHandle, RowStatus, StatusUpdateRequest, SummaryPayload,
};

const SUMMARY_PATH: &str = "/loans/summary";

/// Thin wrapper over `reqwest::Client` bound to one set of API settings.
#[derive(Debug, Clone)]
pub struct LoanClient {
    http: reqwest::Client,
    api: ApiSettings,
}

impl LoanClient {
    pub fn new(api: ApiSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            api,
        }
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.api
    }

    /// `GET /loans/summary`. `Ok(None)` when the backend has no summary rows.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_summary(&self) -> Result<Option<LoanSummary>, AppError> {
        let url = join_url(&self.api.base_url, SUMMARY_PATH);
        let response = self.authorize(self.http.get(&url)).send().await.map_err(transport)?;
        let payload: SummaryPayload = read_json(response, "Failed to fetch loans").await?;
        Ok(payload.into_summary())
    }

    /// `GET /loans/?role=` or `GET /loans/id?idNumber=`, mapped to records.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_loans(&self, query: &LoanQuery) -> Result<Vec<LoanRecord>, AppError> {
        let url = join_url(self.api.list_base_url(), query.path());
        let request = self.http.get(&url).query(&query.params());
        let response = self.authorize(request).send().await.map_err(transport)?;
        let loans: Vec<LoanResponse> = read_json(response, "Could not fetch loan data").await?;
        Ok(loans.into_iter().map(LoanRecord::from).collect())
    }

    /// `PATCH /loans/status-{role}?_id={loan_id}`.
    #[tracing::instrument(skip(self, body), fields(status = %body.status))]
    pub async fn update_status(
        &self,
        role: Role,
        loan_id: &str,
        body: &StatusUpdateRequest,
    ) -> Result<(), AppError> {
        let url = join_url(&self.api.base_url, role.status_path());
        let request = self.http.patch(&url).query(&[("_id", loan_id)]).json(body);
        let response = self.authorize(request).send().await.map_err(transport)?;
        ensure_success(response, "Error updating loan status").await?;
        tracing::info!(loan_id, role = %role, "loan status updated");
        Ok(())
    }

    /// Run a row action end to end: mark the row busy, send the PATCH, then
    /// confirm the new status or record the failure on the row.
    ///
    /// `Ok(None)` means the row already had a transition in flight and nothing
    /// was sent. `officer_name` is only used for verifier updates.
    pub async fn apply_action(
        &self,
        row: &mut impl RowHandle,
        role: Role,
        loan_id: &str,
        action: LoanAction,
        officer_name: &str,
    ) -> Result<Option<LoanStatus>, AppError> {
        let Some(target) = row.update(|r| r.begin(action)) else {
            tracing::debug!(loan_id, action = action.label(), "row busy, ignoring action");
            return Ok(None);
        };

        let body = StatusUpdateRequest::for_role(role, target.clone(), officer_name);
        match self.update_status(role, loan_id, &body).await {
            Ok(()) => {
                row.update(RowStatus::confirm);
                Ok(Some(target))
            }
            Err(err) => {
                tracing::error!(loan_id, role = %role, error = %err, "Error updating loan status");
                row.update(|r| r.fail(err.friendly_message()));
                Err(err)
            }
        }
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.api.token.as_deref().filter(|t| !t.is_empty()) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Join a base URL and an absolute path without doubling the slash.
fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn transport(err: reqwest::Error) -> AppError {
    if err.is_decode() {
        AppError::malformed(err.to_string())
    } else {
        AppError::network(err.to_string())
    }
}

async fn ensure_success(
    response: reqwest::Response,
    context: &str,
) -> Result<reqwest::Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), body = %body, "{context}");
    Err(AppError::http_status(status.as_u16(), context))
}

async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    context: &str,
) -> Result<T, AppError> {
    let response = ensure_success(response, context).await?;
    let bytes = response.bytes().await.map_err(transport)?;
    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::warn!(error = %e, "{context}: unexpected response shape");
        AppError::from(e)
    })
}
