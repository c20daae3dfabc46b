use axum::{
    body::{to_bytes, Body, HttpBody},
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::state::AppState;
use crate::store::RecordedRequest;
use shared_types::AppError;

/// Largest request body the log will buffer. Bigger or unsized bodies are
/// passed through without being logged.
const MAX_LOGGED_BODY: usize = 64 * 1024;

/// Middleware that appends every request to the store's request log before
/// handing it on unchanged.
pub async fn record_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (parts, body) = request.into_parts();

    let fits = body
        .size_hint()
        .upper()
        .is_some_and(|len| len <= MAX_LOGGED_BODY as u64);
    let (body, logged_body) = if fits {
        let bytes = to_bytes(body, MAX_LOGGED_BODY)
            .await
            .map_err(|e| AppError::bad_request(format!("Unreadable request body: {e}")))?;
        let logged = parse_body(&bytes);
        (Body::from(bytes), logged)
    } else {
        (body, None)
    };

    state
        .store
        .record(RecordedRequest {
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
            query: parts.uri.query().map(str::to_string),
            authorization: parts
                .headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(redact_credentials),
            body: logged_body,
        })
        .await;

    Ok(next.run(Request::from_parts(parts, body)).await)
}

fn parse_body(bytes: &[u8]) -> Option<serde_json::Value> {
    if bytes.is_empty() {
        return None;
    }
    Some(
        serde_json::from_slice(bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(bytes).into_owned())),
    )
}

/// Keep the auth scheme, mask the credential.
fn redact_credentials(value: &str) -> String {
    match value.split_once(' ') {
        Some((scheme, _)) => format!("{scheme} [redacted]"),
        None => "[redacted]".to_string(),
    }
}
