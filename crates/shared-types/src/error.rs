use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AppErrorKind {
    /// The request never produced a response (DNS, connection, CORS, ...).
    Network,
    /// The backend answered with a non-success status code.
    HttpStatus,
    /// The response body did not match the expected schema.
    MalformedResponse,
    NotFound,
    BadRequest,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::HttpStatus => write!(f, "HttpStatus"),
            AppErrorKind::MalformedResponse => write!(f, "MalformedResponse"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
        }
    }
}

/// Structured application error shared by the client, the UI and the
/// development server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    /// HTTP status of the failed response, when there was one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl AppError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Network,
            message: message.into(),
            status: None,
        }
    }

    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::HttpStatus,
            message: message.into(),
            status: Some(status),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::MalformedResponse,
            message: message.into(),
            status: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
            status: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            status: None,
        }
    }

    /// Short text suitable for an inline error line or a toast.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::Network => "Could not reach the loan service.".to_string(),
            AppErrorKind::HttpStatus => match self.status {
                Some(code) => format!("The loan service answered with status {code}."),
                None => "The loan service rejected the request.".to_string(),
            },
            AppErrorKind::MalformedResponse => {
                "The loan service sent data this page cannot read.".to_string()
            }
            _ => self.message.clone(),
        }
    }

    #[cfg_attr(not(feature = "server"), allow(dead_code))]
    fn status_code_u16(&self) -> u16 {
        match self.kind {
            AppErrorKind::NotFound => 404,
            AppErrorKind::BadRequest => 400,
            AppErrorKind::HttpStatus => self.status.unwrap_or(502),
            AppErrorKind::Network | AppErrorKind::MalformedResponse => 502,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::malformed(err.to_string())
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status_code_u16())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}
