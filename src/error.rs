//! Error types for the relay.

use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Everything that can stop a request from being relayed.
///
/// Each variant maps to exactly one HTTP status. Upstream problems of every
/// kind collapse into 500; the description is the only distinguishing
/// detail the caller sees.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Not Found")]
    NotFound,

    #[error("Missing 'url' parameter")]
    MissingTarget,

    #[error("Unsupported method ('{0}')")]
    Unsupported(Method),

    #[error("invalid target URL `{target}`: {reason}")]
    InvalidTarget { target: String, reason: String },

    #[error("HTTP Error {status}: {reason}")]
    UpstreamStatus { status: u16, reason: String },

    #[error("{0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Setup failed: {0}")]
    Setup(String),
}

impl RelayError {
    /// Status code surfaced to the caller.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::NotFound => StatusCode::NOT_FOUND,
            RelayError::MissingTarget => StatusCode::BAD_REQUEST,
            RelayError::Unsupported(_) => StatusCode::NOT_IMPLEMENTED,
            RelayError::InvalidTarget { .. }
            | RelayError::UpstreamStatus { .. }
            | RelayError::Upstream(_)
            | RelayError::Setup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True when the failure happened while fetching the target.
    pub fn is_upstream(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Text written to the response body.
    pub fn message(&self) -> String {
        if self.is_upstream() {
            format!("Proxy Error: {}", describe(self))
        } else {
            self.to_string()
        }
    }
}

/// Render an error with its whole source chain, so transport failures
/// include the underlying cause (e.g. "connection refused").
fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = cause.source();
    }
    out
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.message(),
        )
            .into_response()
    }
}

/// Result type alias for relay operations.
pub type Result<T> = std::result::Result<T, RelayError>;
