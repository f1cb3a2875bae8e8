//! Error types for LineRelay

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

/// Result type alias using LineRelay's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for LineRelay operations
#[derive(Error, Debug)]
pub enum Error {
    /// No bearer token on the request and no default token configured
    #[error("No token supplied, request not sent")]
    MissingToken,

    /// The webhook body carried no usable alerts collection
    #[error("No alerts found, request not sent")]
    NoAlerts,

    /// Every alert formatted to an empty message
    #[error("No messages found, request not sent")]
    NoMessages,

    /// LINE Notify answered with a non-success status
    #[error("LINE Notify returned {status}: {body}")]
    Upstream {
        /// HTTP status code from the push API
        status: u16,
        /// Response body from the push API
        body: String,
    },

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status this error maps to at the API boundary
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingToken => StatusCode::UNAUTHORIZED,
            Error::NoAlerts | Error::NoMessages => StatusCode::BAD_REQUEST,
            Error::Upstream { .. } | Error::Http(_) | Error::Config(_) | Error::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Response body for this error.
    ///
    /// Client errors carry their own message. Server errors get a generic
    /// message with the detail moved into `trace`, so upstream responses and
    /// client internals never leak as the headline.
    fn to_body(&self) -> ErrorBody {
        let status = self.status_code();
        if status.is_server_error() {
            ErrorBody {
                status: status.as_u16(),
                message: "Internal Server Error".to_string(),
                trace: Some(self.to_string()),
            }
        } else {
            ErrorBody {
                status: status.as_u16(),
                message: self.to_string(),
                trace: None,
            }
        }
    }
}

/// JSON error payload returned to webhook callers
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// HTTP status code, mirrored into the body
    pub status: u16,
    /// Human-readable reason
    pub message: String,
    /// Error detail, present on server errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            debug!(error = %self, "request rejected");
        }

        (status, Json(self.to_body())).into_response()
    }
}
