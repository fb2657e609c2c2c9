//! Error types for the daily papers client.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Malformed-but-decodable payloads never surface here: normalization defaults them.

use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request aborted after the client-side timeout elapsed
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Non-2xx response, carrying the raw body
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Body was not valid JSON
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Request URL could not be built
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Coarse error classes seen by callers.
///
/// Timeouts are deliberately folded into [`ErrorKind::Network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure or timeout.
    Network,
    /// Non-2xx HTTP response.
    Http,
    /// Response could not be decoded at all.
    Malformed,
}

impl ClientError {
    /// Create an HTTP status error.
    #[must_use]
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Classify the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) | Self::Timeout(_) => ErrorKind::Network,
            Self::Http { .. } => ErrorKind::Http,
            Self::Parse(_) | Self::InvalidUrl(_) => ErrorKind::Malformed,
        }
    }

    /// HTTP status code, if the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Convert to the message shown next to a retry affordance.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Network => {
                "Could not reach the papers service. Check your connection and try again."
                    .to_string()
            }
            ErrorKind::Http => match self.status() {
                Some(404) => "Paper not found.".to_string(),
                Some(status) => format!(
                    "The papers service returned an error ({status}). Please try again."
                ),
                None => "Failed to load papers. Please try again.".to_string(),
            },
            ErrorKind::Malformed => "Failed to load papers. Please try again.".to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
