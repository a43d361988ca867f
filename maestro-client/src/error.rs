use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// Unified error type for all Maestro client operations.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`Transport`](Self::Transport): connectivity issues, request timeouts, 502/503/504
/// - [`RateLimited`](Self::RateLimited): HTTP 429
///
/// The built-in HTTP client automatically retries these with exponential backoff.
#[derive(Debug, Clone, Error, Serialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level failure (connection refused, TLS failure, request timeout).
    #[error("Transport error: {detail}")]
    Transport {
        /// Error details.
        detail: String,
    },

    /// The backend throttled the request.
    #[error("Rate limited by the server")]
    RateLimited {
        /// Suggested wait time in seconds before retrying, if provided.
        retry_after: Option<u64>,
    },

    /// A named consumer or work bundle does not exist.
    #[error("{kind} '{name}' not found")]
    NotFound {
        /// What was looked up (`consumer`, `work`).
        kind: String,
        /// Name or id of the missing record.
        name: String,
    },

    /// The wait deadline elapsed before the condition was satisfied.
    #[error("Timed out after {}s waiting for condition '{expression}'", .waited.as_secs())]
    Timeout {
        /// The condition expression that was being awaited.
        expression: String,
        /// Total time budget that elapsed.
        #[serde(skip)]
        waited: Duration,
    },

    /// Invalid user or caller input, detected before any request is sent.
    #[error("Validation error: {detail}")]
    Validation {
        /// What was wrong with the input.
        detail: String,
    },

    /// The backend answered with a non-success status.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Reason reported by the backend, or the truncated body.
        message: String,
    },

    /// The backend response could not be decoded.
    #[error("Parse error: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// Writing the status result file failed.
    #[error("Failed to write result file '{path}': {detail}")]
    ResultFile {
        /// Target path.
        path: String,
        /// Underlying I/O or serialization error.
        detail: String,
    },
}

impl ClientError {
    /// Whether the error stems from expected conditions (user input, missing records),
    /// used for log level classification.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    /// **Keep this in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Validation { .. } | Self::Timeout { .. }
        )
    }

    /// Whether this is a [`NotFound`](Self::NotFound) error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this is a [`Timeout`](Self::Timeout) error.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Shorthand for a [`Validation`](Self::Validation) error.
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation {
            detail: detail.into(),
        }
    }

    /// Shorthand for a [`NotFound`](Self::NotFound) error.
    pub fn not_found(kind: &str, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.to_string(),
            name: name.into(),
        }
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type ClientResult<T> = std::result::Result<T, ClientError>;
