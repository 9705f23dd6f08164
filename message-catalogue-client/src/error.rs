use serde::{Deserialize, Serialize};

use crate::utils::log_sanitizer::summarize_for_log;

/// Unified error type for all catalogue endpoint operations.
///
/// Each variant carries the `operation` (`save`, `add` or `remove`) that produced it,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// The editor core treats every variant as a plain failure; the distinction only matters for
/// logging and for the optional retry loop.
///
/// # Retryable Errors
///
/// - [`NetworkError`](Self::NetworkError): connection refused, DNS failure, reset
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`HttpStatus`](Self::HttpStatus) with a 502/503/504 status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred before a response was received.
    NetworkError {
        /// Operation that produced the error.
        operation: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Operation that produced the error.
        operation: String,
        /// Error details.
        detail: String,
    },

    /// The endpoint answered with a non-2xx status.
    HttpStatus {
        /// Operation that produced the error.
        operation: String,
        /// HTTP status code.
        status: u16,
        /// Response body, if one could be read.
        raw_message: Option<String>,
    },

    /// The client configuration is unusable (bad base path, empty catalogue id, ...).
    InvalidConfig {
        /// Name of the offending setting.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl ClientError {
    /// Whether the failure is transient and the same request may succeed when sent again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::NetworkError { .. } | Self::Timeout { .. } => true,
            Self::HttpStatus { status, .. } => matches!(status, 502..=504),
            Self::InvalidConfig { .. } => false,
        }
    }

    /// Whether the endpoint or the caller rejected the request (4xx, bad config) rather than
    /// the transport breaking. Log at `warn` when `true`, at `error` otherwise.
    ///
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::HttpStatus { status, .. } => (400..500).contains(status),
            Self::InvalidConfig { .. } => true,
            Self::NetworkError { .. } | Self::Timeout { .. } => false,
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { operation, detail } => {
                write!(f, "[{operation}] Network error: {detail}")
            }
            Self::Timeout { operation, detail } => {
                write!(f, "[{operation}] Request timeout: {detail}")
            }
            Self::HttpStatus {
                operation,
                status,
                raw_message,
            } => match raw_message.as_deref() {
                Some(msg) if !msg.is_empty() => {
                    write!(f, "[{operation}] HTTP {status}: {}", summarize_for_log(msg))
                }
                _ => write!(f, "[{operation}] HTTP {status}"),
            },
            Self::InvalidConfig { param, detail } => {
                write!(f, "Invalid client configuration '{param}': {detail}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
