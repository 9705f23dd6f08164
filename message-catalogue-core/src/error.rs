//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export client error type
pub use message_catalogue_client::ClientError;

/// Core layer error type
///
/// Remote failures of save/add/remove are not reported through this type: the services fold
/// them into feedback and return [`RowOutcome::Completed`](crate::services::RowOutcome).
/// `Client` only surfaces when a caller talks to the client directly (e.g. at bootstrap).
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No row with this key in the view
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// The view already holds a row with this key
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// The row (or add dialog) is not in a state that accepts the action
    #[error("Cannot {action} '{key}' while {state}")]
    InvalidTransition {
        key: String,
        /// Current row state or dialog phase
        state: String,
        action: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Persistence client error
    #[error("{0}")]
    Client(#[from] ClientError),
}

impl CoreError {
    /// Whether the error comes from user interaction rather than a broken environment.
    ///
    /// Log at `warn` when `true`, at `error` when `false`.
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::EntryNotFound(_)
            | Self::DuplicateKey(_)
            | Self::InvalidTransition { .. }
            | Self::ValidationError(_) => true,
            Self::Client(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
