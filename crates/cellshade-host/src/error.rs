//! Error types for the host seam.

use thiserror::Error;

/// Result type alias using [`HostError`]
pub type HostResult<T> = std::result::Result<T, HostError>;

/// Errors a spreadsheet host can raise.
#[derive(Debug, Clone, Error)]
pub enum HostError {
    /// No cells are currently selected
    #[error("No selection in the active sheet")]
    NoSelection,

    /// The host rejected a staged mutation
    #[error("Host rejected {op}: {reason}")]
    Rejected { op: String, reason: String },

    /// Flushing the staged mutations to the host failed
    #[error("Flush failed: {reason}")]
    Flush { reason: String },

    /// The host connection is gone
    #[error("Host disconnected")]
    Disconnected,
}

impl HostError {
    /// Rejection error for a staged op
    pub fn rejected(op: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        HostError::Rejected {
            op: op.to_string(),
            reason: reason.into(),
        }
    }

    /// Flush failure with a reason
    pub fn flush(reason: impl Into<String>) -> Self {
        HostError::Flush {
            reason: reason.into(),
        }
    }
}
