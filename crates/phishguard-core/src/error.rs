//! Error types for the PhishGuard core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The shared error type for the analysis workflow.
///
/// Every failure path leaves the session in a stable state from which
/// `reset()` is valid; none of these variants is fatal to the process.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum PhishGuardError {
    /// Bad or missing input. Locally recoverable: the user corrects the
    /// input and resubmits.
    #[error("{0}")]
    Validation(String),

    /// Network or scoring-endpoint failure. Surfaced verbatim to the user;
    /// the core never retries on its own.
    #[error("{0}")]
    Transport(String),

    /// Durable store read/write failure. Best-effort: reported but never
    /// invalidates an already-succeeded session result.
    #[error("History persistence failed: {0}")]
    Persistence(String),

    /// A submission was attempted while another is in flight. Rejected
    /// synchronously, never queued.
    #[error("An analysis is already in progress")]
    Busy,
}

impl PhishGuardError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a Persistence error
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence(message.into())
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is a Persistence error
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }

    /// Check if this is a Busy error
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }
}

/// A type alias for `Result<T, PhishGuardError>`.
pub type Result<T> = std::result::Result<T, PhishGuardError>;
