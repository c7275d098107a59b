//! Error types for model group settings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for group settings persistence and configuration.
///
/// Read failures (`StoreUnavailable`, `StoreCorrupt`) are absorbed by the
/// reconciler on load; write failures (`StoreUnavailable`,
/// `StoreWriteRejected`) are returned to the caller of save unchanged.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum GroupSettingsError {
    /// The backing store could not be reached (missing directory, I/O error).
    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    /// The backing store was read but its content could not be parsed.
    #[error("Store corrupt: {format} - {message}")]
    StoreCorrupt {
        format: String, // "JSON", "TOML", ...
        message: String,
    },

    /// The backing store refused the write (permissions, serialization).
    #[error("Store write rejected: {0}")]
    StoreWriteRejected(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GroupSettingsError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a StoreUnavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }

    /// Creates a StoreCorrupt error
    pub fn corrupt(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StoreCorrupt {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Creates a StoreWriteRejected error
    pub fn write_rejected(message: impl Into<String>) -> Self {
        Self::StoreWriteRejected(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. })
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::StoreCorrupt { .. })
    }

    pub fn is_write_rejected(&self) -> bool {
        matches!(self, Self::StoreWriteRejected(_))
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// True for the kinds a store read reports.
    pub fn is_read_failure(&self) -> bool {
        matches!(
            self,
            Self::StoreUnavailable { .. } | Self::StoreCorrupt { .. }
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<serde_json::Error> for GroupSettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::StoreCorrupt {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, GroupSettingsError>`.
pub type Result<T> = std::result::Result<T, GroupSettingsError>;
