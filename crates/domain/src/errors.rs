//! Error types used throughout the console

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the ledger console.
///
/// Every request failure collapses into one of these variants. The console
/// treats them uniformly ("request failed"); the variant only matters for
/// logging and for the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum LedgerError {
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status.
    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LedgerError {
    /// Message suitable for a user-facing notice.
    ///
    /// Backend errors surface the backend's own wording (for example the
    /// "Cannot delete customer..." refusal); everything else uses the display
    /// form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Stable label for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Backend { .. } => "backend",
            Self::Decode(_) => "decode",
            Self::Config(_) => "config",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;
