//! Error taxonomy for workbench operations
//!
//! Validation and no-session errors are raised before any request leaves
//! the client. Backend and transport errors come back from the API layer.

use rust_i18n::t;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, WorkbenchError>;

#[derive(Debug, thiserror::Error)]
pub enum WorkbenchError {
    /// Missing or malformed user input, caught before any network call
    #[error("{0}")]
    Validation(String),

    /// Visualization or export attempted before any query succeeded
    #[error("{0}")]
    NoSession(String),

    /// Structured `{success: false, error}` reply from the backend
    #[error("{0}")]
    Backend(String),

    /// Network or decode failure with no structured reply
    #[error("transport error: {0}")]
    Transport(String),

    /// Exported content could not be written locally
    #[error("download failed: {0}")]
    Download(#[from] std::io::Error),
}

impl WorkbenchError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn no_session(message: impl Into<String>) -> Self {
        Self::NoSession(message.into())
    }

    /// Text to show the user.
    ///
    /// Backend text is preferred; transport failures and blank backend
    /// messages fall back to the operation's generic message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(msg) | Self::NoSession(msg) => msg.clone(),
            Self::Backend(msg) if !msg.trim().is_empty() => msg.clone(),
            Self::Backend(_) | Self::Transport(_) => fallback.to_string(),
            Self::Download(e) => t!("download_failed", error = e.to_string()).to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_no_session(&self) -> bool {
        matches!(self, Self::NoSession(_))
    }
}

impl From<reqwest::Error> for WorkbenchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for WorkbenchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Transport(format!("invalid response body: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_preferred_over_fallback() {
        let err = WorkbenchError::Backend("Data source not found".to_string());
        assert_eq!(err.user_message("Failed to execute query"), "Data source not found");
    }

    #[test]
    fn test_transport_and_blank_backend_use_fallback() {
        let err = WorkbenchError::Transport("connection refused".to_string());
        assert_eq!(err.user_message("Failed to execute query"), "Failed to execute query");

        let err = WorkbenchError::Backend("  ".to_string());
        assert_eq!(err.user_message("Failed to export data"), "Failed to export data");
    }
}
