//! Error types

/// Errors raised while talking to the backend or browser storage
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Build a server error, falling back to the status when the body had no message.
    pub fn server(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        Self::Server { status, message }
    }
}

impl From<gloo_storage::errors::StorageError> for AppError {
    fn from(err: gloo_storage::errors::StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_uses_body_message() {
        let err = AppError::server(400, Some("Question is empty".into()));
        assert_eq!(err.to_string(), "Question is empty");
    }

    #[test]
    fn test_server_error_falls_back_to_status() {
        assert_eq!(
            AppError::server(502, None).to_string(),
            "Request failed with status 502"
        );
        assert_eq!(
            AppError::server(500, Some("  ".into())).to_string(),
            "Request failed with status 500"
        );
    }
}
