//! Error taxonomy for the Plotrate service.

use thiserror::Error;

/// Main error type for Plotrate operations.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Bad caller input. Never retried; the message is surfaced verbatim.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Required configuration (such as the upstream credential) is missing.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The upstream rate provider failed or rejected the request.
    #[error("Upstream provider error: {0}")]
    Upstream(String),

    /// Unexpected internal error. Surfaced generically, never with details.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ServiceError::Upstream(_))
    }

    /// Get error code for wire responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "VALIDATION_ERROR",
            ServiceError::Configuration(_) => "CONFIGURATION_ERROR",
            ServiceError::Upstream(_) => "UPSTREAM_ERROR",
            ServiceError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type alias for Plotrate operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ServiceError::Validation("bad".into()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            ServiceError::Upstream("down".into()).error_code(),
            "UPSTREAM_ERROR"
        );
    }

    #[test]
    fn test_retryable() {
        assert!(ServiceError::Upstream("timeout".into()).is_retryable());
        assert!(!ServiceError::Validation("bad".into()).is_retryable());
        assert!(!ServiceError::Configuration("no key".into()).is_retryable());
    }
}
