//! Rate retrieval error types.

use plotrate_common::ServiceError;
use thiserror::Error;

/// Errors that can occur while fetching exchange rates.
#[derive(Debug, Error)]
pub enum FxError {
    /// The upstream API credential is not configured.
    #[error("Exchange rate API key is not configured")]
    ApiKeyMissing,

    /// Provider answered with a structured error payload.
    #[error("{provider} rejected the request (code {code}): {message}")]
    ProviderRejected {
        provider: String,
        code: u32,
        message: String,
    },

    /// Provider answered with a non-success HTTP status.
    #[error("{provider} returned HTTP status {status}")]
    BadStatus { provider: String, status: u16 },

    /// The network call itself failed (timeout, connection refused).
    #[error("Transport error contacting {provider}: {message}")]
    Transport { provider: String, message: String },

    /// Provider response body did not match the documented shape.
    #[error("Could not decode {provider} response: {message}")]
    Decode { provider: String, message: String },
}

impl FxError {
    /// Get error code for wire responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            FxError::ApiKeyMissing => "CONFIGURATION_ERROR",
            FxError::ProviderRejected { .. } => "UPSTREAM_REJECTED",
            FxError::BadStatus { .. } => "UPSTREAM_STATUS",
            FxError::Transport { .. } => "UPSTREAM_UNREACHABLE",
            FxError::Decode { .. } => "UPSTREAM_DECODE",
        }
    }
}

impl From<FxError> for ServiceError {
    fn from(err: FxError) -> Self {
        match err {
            FxError::ApiKeyMissing => ServiceError::Configuration(err.to_string()),
            _ => ServiceError::Upstream(err.to_string()),
        }
    }
}

/// Result type for rate operations.
pub type FxResult<T> = Result<T, FxError>;
