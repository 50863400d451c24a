//! Client error types

use thiserror::Error;

/// Failure modes of one round-trip to the print backend.
///
/// These are expected operational failures, not programmer errors: the
/// client returns them, never panics for them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Backend host could not be reached
    #[error("print service unreachable")]
    Unreachable,

    /// Request exceeded the configured timeout
    #[error("print service timed out")]
    Timeout,

    /// Backend answered with a structured rejection (printer offline,
    /// paper out, ...)
    #[error("rejected by print backend [{code}]: {message}")]
    RejectedByBackend { code: String, message: String },

    /// Backend answered, but the body did not match the contract
    #[error("malformed response from print backend")]
    MalformedResponse,
}

/// Result type for client operations
pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServiceError::Timeout
        } else if err.is_decode() {
            ServiceError::MalformedResponse
        } else {
            // Connect errors and everything else that never produced a
            // usable response.
            ServiceError::Unreachable
        }
    }
}
