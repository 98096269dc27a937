//! Error types for the lead capture core.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! User input errors live in [`crate::domain::ValidationError`].

use thiserror::Error;

/// Errors that can occur when talking to the lead API.
#[derive(Error, Debug)]
pub enum LeadApiError {
    /// Transport-level failure (DNS, refused connection, TLS, ...)
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned a non-2xx status code
    #[error("API error (status {status}): {body}")]
    ApiError { status: u16, body: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// The blocking task running the request failed
    #[error("Task join error: {0}")]
    TaskFailed(String),
}

/// Errors raised by the lead submitter that are not submission outcomes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The cleaned phone number does not have exactly 10 digits.
    #[error("Phone number must have exactly 10 digits, got {0}")]
    InvalidPhoneLength(usize),

    /// The submission path failed in an unexpected way.
    #[error("Lead submission failed unexpectedly: {0}")]
    Internal(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while decoding a bearer token for diagnostics.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Token is not three dot-separated segments
    #[error("Token is not a JWT (expected header.payload.signature)")]
    Malformed,

    /// Payload segment is not valid base64url
    #[error("Invalid token payload encoding: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// Payload is not a JSON object
    #[error("Invalid token payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Convenience type alias for Results with LeadApiError
pub type LeadApiResult<T> = Result<T, LeadApiError>;

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LeadApiError::Timeout;
        assert_eq!(err.to_string(), "Request timeout");

        let err = SubmitError::InvalidPhoneLength(7);
        assert_eq!(
            err.to_string(),
            "Phone number must have exactly 10 digits, got 7"
        );

        let err = ConfigError::InvalidValue {
            var: "WHATSAPP_NUMBER".to_string(),
            reason: "Must contain only digits".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for WHATSAPP_NUMBER: Must contain only digits"
        );
    }

    #[test]
    fn test_api_error_variants() {
        let err = LeadApiError::ApiError {
            status: 403,
            body: "{\"message\":\"jwt expired\"}".to_string(),
        };
        assert!(err.to_string().contains("403"));
        assert!(err.to_string().contains("jwt expired"));
    }
}
