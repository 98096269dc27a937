//! Classified result of a lead submission attempt.

use super::lead::ApiErrorBody;
use std::fmt;

/// What happened when a lead was submitted.
///
/// Every variant except `Success` is an integration error: it is logged and
/// otherwise ignored, the visitor is redirected to WhatsApp either way.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The API accepted the lead; carries the parsed response body.
    Success(serde_json::Value),

    /// No usable API token is configured, nothing was sent.
    NotConfigured,

    /// The API answered with a non-2xx status.
    HttpError {
        status: u16,
        message: String,
        /// `message` field of the error body, when the API sent one
        detail: Option<String>,
    },

    /// The request never got a response (refused, DNS, timeout, ...).
    NetworkError(String),
}

impl SubmissionOutcome {
    /// Build an `HttpError` from a status code and raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::HttpError {
            status,
            message: status_message(status).to_string(),
            detail: ApiErrorBody::message_from(body),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Human-readable explanation for a failed status code.
pub fn status_message(status: u16) -> &'static str {
    match status {
        400 => "Bad request: the lead data was rejected",
        401 => "Unauthorized: the API token was rejected",
        403 => "Forbidden: the API token is invalid or expired",
        _ => "Lead API returned an error",
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(_) => write!(f, "lead created"),
            Self::NotConfigured => write!(f, "lead API not configured"),
            Self::HttpError {
                status,
                message,
                detail: Some(detail),
            } => write!(f, "{} (status {}): {}", message, status, detail),
            Self::HttpError {
                status, message, ..
            } => write!(f, "{} (status {})", message, status),
            Self::NetworkError(message) => write!(f, "network error: {}", message),
        }
    }
}
