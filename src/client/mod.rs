//! HTTP client for the lead API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles bearer authentication and
//! maps transport and status failures onto [`LeadApiError`].

mod async_wrapper;
pub use async_wrapper::{AsyncLeadClient, AsyncLeadClientImpl};

use crate::config::Config;
use crate::error::{LeadApiError, LeadApiResult};
use crate::metrics::Metrics;
use crate::models::LeadRecord;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the lead API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct LeadApiClient {
    /// Endpoint receiving new leads
    endpoint: String,

    /// Bearer token (empty when the API is not configured)
    api_token: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl LeadApiClient {
    /// Create a new LeadApiClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(
            config.lead_api_url.clone(),
            config.lead_api_token.clone().unwrap_or_default(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create a client for an explicit endpoint (useful for testing).
    #[doc(hidden)]
    pub fn with_endpoint(endpoint: String, api_token: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            endpoint,
            api_token,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a POST request with bearer authentication and JSON body.
    fn post(&self, body: &serde_json::Value) -> Result<ureq::Response, LeadApiError> {
        let timer = self.metrics.start_request();

        tracing::debug!("POST {}", self.endpoint);

        let result = self
            .agent
            .post(&self.endpoint)
            .set("Authorization", &format!("Bearer {}", self.api_token))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => {
                tracing::debug!(
                    "POST {} - Success (status: {})",
                    self.endpoint,
                    response.status()
                );
                timer.finish(false);
            }
            Err(e) => {
                tracing::debug!("POST {} - Error: {:?}", self.endpoint, e);
                timer.finish(true);
            }
        }

        result
    }

    /// Map a ureq error to a LeadApiError.
    fn map_error(&self, error: ureq::Error) -> LeadApiError {
        match error {
            ureq::Error::Status(status, response) => {
                let body = response.into_string().unwrap_or_default();
                LeadApiError::ApiError { status, body }
            }
            ureq::Error::Transport(transport) => match transport.kind() {
                ureq::ErrorKind::ConnectionFailed => {
                    LeadApiError::HttpError(format!("Connection failed: {}", transport))
                }
                ureq::ErrorKind::Io => LeadApiError::Timeout,
                _ => LeadApiError::HttpError(transport.to_string()),
            },
        }
    }

    /// Send a lead to the API and return the parsed JSON response body.
    ///
    /// A 2xx response whose body is not JSON surfaces as `LeadApiError::JsonError`.
    pub fn create_lead(&self, lead: &LeadRecord) -> LeadApiResult<serde_json::Value> {
        let body = serde_json::to_value(lead).map_err(LeadApiError::JsonError)?;

        let response = self.post(&body)?;
        let response_body = response
            .into_string()
            .map_err(|e| LeadApiError::HttpError(e.to_string()))?;

        serde_json::from_str(&response_body).map_err(LeadApiError::JsonError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = Config {
            lead_api_url: "https://crm.example.com/api/clientes".to_string(),
            lead_api_token: Some("token-123".to_string()),
            request_timeout: 5,
            ..Config::default()
        };

        let client = LeadApiClient::new(&config);
        assert_eq!(client.endpoint(), "https://crm.example.com/api/clientes");
        assert_eq!(client.api_token, "token-123");
        assert_eq!(client.metrics().summary().http_requests_total, 0);
    }

    #[test]
    fn test_client_without_token() {
        let client = LeadApiClient::new(&Config::default());
        assert!(client.api_token.is_empty());
    }
}
