//! Lead submitter service.
//!
//! Turns a validated name/phone pair into a `LeadRecord`, posts it to the
//! lead API and classifies what happened. Integration failures come back as
//! a [`SubmissionOutcome`], never as an error.

use crate::client::AsyncLeadClient;
use crate::config::Config;
use crate::domain::digits_only;
use crate::error::{LeadApiError, SubmitError, SubmitResult};
use crate::metrics::Metrics;
use crate::models::{LeadRecord, SubmissionOutcome};
use async_trait::async_trait;
use std::sync::Arc;

/// Number of digits the lead API expects in `telefono`.
pub const LEAD_PHONE_DIGITS: usize = 10;

/// Marker found in template tokens that were never filled in.
const PLACEHOLDER_MARKER: &str = "YOUR_";

/// Snapshot of how the lead API is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationStatus {
    pub token_configured: bool,
    pub api_url: String,
    pub fully_configured: bool,
}

/// Lead submission operations.
#[async_trait]
pub trait LeadSubmitter: Send + Sync {
    /// Submit a lead.
    ///
    /// Fails only when the phone does not clean to exactly ten digits (no
    /// request is made) or when the submission task itself breaks.
    async fn send(&self, name: &str, phone: &str) -> SubmitResult<SubmissionOutcome>;

    /// True when a real (non-placeholder) API token is configured.
    fn is_configured(&self) -> bool;
}

/// Default implementation of LeadSubmitter, backed by the lead API client.
pub struct LeadSubmitterImpl {
    client: Arc<dyn AsyncLeadClient>,
    api_url: String,
    api_token: Option<String>,
    lead_source: String,
    lead_category: String,
    metrics: Metrics,
}

impl LeadSubmitterImpl {
    /// Create a new submitter from configuration.
    pub fn new(config: &Config, client: Arc<dyn AsyncLeadClient>) -> Self {
        Self {
            client,
            api_url: config.lead_api_url.clone(),
            api_token: config.lead_api_token.clone(),
            lead_source: config.lead_source.clone(),
            lead_category: config.lead_category.clone(),
            metrics: Metrics::new(),
        }
    }

    /// Outcome counters for this submitter.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Report which parts of the API configuration are in place.
    pub fn configuration_status(&self) -> ConfigurationStatus {
        let token_configured = self.is_configured();
        ConfigurationStatus {
            token_configured,
            api_url: self.api_url.clone(),
            fully_configured: token_configured && !self.api_url.is_empty(),
        }
    }

    fn classify(
        &self,
        result: Result<serde_json::Value, LeadApiError>,
    ) -> SubmitResult<SubmissionOutcome> {
        let outcome = match result {
            Ok(data) => {
                tracing::info!("Lead created in lead API");
                tracing::debug!("Lead API response: {}", data);
                SubmissionOutcome::Success(data)
            }
            // 2xx with an empty or non-JSON body: the lead was still accepted
            Err(LeadApiError::JsonError(e)) => {
                tracing::warn!("Lead accepted but response body was not JSON: {}", e);
                SubmissionOutcome::Success(serde_json::Value::Null)
            }
            Err(LeadApiError::ApiError { status, body }) => {
                let outcome = SubmissionOutcome::from_status(status, &body);
                tracing::error!("Lead API rejected lead: {}", outcome);
                outcome
            }
            Err(e @ (LeadApiError::HttpError(_) | LeadApiError::Timeout)) => {
                tracing::error!("Could not reach lead API: {}", e);
                SubmissionOutcome::NetworkError(e.to_string())
            }
            Err(LeadApiError::TaskFailed(message)) => {
                tracing::error!("Lead submission task failed: {}", message);
                return Err(SubmitError::Internal(message));
            }
        };

        self.metrics.record_outcome(&outcome);
        Ok(outcome)
    }
}

/// True when `token` is present, non-blank and not a template placeholder.
pub fn is_usable_token(token: Option<&str>) -> bool {
    match token {
        Some(token) => !token.trim().is_empty() && !token.contains(PLACEHOLDER_MARKER),
        None => false,
    }
}

#[async_trait]
impl LeadSubmitter for LeadSubmitterImpl {
    async fn send(&self, name: &str, phone: &str) -> SubmitResult<SubmissionOutcome> {
        let digits = digits_only(phone);
        if digits.len() != LEAD_PHONE_DIGITS {
            tracing::warn!(
                "Not submitting lead: phone has {} digits, expected {}",
                digits.len(),
                LEAD_PHONE_DIGITS
            );
            return Err(SubmitError::InvalidPhoneLength(digits.len()));
        }

        let lead = LeadRecord::new(
            name,
            digits,
            self.lead_source.clone(),
            self.lead_category.clone(),
        );
        tracing::debug!("Prepared lead: {:?}", lead);

        if !self.is_configured() {
            tracing::warn!("Lead API token not configured, lead not sent");
            let outcome = SubmissionOutcome::NotConfigured;
            self.metrics.record_outcome(&outcome);
            return Ok(outcome);
        }

        tracing::info!("Sending lead to {}", self.api_url);
        let result = self.client.create_lead(&lead).await;
        self.classify(result)
    }

    fn is_configured(&self) -> bool {
        is_usable_token(self.api_token.as_deref())
    }
}
