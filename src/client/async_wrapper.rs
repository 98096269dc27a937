//! Async wrapper around the synchronous LeadApiClient.
//!
//! This module provides an async interface to the synchronous LeadApiClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::LeadApiClient;
use crate::error::{LeadApiError, LeadApiResult};
use crate::models::LeadRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// Async lead API operations.
///
/// This is the seam the lead submitter is built over; tests substitute
/// their own implementation to count calls.
#[async_trait]
pub trait AsyncLeadClient: Send + Sync {
    /// Post a lead and return the parsed response body.
    async fn create_lead(&self, lead: &LeadRecord) -> LeadApiResult<serde_json::Value>;
}

/// Async wrapper around synchronous LeadApiClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool.
#[derive(Clone)]
pub struct AsyncLeadClientImpl {
    client: Arc<LeadApiClient>,
}

impl AsyncLeadClientImpl {
    pub fn new(client: LeadApiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Access the wrapped client (for its metrics).
    pub fn inner(&self) -> &LeadApiClient {
        &self.client
    }
}

#[async_trait]
impl AsyncLeadClient for AsyncLeadClientImpl {
    async fn create_lead(&self, lead: &LeadRecord) -> LeadApiResult<serde_json::Value> {
        let client = self.client.clone();
        let lead = lead.clone();

        tokio::task::spawn_blocking(move || client.create_lead(&lead))
            .await
            .map_err(|e| LeadApiError::TaskFailed(e.to_string()))?
    }
}
