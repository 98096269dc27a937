use async_trait::async_trait;
use landing_leads::error::{SubmitError, SubmitResult};
use landing_leads::{LeadSubmitter, SubmissionOutcome};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Mock lead submitter with a scripted reply.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockLeadSubmitter {
    configured: bool,
    reply: SubmitResult<SubmissionOutcome>,
    gate: Option<Arc<Notify>>,
    sent: Arc<Mutex<Vec<(String, String)>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockLeadSubmitter {
    /// A configured submitter that accepts every lead.
    pub fn new() -> Self {
        Self {
            configured: true,
            reply: Ok(SubmissionOutcome::Success(serde_json::json!({"id": "1"}))),
            gate: None,
            sent: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            reply: Ok(SubmissionOutcome::NotConfigured),
            ..Self::new()
        }
    }

    pub fn replying(reply: SubmitResult<SubmissionOutcome>) -> Self {
        Self {
            reply,
            ..Self::new()
        }
    }

    pub fn failing(error: SubmitError) -> Self {
        Self::replying(Err(error))
    }

    /// Hold every `send` until `gate` is notified.
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new()
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockLeadSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeadSubmitter for MockLeadSubmitter {
    async fn send(&self, name: &str, phone: &str) -> SubmitResult<SubmissionOutcome> {
        self.track_call("send");
        self.sent
            .lock()
            .unwrap()
            .push((name.to_string(), phone.to_string()));

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.reply.clone()
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}
