//! Counters for the lead flow.
//!
//! A `Metrics` handle is cheap to clone; clones share one block of atomics,
//! so the client and the submitter can each keep one and `main` can read
//! both after a submit.

use crate::models::SubmissionOutcome;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct Counters {
    requests: AtomicU64,
    failed_requests: AtomicU64,
    request_ms: AtomicU64,
    accepted: AtomicU64,
    rejected: AtomicU64,
    not_configured: AtomicU64,
    network_failed: AtomicU64,
}

/// Request and outcome counters.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    counters: Arc<Counters>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing one request to the lead API.
    pub fn start_request(&self) -> HttpTimer {
        HttpTimer {
            start: Instant::now(),
            metrics: self.clone(),
        }
    }

    fn record_request(&self, elapsed: Duration, failed: bool) {
        let c = &self.counters;
        c.requests.fetch_add(1, Ordering::Relaxed);
        c.request_ms
            .fetch_add(elapsed.as_millis() as u64, Ordering::Relaxed);
        if failed {
            c.failed_requests.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Count a classified submission.
    pub fn record_outcome(&self, outcome: &SubmissionOutcome) {
        let c = &self.counters;
        let counter = match outcome {
            SubmissionOutcome::Success(_) => &c.accepted,
            SubmissionOutcome::HttpError { .. } => &c.rejected,
            SubmissionOutcome::NotConfigured => &c.not_configured,
            SubmissionOutcome::NetworkError(_) => &c.network_failed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn summary(&self) -> MetricsSummary {
        let c = &self.counters;
        let requests = c.requests.load(Ordering::Relaxed);
        let request_ms = c.request_ms.load(Ordering::Relaxed);

        MetricsSummary {
            http_requests_total: requests,
            http_errors_total: c.failed_requests.load(Ordering::Relaxed),
            http_duration_avg_ms: match requests {
                0 => 0.0,
                n => request_ms as f64 / n as f64,
            },
            leads_accepted_total: c.accepted.load(Ordering::Relaxed),
            leads_rejected_total: c.rejected.load(Ordering::Relaxed),
            leads_not_configured_total: c.not_configured.load(Ordering::Relaxed),
            leads_network_failed_total: c.network_failed.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_avg_ms: f64,
    pub leads_accepted_total: u64,
    pub leads_rejected_total: u64,
    pub leads_not_configured_total: u64,
    pub leads_network_failed_total: u64,
}

/// Times one lead API request. Nothing is recorded until `finish`.
#[must_use = "call finish() to record the request"]
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    pub fn finish(self, failed: bool) {
        self.metrics.record_request(self.start.elapsed(), failed);
    }
}
