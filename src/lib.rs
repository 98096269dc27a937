//! Landing Leads - lead capture core for a single-page landing site.
//!
//! A visitor leaves a name and phone number; the lead is posted best-effort
//! to a CRM-style lead API and the visitor is always handed off to a
//! pre-filled WhatsApp chat.
//!
//! # Architecture
//!
//! - **domain**: Phone masking and form validation value objects
//! - **models**: Lead record and submission outcome
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the lead API
//! - **services**: Lead submitter
//! - **controller**: Form controller, navigation strategies, WhatsApp links
//! - **diagnostics**: Bearer token inspection for startup logs
//! - **metrics**: Request and outcome counters

pub mod client;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod services;

pub use client::LeadApiClient;
pub use config::Config;
pub use controller::{Browser, FormController, IntegrationStatus, Navigation, SubmitReport};
pub use domain::{format_phone_input, validate_contact, ValidationError};
pub use error::{ConfigError, LeadApiError, SubmitError, TokenError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{LeadRecord, SubmissionOutcome};
pub use services::{LeadSubmitter, LeadSubmitterImpl};
