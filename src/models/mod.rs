//! Data models for the lead flow.
//!
//! The lead record sent to the lead API, the error body it may answer with,
//! and the classified outcome of a submission.

pub mod lead;
pub mod outcome;

pub use lead::{ApiErrorBody, LeadRecord};
pub use outcome::{status_message, SubmissionOutcome};
