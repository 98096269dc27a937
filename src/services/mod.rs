//! Application service layer.
//!
//! Services contain business logic and sit between the form controller and
//! the lead API client.

mod lead_submitter;

pub use lead_submitter::{
    is_usable_token, ConfigurationStatus, LeadSubmitter, LeadSubmitterImpl, LEAD_PHONE_DIGITS,
};
