//! Test doubles for the controller's collaborators.

mod mock_browser;
mod mock_lead_submitter;

pub use mock_browser::MockBrowser;
pub use mock_lead_submitter::MockLeadSubmitter;
