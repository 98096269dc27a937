//! Form controller for the landing page lead form.
//!
//! Owns the form state, masks the phone while the visitor types and runs the
//! submit flow: validate, best-effort lead submission, WhatsApp hand-off.
//! Once validation passes the visitor is always sent to WhatsApp, whatever
//! happened with the lead API.

pub mod navigation;
pub mod whatsapp;

pub use navigation::{
    is_mobile_user_agent, strategy_for, Browser, InPlaceRedirect, Navigation,
    NavigationStrategy, NewWindowWithFallback,
};
pub use whatsapp::{build_whatsapp_url, lead_message, DEFAULT_MESSAGE};

use crate::config::Config;
use crate::domain::{
    format_phone_input, validate_contact, ContactName, PhoneNumber, ValidationError,
};
use crate::error::SubmitError;
use crate::models::SubmissionOutcome;
use crate::services::LeadSubmitter;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Notice shown when the submission path breaks unexpectedly.
pub const GENERIC_ERROR_NOTICE: &str =
    "Hubo un error al procesar tu solicitud. Te redirigiremos a WhatsApp.";

/// Current contents of the lead form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    /// Masked as typed, e.g. `(787) 123-4567`
    pub phone: String,
}

/// What happened to the lead API during a submit.
#[derive(Debug, Clone, PartialEq)]
pub enum IntegrationStatus {
    /// The API is not configured; nothing was sent.
    Skipped,
    /// The submitter ran and classified the result.
    Completed(SubmissionOutcome),
    /// The submitter refused or broke.
    Failed(SubmitError),
}

/// Result of one press of the submit button.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitReport {
    /// A submit was already in flight; this one was ignored.
    Busy,
    /// Validation failed; the message was shown and nothing was sent.
    Rejected(ValidationError),
    /// The visitor was sent to WhatsApp.
    Redirected {
        url: String,
        integration: IntegrationStatus,
        navigation: Navigation,
    },
}

/// Clears the busy flag when dropped, whichever way submit exits.
struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl BusyGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag: flag.clone() })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Drives the lead form.
pub struct FormController {
    state: ContactFormState,
    submitter: Arc<dyn LeadSubmitter>,
    browser: Arc<dyn Browser>,
    navigation: Box<dyn NavigationStrategy>,
    whatsapp_number: String,
    busy: Arc<AtomicBool>,
}

impl FormController {
    /// Create a controller with an empty form.
    ///
    /// `is_mobile` selects how the visitor is sent to WhatsApp.
    pub fn new(
        config: &Config,
        submitter: Arc<dyn LeadSubmitter>,
        browser: Arc<dyn Browser>,
        is_mobile: bool,
    ) -> Self {
        Self {
            state: ContactFormState::default(),
            submitter,
            browser,
            navigation: strategy_for(is_mobile),
            whatsapp_number: config.whatsapp_number.clone(),
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn state(&self) -> &ContactFormState {
        &self.state
    }

    /// Store the name field as typed.
    pub fn on_name_input(&mut self, raw: &str) {
        self.state.name = raw.to_string();
    }

    /// Mask the phone field as typed and return the masked value.
    pub fn on_phone_input(&mut self, raw: &str) -> &str {
        self.state.phone = format_phone_input(raw);
        &self.state.phone
    }

    /// Set both fields verbatim, without masking (autofill, prefilled links).
    pub fn fill(&mut self, name: &str, phone: &str) {
        self.state.name = name.to_string();
        self.state.phone = phone.to_string();
    }

    /// Whether a submit is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Shared handle to the busy flag, for a UI that disables the submit button.
    pub fn busy_flag(&self) -> Arc<AtomicBool> {
        self.busy.clone()
    }

    /// Validate the current form contents.
    pub fn validate(&self) -> Result<(ContactName, PhoneNumber), ValidationError> {
        validate_contact(&self.state.name, &self.state.phone)
    }

    /// Deep link for `message` to the business WhatsApp number.
    pub fn build_whatsapp_url(&self, message: &str) -> String {
        build_whatsapp_url(&self.whatsapp_number, message)
    }

    /// Send the visitor to WhatsApp with `message`, or the default greeting.
    pub fn open_whatsapp(&self, message: Option<&str>) -> Navigation {
        let url = self.build_whatsapp_url(message.unwrap_or(DEFAULT_MESSAGE));
        self.navigation.navigate(&url, self.browser.as_ref())
    }

    /// Run the submit flow.
    pub async fn submit(&self) -> SubmitReport {
        if self.is_busy() {
            tracing::debug!("Submit ignored, another submit is in flight");
            return SubmitReport::Busy;
        }

        let (name, phone) = match self.validate() {
            Ok(contact) => contact,
            Err(e) => {
                tracing::info!("Form rejected: {:?}", e);
                self.browser.alert(&e.to_string());
                return SubmitReport::Rejected(e);
            }
        };

        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            tracing::debug!("Submit ignored, another submit is in flight");
            return SubmitReport::Busy;
        };

        let integration = self.submit_lead(&name, &phone).await;

        let message = lead_message(&name, &phone);
        let url = self.build_whatsapp_url(&message);
        let navigation = self.navigation.navigate(&url, self.browser.as_ref());
        tracing::info!("Visitor sent to WhatsApp ({:?})", navigation);

        SubmitReport::Redirected {
            url,
            integration,
            navigation,
        }
    }

    /// Best-effort lead submission. Never stops the redirect.
    async fn submit_lead(&self, name: &ContactName, phone: &PhoneNumber) -> IntegrationStatus {
        if !self.submitter.is_configured() {
            tracing::info!("Lead API not configured, sending visitor straight to WhatsApp");
            return IntegrationStatus::Skipped;
        }

        match self.submitter.send(name.as_str(), phone.as_str()).await {
            Ok(outcome) => {
                if outcome.is_success() {
                    tracing::info!("Lead registered");
                } else {
                    tracing::warn!("Lead not registered: {}", outcome);
                }
                IntegrationStatus::Completed(outcome)
            }
            Err(e @ SubmitError::InvalidPhoneLength(_)) => {
                tracing::warn!("Lead not registered: {}", e);
                IntegrationStatus::Failed(e)
            }
            Err(e @ SubmitError::Internal(_)) => {
                tracing::error!("Lead submission broke: {}", e);
                self.browser.alert(GENERIC_ERROR_NOTICE);
                IntegrationStatus::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmitResult;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct NullSubmitter;

    #[async_trait]
    impl LeadSubmitter for NullSubmitter {
        async fn send(&self, _name: &str, _phone: &str) -> SubmitResult<SubmissionOutcome> {
            Ok(SubmissionOutcome::NotConfigured)
        }

        fn is_configured(&self) -> bool {
            false
        }
    }

    #[derive(Default)]
    struct AlertLog(Mutex<Vec<String>>);

    impl Browser for AlertLog {
        fn set_location(&self, _url: &str) {}

        fn open_window(&self, _url: &str) -> bool {
            true
        }

        fn alert(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    fn controller(browser: Arc<AlertLog>) -> FormController {
        FormController::new(&Config::default(), Arc::new(NullSubmitter), browser, false)
    }

    #[test]
    fn test_phone_input_is_masked() {
        let mut form = controller(Arc::new(AlertLog::default()));

        assert_eq!(form.on_phone_input("7"), "(7");
        assert_eq!(form.on_phone_input("(7871"), "(787) 1");
        assert_eq!(form.on_phone_input("(787) 123-45678"), "(787) 123-4567");
        assert_eq!(form.state().phone, "(787) 123-4567");
    }

    #[tokio::test]
    async fn test_invalid_form_alerts_and_rejects() {
        let browser = Arc::new(AlertLog::default());
        let mut form = controller(browser.clone());
        form.on_name_input("A");
        form.on_phone_input("7871234567");

        let report = form.submit().await;
        assert_eq!(report, SubmitReport::Rejected(ValidationError::NameTooShort));
        assert_eq!(
            *browser.0.lock().unwrap(),
            vec!["El nombre debe tener al menos 2 caracteres".to_string()]
        );
        assert!(!form.is_busy());
    }

    #[tokio::test]
    async fn test_unconfigured_api_still_redirects() {
        let browser = Arc::new(AlertLog::default());
        let mut form = controller(browser.clone());
        form.on_name_input("Ana");
        form.on_phone_input("7871234567");

        match form.submit().await {
            SubmitReport::Redirected {
                integration,
                navigation,
                ..
            } => {
                assert_eq!(integration, IntegrationStatus::Skipped);
                assert_eq!(navigation, Navigation::OpenedWindow);
            }
            other => panic!("Expected redirect, got: {:?}", other),
        }
        assert!(browser.0.lock().unwrap().is_empty());
        assert!(!form.is_busy());
    }

    #[tokio::test]
    async fn test_submit_while_busy_is_ignored() {
        let form = controller(Arc::new(AlertLog::default()));
        form.busy_flag().store(true, Ordering::Release);

        assert_eq!(form.submit().await, SubmitReport::Busy);
    }

    #[test]
    fn test_open_whatsapp_default_message() {
        let form = controller(Arc::new(AlertLog::default()));
        assert_eq!(form.open_whatsapp(None), Navigation::OpenedWindow);
        assert_eq!(
            form.build_whatsapp_url(DEFAULT_MESSAGE),
            build_whatsapp_url("9392283101", DEFAULT_MESSAGE)
        );
    }
}
