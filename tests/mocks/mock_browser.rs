use landing_leads::Browser;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock browser recording every navigation and alert.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBrowser {
    popups_blocked: bool,
    location: Arc<Mutex<Option<String>>>,
    windows: Arc<Mutex<Vec<String>>>,
    alerts: Arc<Mutex<Vec<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// A browser whose popup blocker refuses every new window.
    pub fn with_popups_blocked() -> Self {
        Self {
            popups_blocked: true,
            ..Self::default()
        }
    }

    pub fn location(&self) -> Option<String> {
        self.location.lock().unwrap().clone()
    }

    pub fn windows(&self) -> Vec<String> {
        self.windows.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    /// The URL the visitor ended up at, whichever way they got there.
    pub fn visited(&self) -> Option<String> {
        self.windows().last().cloned().or_else(|| self.location())
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

impl Browser for MockBrowser {
    fn set_location(&self, url: &str) {
        self.track_call("set_location");
        *self.location.lock().unwrap() = Some(url.to_string());
    }

    fn open_window(&self, url: &str) -> bool {
        self.track_call("open_window");
        if self.popups_blocked {
            return false;
        }
        self.windows.lock().unwrap().push(url.to_string());
        true
    }

    fn alert(&self, message: &str) {
        self.track_call("alert");
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
