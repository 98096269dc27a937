//! Browser host abstraction and navigation strategies.
//!
//! The controller never touches a real browser. It talks to a [`Browser`]
//! and picks a [`NavigationStrategy`] from an explicit `is_mobile` flag.

use once_cell::sync::Lazy;
use regex::Regex;

static MOBILE_USER_AGENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .expect("Failed to compile mobile user agent regex")
});

/// The page host: whatever can move the visitor to another URL and show alerts.
pub trait Browser: Send + Sync {
    /// Replace the current page with `url`.
    fn set_location(&self, url: &str);

    /// Open `url` in a new window. Returns false if no window opened
    /// (popup blocked, window closed immediately).
    fn open_window(&self, url: &str) -> bool;

    /// Show a blocking message to the visitor.
    fn alert(&self, message: &str);
}

/// How the visitor ended up at the target URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The current page was redirected.
    Redirected,
    /// A new window was opened.
    OpenedWindow,
    /// A new window could not be opened, so the current page was redirected.
    FellBackToRedirect,
}

/// A way of sending the visitor to a URL.
pub trait NavigationStrategy: Send + Sync {
    fn navigate(&self, url: &str, browser: &dyn Browser) -> Navigation;
}

/// Redirect the current page. Used on mobile so the WhatsApp app opens directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct InPlaceRedirect;

impl NavigationStrategy for InPlaceRedirect {
    fn navigate(&self, url: &str, browser: &dyn Browser) -> Navigation {
        browser.set_location(url);
        Navigation::Redirected
    }
}

/// Open a new window, falling back to an in-place redirect. Used on desktop.
#[derive(Debug, Default, Clone, Copy)]
pub struct NewWindowWithFallback;

impl NavigationStrategy for NewWindowWithFallback {
    fn navigate(&self, url: &str, browser: &dyn Browser) -> Navigation {
        if browser.open_window(url) {
            Navigation::OpenedWindow
        } else {
            tracing::warn!("New window did not open, redirecting current page instead");
            browser.set_location(url);
            Navigation::FellBackToRedirect
        }
    }
}

/// Pick the navigation strategy for a device class.
pub fn strategy_for(is_mobile: bool) -> Box<dyn NavigationStrategy> {
    if is_mobile {
        Box::new(InPlaceRedirect)
    } else {
        Box::new(NewWindowWithFallback)
    }
}

/// Coarse device sniff for hosts that only know the user agent string.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_USER_AGENT.is_match(user_agent)
}
