//! Phone number masking and the PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Maximum number of digits kept by the input mask.
pub const MASK_MAX_DIGITS: usize = 10;

/// Minimum digits accepted on submit.
pub const MIN_PHONE_DIGITS: usize = 7;

/// Maximum digits accepted on submit.
pub const MAX_PHONE_DIGITS: usize = 15;

/// Area codes that must be followed by a full 10-digit number.
pub const REGIONAL_AREA_CODES: [&str; 3] = ["787", "939", "856"];

static PHONE_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-()]").expect("Failed to compile phone separator regex"));

/// Keep only the ASCII digits of `raw`.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Remove whitespace, dashes and parentheses, keeping every other character.
pub fn strip_separators(raw: &str) -> String {
    PHONE_SEPARATORS.replace_all(raw, "").into_owned()
}

/// Progressive `(XXX) XXX-XXXX` mask applied while the visitor types.
///
/// Non-digits are dropped and input is capped at ten digits. The closing
/// paren appears from the fourth digit, the dash from the sixth.
///
/// ```
/// use landing_leads::domain::format_phone_input;
///
/// assert_eq!(format_phone_input("787"), "(787");
/// assert_eq!(format_phone_input("7871"), "(787) 1");
/// assert_eq!(format_phone_input("787123"), "(787) 123-");
/// assert_eq!(format_phone_input("787-123-4567 ext"), "(787) 123-4567");
/// ```
pub fn format_phone_input(raw: &str) -> String {
    let digits: String = digits_only(raw).chars().take(MASK_MAX_DIGITS).collect();

    match digits.len() {
        0 => String::new(),
        1..=3 => format!("({}", digits),
        4..=5 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// A phone number that passed form validation.
///
/// Keeps the text as the visitor entered it (used in the WhatsApp message)
/// alongside the cleaned digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    display: String,
    digits: String,
}

impl PhoneNumber {
    /// Validate a phone number as entered in the form.
    ///
    /// # Validation Rules
    ///
    /// - Must not be blank
    /// - After removing whitespace, `-`, `(` and `)` only digits may remain
    /// - Between 7 and 15 digits
    /// - Numbers starting with a regional area code must have exactly 10 digits
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let display = raw.into();
        if display.trim().is_empty() {
            return Err(ValidationError::EmptyField);
        }

        let cleaned = strip_separators(&display);
        if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::PhoneInvalidChars);
        }

        if cleaned.len() < MIN_PHONE_DIGITS {
            return Err(ValidationError::PhoneTooShort);
        }
        if cleaned.len() > MAX_PHONE_DIGITS {
            return Err(ValidationError::PhoneTooLong);
        }

        let regional = REGIONAL_AREA_CODES
            .iter()
            .any(|code| cleaned.starts_with(code));
        if regional && cleaned.len() != MASK_MAX_DIGITS {
            return Err(ValidationError::RegionalLengthMismatch);
        }

        Ok(Self {
            display,
            digits: cleaned,
        })
    }

    /// The phone as the visitor typed it.
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// The phone with formatting removed.
    pub fn digits(&self) -> &str {
        &self.digits
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}
