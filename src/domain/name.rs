//! ContactName value object.

use super::errors::ValidationError;
use std::fmt;

/// Minimum number of characters in a trimmed name.
pub const MIN_NAME_CHARS: usize = 2;

/// A visitor name that passed form validation, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Validate and trim a name as entered in the form.
    ///
    /// # Errors
    ///
    /// `EmptyField` for a blank name, `NameTooShort` when fewer than
    /// two characters remain after trimming.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyField);
        }
        if trimmed.chars().count() < MIN_NAME_CHARS {
            return Err(ValidationError::NameTooShort);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
