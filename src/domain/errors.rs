//! Form validation errors.
//!
//! The `Display` text of each variant is the message shown to the visitor
//! in the blocking alert, so it is written in Spanish.

use std::fmt;

/// Errors that can occur while validating the lead form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name or phone was left blank.
    EmptyField,

    /// Trimmed name has fewer than two characters.
    NameTooShort,

    /// Phone contains something other than digits and separators.
    PhoneInvalidChars,

    /// Phone has fewer than 7 digits.
    PhoneTooShort,

    /// Phone has more than 15 digits.
    PhoneTooLong,

    /// Phone uses a Puerto Rico area code but is not 10 digits long.
    RegionalLengthMismatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField => write!(f, "Por favor completa el nombre y teléfono"),
            Self::NameTooShort => write!(f, "El nombre debe tener al menos 2 caracteres"),
            Self::PhoneInvalidChars => write!(f, "El teléfono solo puede contener números"),
            Self::PhoneTooShort => write!(f, "El teléfono debe tener al menos 7 dígitos"),
            Self::PhoneTooLong => write!(f, "El teléfono no puede tener más de 15 dígitos"),
            Self::RegionalLengthMismatch => {
                write!(f, "Número de Puerto Rico debe tener 10 dígitos")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
