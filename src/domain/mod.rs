//! Domain value objects and form validation.
//!
//! Value objects validate at construction time, so a `ContactName` or
//! `PhoneNumber` in hand is always something the form would accept.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::{digits_only, format_phone_input, PhoneNumber};

/// Validate the raw form fields, in the order the visitor sees errors.
///
/// Blank fields are reported before anything else, then the name, then
/// the phone.
pub fn validate_contact(
    name: &str,
    phone: &str,
) -> Result<(ContactName, PhoneNumber), ValidationError> {
    if name.trim().is_empty() || phone.trim().is_empty() {
        return Err(ValidationError::EmptyField);
    }

    let name = ContactName::parse(name)?;
    let phone = PhoneNumber::parse(phone)?;
    Ok((name, phone))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_field_wins_over_other_errors() {
        assert_eq!(validate_contact("A", ""), Err(ValidationError::EmptyField));
        assert_eq!(validate_contact("", "abc"), Err(ValidationError::EmptyField));
    }

    #[test]
    fn test_name_checked_before_phone() {
        assert_eq!(validate_contact("A", "abc"), Err(ValidationError::NameTooShort));
    }

    #[test]
    fn test_valid_contact() {
        let (name, phone) = validate_contact("Ana Ríos", "(787) 123-4567").unwrap();
        assert_eq!(name.as_str(), "Ana Ríos");
        assert_eq!(phone.digits(), "7871234567");
    }
}
