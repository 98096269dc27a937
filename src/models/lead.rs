//! Lead record sent to the lead API.

use serde::{Deserialize, Serialize};

/// A prospective customer captured by the landing page form.
///
/// Field names follow the lead API contract (`nombre`, `telefono`,
/// `proviene`, `categoria`). Built fresh for every submission attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeadRecord {
    /// Visitor name, trimmed (API field: nombre)
    #[serde(rename = "nombre")]
    pub name: String,

    /// Ten digits, no formatting (API field: telefono)
    #[serde(rename = "telefono")]
    pub phone: String,

    /// Where the lead came from (API field: proviene)
    #[serde(rename = "proviene")]
    pub source: String,

    /// Lead category (API field: categoria)
    #[serde(rename = "categoria")]
    pub category: String,
}

impl LeadRecord {
    /// Create a new lead record. `name` is trimmed.
    pub fn new(name: &str, phone_digits: String, source: String, category: String) -> Self {
        Self {
            name: name.trim().to_string(),
            phone: phone_digits,
            source,
            category,
        }
    }
}

/// Error payload the lead API may return with a non-2xx status.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Extract the `message` field from a raw error body, if it is JSON and has one.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|message| !message.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_serializes_api_field_names() {
        let lead = LeadRecord::new(
            "  Ana Ríos ",
            "7871234567".to_string(),
            "Tu Guía Digital".to_string(),
            "lead".to_string(),
        );
        let value = serde_json::to_value(&lead).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "nombre": "Ana Ríos",
                "telefono": "7871234567",
                "proviene": "Tu Guía Digital",
                "categoria": "lead"
            })
        );
    }

    #[test]
    fn test_error_body_message() {
        assert_eq!(
            ApiErrorBody::message_from(r#"{"message":"jwt expired"}"#),
            Some("jwt expired".to_string())
        );
        assert_eq!(ApiErrorBody::message_from(r#"{"error":"nope"}"#), None);
        assert_eq!(ApiErrorBody::message_from("Forbidden"), None);
        assert_eq!(ApiErrorBody::message_from(r#"{"message":""}"#), None);
    }
}
