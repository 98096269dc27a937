//! WhatsApp deep links.

use crate::domain::{ContactName, PhoneNumber};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Base of every chat deep link.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Message used by the plain "talk to us" button.
pub const DEFAULT_MESSAGE: &str = "Hola, me gustaría obtener más información sobre sus servicios.";

/// Characters left as-is in a URI component: ASCII alphanumerics and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build `https://wa.me/<number>?text=<percent-encoded message>`.
///
/// ```
/// use landing_leads::controller::build_whatsapp_url;
///
/// let url = build_whatsapp_url("9392283101", "Hola! ¿Qué tal?");
/// assert_eq!(url, "https://wa.me/9392283101?text=Hola!%20%C2%BFQu%C3%A9%20tal%3F");
/// ```
pub fn build_whatsapp_url(number: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE_URL,
        number,
        utf8_percent_encode(message, URI_COMPONENT)
    )
}

/// Chat message introducing the visitor who filled in the form.
pub fn lead_message(name: &ContactName, phone: &PhoneNumber) -> String {
    format!(
        "Hola! Me llamo {}, mi teléfono es {}. Me gustaría obtener más información sobre sus servicios.",
        name, phone
    )
}
