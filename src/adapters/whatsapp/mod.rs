//! WhatsApp transports. Implement MessageTransport.
//!
//! - `LinkTransport`: click-to-chat links (wa.me), no credentials needed
//! - `CloudApiTransport`: WhatsApp Business Cloud API
//! - `RecordingTransport`: keeps messages in memory, for tests and dry runs

pub mod cloud_api;
pub mod link;
pub mod recording;

pub use cloud_api::CloudApiTransport;
pub use link::LinkTransport;
pub use recording::RecordingTransport;

use crate::domain::DomainError;

/// Shortest number WhatsApp accepts once formatting is stripped.
const MIN_PHONE_DIGITS: usize = 7;

/// Digits-only international number ("+91 98765-43210" -> "919876543210").
pub fn normalize_phone(phone: &str) -> Result<String, DomainError> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < MIN_PHONE_DIGITS {
        return Err(DomainError::Transport(format!(
            "'{}' is not a valid phone number",
            phone
        )));
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("+91 98765-43210").unwrap(), "919876543210");
        assert_eq!(normalize_phone("(044) 2345 6789").unwrap(), "04423456789");
        assert!(normalize_phone("call me").is_err());
        assert!(normalize_phone("+1 23").is_err());
    }
}
