//! Click-to-chat transport. Builds a `https://wa.me/<number>?text=<message>` link
//! for the user to open; nothing leaves the machine.

use super::normalize_phone;
use crate::domain::{DeliveryResult, DomainError};
use crate::ports::MessageTransport;
use tracing::info;

const WA_ME_URL: &str = "https://wa.me";

#[derive(Debug, Default, Clone)]
pub struct LinkTransport;

impl LinkTransport {
    pub fn new() -> Self {
        Self
    }

    pub fn build_url(destination: &str, text: &str) -> Result<String, DomainError> {
        let phone = normalize_phone(destination)?;
        Ok(format!(
            "{}/{}?text={}",
            WA_ME_URL,
            phone,
            urlencoding::encode(text)
        ))
    }
}

#[async_trait::async_trait]
impl MessageTransport for LinkTransport {
    fn name(&self) -> &'static str {
        "link"
    }

    async fn send(&self, destination: &str, text: &str) -> Result<DeliveryResult, DomainError> {
        let url = Self::build_url(destination, text)?;
        info!(url_len = url.len(), "click-to-chat link generated");
        Ok(DeliveryResult::LinkGenerated { url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_encodes_text() {
        let url = LinkTransport::build_url("+91 98765 43210", "Hello! 👋\n\n1. Mop & dust").unwrap();
        assert!(url.starts_with("https://wa.me/919876543210?text="));
        assert!(url.contains("Hello%21%20"));
        assert!(url.contains("%0A%0A1.%20Mop%20%26%20dust"));
        assert!(!url.contains(' '));
    }

    #[tokio::test]
    async fn test_send_returns_link() {
        let result = LinkTransport::new().send("9876543210", "hi").await.unwrap();
        assert_eq!(
            result,
            DeliveryResult::LinkGenerated {
                url: "https://wa.me/9876543210?text=hi".to_string()
            }
        );
        assert!(LinkTransport::new().send("", "hi").await.is_err());
    }
}
