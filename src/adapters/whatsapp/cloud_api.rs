//! WhatsApp Business Cloud API transport.
//!
//! POST {api_url}/{phone_number_id}/messages with a bearer token. The
//! provider returns a message id ("wamid...") on success.

use super::normalize_phone;
use crate::domain::{DeliveryResult, DomainError};
use crate::ports::MessageTransport;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub struct CloudApiTransport {
    client: reqwest::Client,
    api_url: String,
    phone_number_id: String,
    token: String,
}

impl CloudApiTransport {
    /// # Arguments
    /// * `api_url` - Graph API base (e.g. "https://graph.facebook.com/v19.0")
    /// * `phone_number_id` - Sender id from the WhatsApp Business dashboard
    /// * `token` - Permanent or temporary access token
    pub fn new(api_url: String, phone_number_id: String, token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            phone_number_id,
            token,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/{}/messages", self.api_url, self.phone_number_id)
    }
}

/// Cloud API text message request.
#[derive(Serialize)]
struct SendRequest<'a> {
    messaging_product: &'static str,
    to: String,
    #[serde(rename = "type")]
    message_type: &'static str,
    text: TextBody<'a>,
}

#[derive(Serialize)]
struct TextBody<'a> {
    body: &'a str,
}

impl<'a> SendRequest<'a> {
    fn text(to: String, body: &'a str) -> Self {
        Self {
            messaging_product: "whatsapp",
            to,
            message_type: "text",
            text: TextBody { body },
        }
    }
}

/// Cloud API response structure.
#[derive(Deserialize)]
struct SendResponse {
    #[serde(default)]
    messages: Vec<SentMessage>,
}

#[derive(Deserialize)]
struct SentMessage {
    id: String,
}

#[async_trait::async_trait]
impl MessageTransport for CloudApiTransport {
    fn name(&self) -> &'static str {
        "cloud-api"
    }

    async fn send(&self, destination: &str, text: &str) -> Result<DeliveryResult, DomainError> {
        let to = normalize_phone(destination)?;
        let request = SendRequest::text(to, text);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "WhatsApp API returned error");
            return Err(DomainError::Transport(format!(
                "API error {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let parsed: SendResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Transport(format!("invalid API response: {}", e)))?;
        let message_id = parsed.messages.into_iter().next().map(|m| m.id);
        info!(message_id = ?message_id, "message sent via Cloud API");
        Ok(DeliveryResult::Sent { message_id })
    }
}
