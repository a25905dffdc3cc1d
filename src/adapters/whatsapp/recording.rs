//! Recording transport for tests and dry runs.
//!
//! Keeps every message in memory instead of sending it. Can be told to fail
//! so error paths are testable without a network.

use crate::domain::{DeliveryResult, DomainError};
use crate::ports::MessageTransport;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub destination: String,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<SentMessage>>,
    fail: AtomicBool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `send` fail (or succeed again).
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub async fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl MessageTransport for RecordingTransport {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, destination: &str, text: &str) -> Result<DeliveryResult, DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::Transport("[MOCK] transport offline".into()));
        }
        let mut sent = self.sent.lock().await;
        sent.push(SentMessage {
            destination: destination.to_string(),
            text: text.to_string(),
        });
        info!(destination, chars = text.chars().count(), "[MOCK] message recorded");
        Ok(DeliveryResult::Sent {
            message_id: Some(format!("mock-{}", sent.len())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_and_fails_on_demand() {
        let transport = RecordingTransport::new();
        let result = transport.send("+91 1234567", "hello").await.unwrap();
        assert_eq!(result.reference(), Some("mock-1"));
        assert_eq!(transport.sent().await.len(), 1);

        transport.set_failing(true);
        assert!(matches!(
            transport.send("+91 1234567", "again").await,
            Err(DomainError::Transport(_))
        ));
        assert_eq!(transport.sent().await.len(), 1);
    }
}
