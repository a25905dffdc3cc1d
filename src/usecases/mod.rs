//! Application use cases. Orchestrate domain logic via ports.

pub mod auto_send_service;
pub mod messaging_service;

pub use auto_send_service::{AutoSendService, CycleReport, SettingsUpdate};
pub use messaging_service::MessagingService;
