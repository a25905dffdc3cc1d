//! Infrastructure adapters. Implement outbound ports.
//!
//! Storage, WhatsApp transports, terminal UI. Map errors to DomainError.

pub mod persistence;
pub mod ui;
pub mod whatsapp;
