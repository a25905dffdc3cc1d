//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. The pure message core
//! never returns them for data-shape issues; it degrades to fallback text.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repo(String),

    #[error("Transport error: {0}")]
    Transport(String),

    /// Auto-send settings that cannot produce a schedule (bad time, weekly without days).
    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("Phrase dictionary error: {0}")]
    Dictionary(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The composed text is empty or a "nothing to report" sentinel.
    #[error("Nothing to send for {0}")]
    NothingToSend(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("UI error: {0}")]
    Ui(String),
}
