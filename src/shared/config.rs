//! Application configuration. Paths, locale defaults, scheduler timing and
//! WhatsApp credentials.

use crate::domain::{DomainError, LanguageCode, PhraseDictionary};
use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;
use tracing::info;

/// India Standard Time, UTC+05:30.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;

pub const DEFAULT_SCHEDULER_TICK_SECS: u64 = 60;

pub const DEFAULT_WHATSAPP_API_URL: &str = "https://graph.facebook.com/v19.0";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory holding the SQLite database. Read from MAID_EASY_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Language for new contacts. Read from MAID_EASY_DEFAULT_LANGUAGE.
    #[serde(default)]
    pub default_language: Option<String>,

    /// Extra phrases merged over the built-in dictionary (JSON array).
    /// Read from MAID_EASY_PHRASEBOOK_PATH.
    #[serde(default)]
    pub phrasebook_path: Option<String>,

    /// Seconds between auto-send scheduler ticks (default 60).
    #[serde(default)]
    pub scheduler_tick_secs: Option<u64>,

    /// Household clock offset from UTC in minutes (default 330).
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,

    // ─────────────────────────────────────────────────────────────────────────
    // WhatsApp Cloud API
    // ─────────────────────────────────────────────────────────────────────────
    /// Bearer token. Read from MAID_EASY_WHATSAPP_TOKEN.
    #[serde(default)]
    pub whatsapp_token: Option<String>,

    /// Sender phone number id. Read from MAID_EASY_WHATSAPP_PHONE_NUMBER_ID.
    #[serde(default)]
    pub whatsapp_phone_number_id: Option<String>,

    /// Graph API base URL. Read from MAID_EASY_WHATSAPP_API_URL.
    #[serde(default)]
    pub whatsapp_api_url: Option<String>,
}

impl AppConfig {
    /// Reads the environment and the optional MAID_EASY_CONFIG file. A `.env`
    /// file must already be loaded by the caller.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(std::env::var("MAID_EASY_CONFIG").ok().as_deref())
    }

    /// Environment plus an optional config file; the environment wins.
    pub fn load_from(config_file: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        if let Some(path) = config_file {
            c = c.add_source(config::File::with_name(path));
        }
        c = c.add_source(config::Environment::with_prefix("MAID_EASY"));
        c.build()?.try_deserialize()
    }

    /// Returns the data directory. Defaults to "data".
    pub fn data_dir_or_default(&self) -> String {
        self.data_dir.clone().unwrap_or_else(|| "data".to_string())
    }

    /// Returns the default contact language. Unknown values fall back to English.
    pub fn default_language(&self) -> LanguageCode {
        self.default_language
            .as_deref()
            .map(LanguageCode::parse_or_default)
            .unwrap_or_default()
    }

    /// Returns scheduler tick in seconds. Zero is treated as unset.
    pub fn scheduler_tick_secs_or_default(&self) -> u64 {
        self.scheduler_tick_secs
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_SCHEDULER_TICK_SECS)
    }

    /// Household time zone. Out-of-range offsets fall back to the default.
    pub fn utc_offset(&self) -> FixedOffset {
        let minutes = self.utc_offset_minutes.unwrap_or(DEFAULT_UTC_OFFSET_MINUTES);
        FixedOffset::east_opt(minutes * 60)
            .or_else(|| FixedOffset::east_opt(DEFAULT_UTC_OFFSET_MINUTES * 60))
            .unwrap_or_else(|| Utc.fix())
    }

    /// Built-in phrases merged with the user phrasebook, if one is configured.
    pub async fn load_dictionary(&self) -> Result<PhraseDictionary, DomainError> {
        let mut dictionary = PhraseDictionary::builtin();
        if let Some(path) = self.phrasebook_path.as_deref() {
            let json = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| DomainError::Config(format!("read phrasebook {}: {}", path, e)))?;
            let merged = dictionary.extend_from_json(&json)?;
            info!(path, merged, "user phrasebook loaded");
        }
        Ok(dictionary)
    }

    /// Returns the Graph API base URL without a trailing slash.
    pub fn whatsapp_api_url_or_default(&self) -> String {
        self.whatsapp_api_url
            .as_deref()
            .unwrap_or(DEFAULT_WHATSAPP_API_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Returns true if the Cloud API transport can be used (token and sender id present).
    pub fn is_cloud_api_configured(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.whatsapp_token) && present(&self.whatsapp_phone_number_id)
    }
}
