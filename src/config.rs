use std::env;

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};

const DEFAULT_BASE_URL: &str = "https://v3.football.api-sports.io";
const DEFAULT_BOOKMAKER_ID: u32 = 8;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Provider settings, resolved once at startup and owned read-only by the
/// client from then on.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
    pub bookmaker_id: u32,
    /// Season year sent with fixture-list lookups. `None` means "the current
    /// UTC year at request time".
    pub season: Option<i32>,
    pub timeout_secs: u64,
}

impl ProviderConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("APIFOOTBALL_KEY")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .context("APIFOOTBALL_KEY not set")?;

        let mut cfg = Self::with_key(api_key);

        if let Some(base_url) = env::var("APIFOOTBALL_BASE_URL")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
        {
            cfg.base_url = base_url;
        }
        if let Some(bookmaker_id) = env::var("APIFOOTBALL_BOOKMAKER_ID")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
        {
            cfg.bookmaker_id = bookmaker_id;
        }
        cfg.season = env::var("APIFOOTBALL_SEASON")
            .ok()
            .and_then(|v| v.parse::<i32>().ok());
        if let Some(timeout) = env::var("APIFOOTBALL_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            cfg.timeout_secs = timeout.clamp(1, 120);
        }

        Ok(cfg)
    }

    /// Defaults with just a credential. Used by `from_env` and by tests that
    /// never touch the network.
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            bookmaker_id: DEFAULT_BOOKMAKER_ID,
            season: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn season_or_current(&self) -> i32 {
        self.season.unwrap_or_else(|| Utc::now().year())
    }
}
