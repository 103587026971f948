use anyhow::{Context, Result};
use chrono::NaiveDate;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

use crate::stores::json_file::DEFAULT_STORE_PATH;
use crate::types::TrackerConfig;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub apify_api_token: Option<String>,
    pub store_path: PathBuf,
    pub tracker: TrackerConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let mut tracker = TrackerConfig::default();
        if let Ok(user) = env::var("LAYOFF_TARGET_USER") {
            tracker = tracker.with_target_user(user);
        }
        if let Ok(raw) = env::var("LAYOFF_CUTOFF_DATE") {
            tracker = tracker.with_cutoff_date(
                parse_cutoff(&raw).context("LAYOFF_CUTOFF_DATE must be YYYY-MM-DD")?,
            );
        }
        if let Ok(raw) = env::var("LAYOFF_FETCH_LIMIT") {
            tracker = tracker.with_fetch_limit(
                raw.parse()
                    .context("LAYOFF_FETCH_LIMIT must be a valid number")?,
            );
        }

        Ok(Self {
            apify_api_token: env::var("APIFY_API_TOKEN").ok().filter(|t| !t.is_empty()),
            store_path: env::var("LAYOFF_STORE_PATH")
                .unwrap_or_else(|_| DEFAULT_STORE_PATH.to_string())
                .into(),
            tracker,
        })
    }

    /// Apify token, required for live runs.
    pub fn require_apify_token(&self) -> Result<&str> {
        self.apify_api_token
            .as_deref()
            .context("APIFY_API_TOKEN must be set")
    }
}

/// Parse a `YYYY-MM-DD` cutoff date.
pub fn parse_cutoff(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date: {raw}"))
}
