//! Configuration passed explicitly into a pipeline run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Account whose posts are tracked by default.
pub const DEFAULT_TARGET_USER: &str = "E_Boeminghaus";

/// Number of posts requested per run. Large enough to reach back to the cutoff.
pub const DEFAULT_FETCH_LIMIT: usize = 500;

/// Terms meaning positions, cuts, layoffs, jobs, dismissal.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "stellen",
    "abbau",
    "entlassung",
    "kündigung",
    "jobs",
    "streichen",
    "wegfallen",
];

/// Prepositions, articles and quantifiers that never name a company.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "bei", "der", "die", "das", "in", "von", "nach", "mehr", "rund", "knapp", "etwa",
];

/// Configuration for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Account handle to fetch posts for.
    pub target_user: String,

    /// Earliest in-scope date. Posts dated before it are dropped;
    /// posts on the cutoff itself are kept.
    pub cutoff_date: NaiveDate,

    /// Maximum number of posts requested from the feed.
    pub fetch_limit: usize,

    /// Relevance keywords, matched case-insensitively as substrings.
    pub keywords: Vec<String>,

    /// Tokens skipped when picking the company name (compared case-insensitively).
    pub stop_words: Vec<String>,

    /// Compute and report, but do not write the store.
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            target_user: DEFAULT_TARGET_USER.to_string(),
            cutoff_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            dry_run: false,
        }
    }
}

impl TrackerConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tracked account.
    pub fn with_target_user(mut self, user: impl Into<String>) -> Self {
        self.target_user = user.into();
        self
    }

    /// Set the cutoff date.
    pub fn with_cutoff_date(mut self, cutoff: NaiveDate) -> Self {
        self.cutoff_date = cutoff;
        self
    }

    /// Set the fetch limit.
    pub fn with_fetch_limit(mut self, limit: usize) -> Self {
        self.fetch_limit = limit;
        self
    }

    /// Replace the relevance keywords. Stored lower-case.
    pub fn with_keywords(mut self, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.keywords = keywords
            .into_iter()
            .map(|k| k.into().to_lowercase())
            .collect();
        self
    }

    /// Replace the stop words. Stored lower-case.
    pub fn with_stop_words(mut self, words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.stop_words = words.into_iter().map(|w| w.into().to_lowercase()).collect();
        self
    }

    /// Reject configurations under which no post could ever be accepted.
    pub fn validate(&self) -> Result<()> {
        if self.fetch_limit == 0 {
            return Err(TrackerError::InvalidConfig("fetch_limit must be positive".into()));
        }
        if self.keywords.is_empty() {
            return Err(TrackerError::InvalidConfig("at least one keyword is required".into()));
        }
        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(TrackerError::InvalidConfig("keywords must not be blank".into()));
        }
        Ok(())
    }

    /// Toggle dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.target_user, "E_Boeminghaus");
        assert_eq!(config.cutoff_date.to_string(), "2025-01-01");
        assert_eq!(config.fetch_limit, 500);
        assert!(config.keywords.iter().any(|k| k == "kündigung"));
        assert!(!config.dry_run);
    }

    #[test]
    fn test_builder_lowercases_keywords() {
        let config = TrackerConfig::new().with_keywords(["Stellen", "JOBS"]);
        assert_eq!(config.keywords, vec!["stellen", "jobs"]);
    }

    #[test]
    fn test_validate() {
        assert!(TrackerConfig::default().validate().is_ok());
        assert!(TrackerConfig::new().with_fetch_limit(0).validate().is_err());

        let none: [&str; 0] = [];
        assert!(matches!(
            TrackerConfig::new().with_keywords(none).validate(),
            Err(TrackerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_blank_keyword() {
        let config = TrackerConfig::new().with_keywords(["", "stellen"]);
        assert!(matches!(config.validate(), Err(TrackerError::InvalidConfig(_))));
    }

    #[test]
    fn test_deserialized_mixed_case_keywords_still_match() {
        let config: TrackerConfig = serde_json::from_str(
            r#"{
                "target_user": "E_Boeminghaus",
                "cutoff_date": "2025-01-01",
                "fetch_limit": 10,
                "keywords": ["Stellen"],
                "stop_words": ["BEI"]
            }"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        let item = crate::types::RawItem::from_permalink(
            "a",
            "Bei Bosch fallen 300 Stellen weg",
            "2025-02-01",
        );
        let event = crate::pipeline::evaluate(item, &config).unwrap();
        assert_eq!(event.company, "Bosch");
        assert_eq!(event.count, 300);
    }
}
