use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input for the apidojo/tweet-scraper actor.
#[derive(Debug, Clone, Serialize)]
pub struct TweetScraperInput {
    #[serde(rename = "twitterHandles")]
    pub twitter_handles: Vec<String>,
    #[serde(rename = "maxItems")]
    pub max_items: u32,
    pub sort: String,
}

/// A single tweet from the Apify dataset.
///
/// Every field is optional because the actor emits placeholder rows
/// (e.g. `{"noResults": true}`) when a profile is empty or rate-limited.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tweet {
    pub id: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "twitterUrl")]
    pub twitter_url: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "fullText")]
    pub full_text: Option<String>,
    /// Raw timestamp as emitted by the actor, e.g. `Wed Jan 01 10:00:00 +0000 2025`.
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    pub author: Option<TweetAuthor>,
}

impl Tweet {
    /// Post body, preferring the untruncated text. Blank values are ignored.
    pub fn content(&self) -> Option<&str> {
        non_blank(self.full_text.as_deref()).or(non_blank(self.text.as_deref()))
    }

    /// Canonical link to the post.
    pub fn permalink(&self) -> Option<&str> {
        self.url.as_deref().or(self.twitter_url.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TweetAuthor {
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
    pub name: Option<String>,
}

/// Wrapper for Apify API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Apify actor run metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct RunData {
    pub id: String,
    pub status: String,
    #[serde(rename = "defaultDatasetId")]
    pub default_dataset_id: String,
    #[serde(rename = "startedAt")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(rename = "finishedAt")]
    pub finished_at: Option<DateTime<Utc>>,
}
