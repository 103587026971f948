//! Raw feed items, before any filtering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// When a post was published, as the source reported it.
///
/// Structured sources hand over a real timestamp; scraped sources only have
/// a display string whose format depends on the instance. Parsing the latter
/// is left to the date gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PublishedAt {
    Timestamp(DateTime<Utc>),
    Raw(String),
}

impl From<DateTime<Utc>> for PublishedAt {
    fn from(ts: DateTime<Utc>) -> Self {
        PublishedAt::Timestamp(ts)
    }
}

impl From<&str> for PublishedAt {
    fn from(raw: &str) -> Self {
        PublishedAt::Raw(raw.to_string())
    }
}

impl From<String> for PublishedAt {
    fn from(raw: String) -> Self {
        PublishedAt::Raw(raw)
    }
}

/// One fetched post.
///
/// `id` is the dedup key of the event this item may become. Feeds key items
/// by permalink, so `id` and `link` are normally the same string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItem {
    pub id: String,
    pub link: String,
    pub text: String,
    pub published_at: PublishedAt,
}

impl RawItem {
    /// Create an item identified by its permalink.
    pub fn from_permalink(
        link: impl Into<String>,
        text: impl Into<String>,
        published_at: impl Into<PublishedAt>,
    ) -> Self {
        let link = link.into();
        Self {
            id: link.clone(),
            link,
            text: text.into(),
            published_at: published_at.into(),
        }
    }

    /// Override the identifier (keeps `link` untouched).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}
