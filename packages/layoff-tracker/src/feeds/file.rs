//! File feed — replays a local JSON dump of scraped posts.
//!
//! Accepts a JSON array whose elements look like either Nitter scraper
//! output (`link`, `text`, `date`) or Apify tweet rows (`url`, `fullText`,
//! `createdAt`). Elements that cannot be represented are skipped.

use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::FeedResult;
use crate::traits::feed::{Feed, FeedRequest};
use crate::types::RawItem;

const LINK_KEYS: &[&str] = &["link", "url", "twitterUrl", "permalink"];
const TEXT_KEYS: &[&str] = &["fullText", "text"];
const DATE_KEYS: &[&str] = &["date", "createdAt", "published_at", "timestamp"];

pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Feed for FileFeed {
    async fn fetch(&self, request: &FeedRequest) -> FeedResult<Vec<RawItem>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let values: Vec<Value> = serde_json::from_str(&raw)?;

        let total = values.len();
        let items: Vec<RawItem> = values
            .iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let item = value_to_item(value);
                if item.is_none() {
                    debug!(index, "Skipping malformed feed entry");
                }
                item
            })
            .take(request.limit)
            .collect();

        info!(
            path = %self.path.display(),
            total_entries = total,
            items_created = items.len(),
            "File feed read"
        );

        Ok(items)
    }

    fn name(&self) -> &str {
        "file"
    }
}

fn first_str<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|k| value.get(*k).and_then(Value::as_str))
        .find(|s| !s.trim().is_empty())
}

fn value_to_item(value: &Value) -> Option<RawItem> {
    let link = first_str(value, LINK_KEYS)?;
    let text = first_str(value, TEXT_KEYS)?;
    let date = first_str(value, DATE_KEYS)?;

    Some(RawItem::from_permalink(link, text, date))
}
