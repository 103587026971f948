//! X/Twitter feed — wraps Apify scraping and outputs raw items.

use std::sync::Arc;

use apify_client::{ApifyClient, Tweet};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::{FeedError, FeedResult};
use crate::traits::feed::{Feed, FeedRequest};
use crate::types::RawItem;

pub struct XFeed {
    apify: Arc<ApifyClient>,
}

impl XFeed {
    pub fn new(apify: Arc<ApifyClient>) -> Self {
        Self { apify }
    }
}

#[async_trait]
impl Feed for XFeed {
    async fn fetch(&self, request: &FeedRequest) -> FeedResult<Vec<RawItem>> {
        if request.user.trim().is_empty() {
            return Err(FeedError::Request {
                reason: "X feed requires a user handle".to_string(),
            });
        }
        let limit = u32::try_from(request.limit).unwrap_or(u32::MAX);

        info!(handle = %request.user, limit, "Scraping X/Twitter posts via Apify");

        let tweets = self.apify.scrape_x_posts(&request.user, limit).await?;

        let items: Vec<RawItem> = tweets
            .iter()
            .filter_map(|t| {
                let item = tweet_to_item(t);
                if item.is_none() {
                    debug!(id = ?t.id, "Skipping malformed tweet");
                }
                item
            })
            .take(request.limit)
            .collect();

        info!(
            handle = %request.user,
            total_scraped = tweets.len(),
            items_created = items.len(),
            "X/Twitter fetch complete"
        );

        Ok(items)
    }

    fn name(&self) -> &str {
        "x"
    }
}

/// Convert a scraped tweet, keyed by permalink.
///
/// Returns `None` for rows without a permalink, text or timestamp.
pub fn tweet_to_item(tweet: &Tweet) -> Option<RawItem> {
    let link = tweet.permalink()?;
    let text = tweet.content().filter(|c| !c.trim().is_empty())?;
    let created_at = tweet.created_at.as_deref()?;

    Some(RawItem::from_permalink(link, text, created_at))
}
