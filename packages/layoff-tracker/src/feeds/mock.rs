//! Mock feed for testing.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::error::{FeedError, FeedResult};
use crate::traits::feed::{Feed, FeedRequest};
use crate::types::RawItem;

/// Mock feed returning canned items.
///
/// Records every request and can be switched into a failing mode to
/// simulate an unreachable platform.
#[derive(Default, Clone)]
pub struct MockFeed {
    items: Arc<RwLock<Vec<RawItem>>>,
    requests: Arc<RwLock<Vec<FeedRequest>>>,
    failure: Arc<RwLock<Option<String>>>,
}

impl MockFeed {
    /// Create a new empty mock feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item that will be returned by fetch.
    pub fn add_item(&self, item: RawItem) {
        self.items.write().unwrap().push(item);
    }

    /// Create a mock with pre-configured items (builder pattern).
    pub fn with_items(self, items: Vec<RawItem>) -> Self {
        for item in items {
            self.add_item(item);
        }
        self
    }

    /// Make every subsequent fetch fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.write().unwrap() = Some(message.into());
    }

    /// Get the requests received so far.
    pub fn requests(&self) -> Vec<FeedRequest> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait]
impl Feed for MockFeed {
    async fn fetch(&self, request: &FeedRequest) -> FeedResult<Vec<RawItem>> {
        self.requests.write().unwrap().push(request.clone());

        if let Some(message) = self.failure.read().unwrap().clone() {
            return Err(FeedError::Upstream(message.into()));
        }

        Ok(self
            .items
            .read()
            .unwrap()
            .iter()
            .take(request.limit)
            .cloned()
            .collect())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
