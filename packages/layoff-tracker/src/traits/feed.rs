//! Feed trait for pluggable post sources.
//!
//! A feed hands over raw posts for one account. It does no filtering beyond
//! dropping items it cannot represent at all (no link, no text); dates are
//! passed through as-is for the date gate.

use async_trait::async_trait;

use crate::error::FeedResult;
use crate::types::RawItem;

/// What to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    /// Account handle, without a leading `@`
    pub user: String,

    /// Maximum number of items to return
    pub limit: usize,
}

impl FeedRequest {
    pub fn new(user: impl Into<String>, limit: usize) -> Self {
        Self {
            user: user.into().trim_start_matches('@').to_string(),
            limit,
        }
    }
}

/// Source of raw posts.
///
/// Errors are whole-run failures (network, auth, unreadable source).
#[async_trait]
pub trait Feed: Send + Sync {
    /// Fetch up to `request.limit` items for `request.user`.
    async fn fetch(&self, request: &FeedRequest) -> FeedResult<Vec<RawItem>>;

    /// Short name for logs.
    fn name(&self) -> &str;
}
