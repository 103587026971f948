//! Typed errors for the layoff tracker library.
//!
//! Only whole-run failures are represented here. Per-item problems (bad
//! dates, irrelevant posts, missing headcounts) are skips, not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The input feed could not be read
    #[error("feed failed: {0}")]
    Feed(#[from] FeedError),

    /// Filesystem operation on the store failed
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing events failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Persisted store exists but is not a valid event list
    #[error("corrupt event store at {path}: {source}")]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration value is unusable
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Errors raised by input feeds.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Upstream platform/scraper failed (network, auth, actor run)
    #[error("upstream error: {0}")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The request itself is unusable (e.g. empty user handle)
    #[error("invalid feed request: {reason}")]
    Request { reason: String },

    /// Local feed source could not be read
    #[error("feed I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Local feed source is not valid JSON
    #[error("feed JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<apify_client::ApifyError> for FeedError {
    fn from(err: apify_client::ApifyError) -> Self {
        FeedError::Upstream(Box::new(err))
    }
}

/// Result type alias for pipeline and store operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Result type alias for feed operations.
pub type FeedResult<T> = std::result::Result<T, FeedError>;
