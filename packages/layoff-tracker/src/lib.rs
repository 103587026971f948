//! Layoff Tracker
//!
//! Extracts structured layoff announcements (company, headcount, date,
//! source link) from short German-language social posts, and folds them
//! into a date-sorted JSON timeline without losing history or creating
//! duplicates.
//!
//! # Usage
//!
//! ```rust,ignore
//! use layoff_tracker::{run_pipeline, JsonFileStore, MockFeed, TrackerConfig};
//!
//! let feed = MockFeed::new();
//! let store = JsonFileStore::new("data/layoffs.json");
//! let report = run_pipeline(&feed, &store, &TrackerConfig::default()).await?;
//! println!("{} new events", report.added);
//! ```
//!
//! # Modules
//!
//! - [`pipeline`] - Heuristics, date gate, merge and the run driver
//! - [`traits`] - Feed and store abstractions
//! - [`feeds`] - Feed implementations (X via Apify, local file, mock)
//! - [`stores`] - Store implementations (JSON file, memory)
//! - [`types`] - Raw items, events and run configuration

pub mod config;
pub mod error;
pub mod feeds;
pub mod pipeline;
pub mod stores;
pub mod traits;
pub mod types;

pub use config::Config;
pub use error::{FeedError, FeedResult, Result, TrackerError};
pub use feeds::{FileFeed, MockFeed, XFeed};
pub use pipeline::{
    build_event, check_date, evaluate, extract_company, extract_count, is_relevant,
    merge_events, parse_published, parse_raw_date, process_items, run_pipeline, MergeOutcome,
    RunReport, SkipCounts, SkipReason,
};
pub use stores::{JsonFileStore, MemoryStore};
pub use traits::{EventStore, Feed, FeedRequest};
pub use types::{LayoffEvent, PublishedAt, RawItem, TrackerConfig};
