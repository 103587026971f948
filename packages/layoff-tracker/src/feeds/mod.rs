//! Feed implementations.
//!
//! - [`XFeed`]: live X/Twitter posts scraped through Apify
//! - [`FileFeed`]: replay of a local JSON dump
//! - [`MockFeed`]: canned items for tests

mod file;
mod mock;
mod x;

pub use file::FileFeed;
pub use mock::MockFeed;
pub use x::{tweet_to_item, XFeed};
