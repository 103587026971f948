//! Seams between the pipeline and the outside world.

pub mod feed;
pub mod store;

pub use feed::{Feed, FeedRequest};
pub use store::EventStore;
