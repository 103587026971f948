//! Data types shared across the pipeline.

pub mod config;
pub mod event;
pub mod item;

pub use config::TrackerConfig;
pub use event::LayoffEvent;
pub use item::{PublishedAt, RawItem};
