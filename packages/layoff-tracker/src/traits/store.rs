//! Persistence for the event collection.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::LayoffEvent;

/// Authoritative storage of the merged event collection.
///
/// At most one run touches a store at a time; implementations do no locking.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Load the persisted collection. A store that was never written is empty.
    async fn load(&self) -> Result<Vec<LayoffEvent>>;

    /// Replace the persisted collection. Must not leave a partial write behind.
    async fn save(&self, events: &[LayoffEvent]) -> Result<()>;
}
