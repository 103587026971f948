//! In-memory event store for testing and dry runs.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::error::Result;
use crate::traits::store::EventStore;
use crate::types::LayoffEvent;

/// In-memory storage for events. Data is lost on drop.
#[derive(Default)]
pub struct MemoryStore {
    events: RwLock<Vec<LayoffEvent>>,
    saves: AtomicUsize,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with events.
    pub fn with_events(events: Vec<LayoffEvent>) -> Self {
        Self {
            events: RwLock::new(events),
            saves: AtomicUsize::new(0),
        }
    }

    /// Snapshot of the stored events.
    pub fn events(&self) -> Vec<LayoffEvent> {
        self.events.read().unwrap().clone()
    }

    /// Number of times `save` was called.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn load(&self) -> Result<Vec<LayoffEvent>> {
        Ok(self.events.read().unwrap().clone())
    }

    async fn save(&self, events: &[LayoffEvent]) -> Result<()> {
        *self.events.write().unwrap() = events.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
