//! Folds newly built events into the persisted collection.

use std::collections::HashSet;

use crate::types::LayoffEvent;

/// Result of a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Full collection, newest first.
    pub events: Vec<LayoffEvent>,
    /// How many candidates were new.
    pub added: usize,
}

/// Merge `candidates` into `existing`, keyed by `id`.
///
/// - every existing event is kept unchanged
/// - a candidate whose `id` is already known is dropped (existing data wins);
///   among candidates sharing an `id`, the first one wins
/// - the result is stably sorted by date, newest first
///
/// Merging the same candidates again is a no-op.
pub fn merge_events(existing: Vec<LayoffEvent>, candidates: Vec<LayoffEvent>) -> MergeOutcome {
    let mut seen: HashSet<String> = existing.iter().map(|e| e.id.clone()).collect();
    let mut events = existing;
    let before = events.len();

    for candidate in candidates {
        if seen.insert(candidate.id.clone()) {
            events.push(candidate);
        } else {
            tracing::debug!(id = %candidate.id, "Skipping duplicate event");
        }
    }
    let added = events.len() - before;

    events.sort_by(|a, b| b.date.cmp(&a.date));

    MergeOutcome { events, added }
}
