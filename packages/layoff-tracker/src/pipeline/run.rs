//! One full pipeline run: load, fetch, filter, merge, save.

use serde::Serialize;
use tracing::{debug, info};

use super::build::{evaluate, SkipReason};
use super::merge::merge_events;
use crate::error::Result;
use crate::traits::{EventStore, Feed, FeedRequest};
use crate::types::{LayoffEvent, RawItem, TrackerConfig};

/// Per-reason tally of skipped items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipCounts {
    pub unparseable_date: usize,
    pub before_cutoff: usize,
    pub not_relevant: usize,
    pub no_count: usize,
}

impl SkipCounts {
    pub fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::UnparseableDate => self.unparseable_date += 1,
            SkipReason::BeforeCutoff => self.before_cutoff += 1,
            SkipReason::NotRelevant => self.not_relevant += 1,
            SkipReason::NoCount => self.no_count += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.unparseable_date + self.before_cutoff + self.not_relevant + self.no_count
    }
}

/// What a run did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Items returned by the feed
    pub fetched: usize,
    /// Items that became candidate events
    pub accepted: usize,
    /// Candidates that were not yet in the store
    pub added: usize,
    /// Store size after the merge
    pub total: usize,
    pub skipped: SkipCounts,
    /// Whether the store was written
    pub saved: bool,
}

/// Turn raw items into candidate events, in feed order.
///
/// Every item is handled on its own; a bad item never affects the others.
pub fn process_items(
    items: impl IntoIterator<Item = RawItem>,
    config: &TrackerConfig,
) -> (Vec<LayoffEvent>, SkipCounts) {
    let mut events = Vec::new();
    let mut skipped = SkipCounts::default();

    for item in items {
        let id = item.id.clone();
        match evaluate(item, config) {
            Ok(event) => {
                info!(
                    company = %event.company,
                    count = event.count,
                    date = %event.date,
                    "Found layoff"
                );
                events.push(event);
            }
            Err(reason) => {
                debug!(id = %id, %reason, "Skipping item");
                skipped.record(reason);
            }
        }
    }

    (events, skipped)
}

/// Run the pipeline against `feed` and `store`.
///
/// The config is validated and the store loaded before fetching, so a corrupt store aborts the run
/// before any network traffic. Feed failures abort the run without writing.
/// On success the store holds a superset of what it held before.
pub async fn run_pipeline<F, S>(feed: &F, store: &S, config: &TrackerConfig) -> Result<RunReport>
where
    F: Feed + ?Sized,
    S: EventStore + ?Sized,
{
    info!(
        feed = feed.name(),
        user = %config.target_user,
        cutoff = %config.cutoff_date,
        limit = config.fetch_limit,
        "Starting layoff pipeline run"
    );

    config.validate()?;
    let existing = store.load().await?;

    let request = FeedRequest::new(&config.target_user, config.fetch_limit);
    let items = feed.fetch(&request).await?;
    let fetched = items.len();

    let (candidates, skipped) = process_items(items, config);
    let accepted = candidates.len();

    let outcome = merge_events(existing, candidates);

    let saved = !config.dry_run;
    if saved {
        store.save(&outcome.events).await?;
    } else {
        info!("Dry run, store left untouched");
    }

    let report = RunReport {
        fetched,
        accepted,
        added: outcome.added,
        total: outcome.events.len(),
        skipped,
        saved,
    };

    info!(
        fetched = report.fetched,
        accepted = report.accepted,
        added = report.added,
        total = report.total,
        skipped = report.skipped.total(),
        "Layoff pipeline run complete"
    );

    Ok(report)
}
