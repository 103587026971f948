//! End-to-end tests for a pipeline run.
//!
//! These tests verify the full run:
//! 1. Load the existing store
//! 2. Fetch items from the feed
//! 3. Filter and build events
//! 4. Merge and save

use chrono::NaiveDate;
use layoff_tracker::{
    run_pipeline, EventStore, FileFeed, JsonFileStore, LayoffEvent, MemoryStore, MockFeed,
    RawItem, TrackerConfig, TrackerError,
};

fn cutoff_config() -> TrackerConfig {
    TrackerConfig::new().with_cutoff_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
}

fn xyz_item() -> RawItem {
    RawItem::from_permalink("A", "XYZ streicht 2.000 Stellen", "2025-02-01")
}

fn stored_event(id: &str, date: &str) -> LayoffEvent {
    LayoffEvent {
        id: id.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        company: "Alt".to_string(),
        count: 50,
        text: "Alt streicht 50 Stellen".to_string(),
        link: id.to_string(),
    }
}

#[tokio::test]
async fn test_single_item_into_empty_store() {
    let feed = MockFeed::new().with_items(vec![xyz_item()]);
    let store = MemoryStore::new();

    let report = run_pipeline(&feed, &store, &cutoff_config()).await.unwrap();

    assert_eq!(report.fetched, 1);
    assert_eq!(report.accepted, 1);
    assert_eq!(report.added, 1);
    assert!(report.saved);

    let events = store.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "A");
    assert_eq!(events[0].date.to_string(), "2025-02-01");
    assert_eq!(events[0].company, "XYZ");
    assert_eq!(events[0].count, 2000);
    assert_eq!(events[0].text, "XYZ streicht 2.000 Stellen");
}

#[tokio::test]
async fn test_reprocessing_same_item_does_not_duplicate() {
    let feed = MockFeed::new().with_items(vec![xyz_item()]);
    let store = MemoryStore::new();
    let config = cutoff_config();

    run_pipeline(&feed, &store, &config).await.unwrap();
    let first = store.events();

    let report = run_pipeline(&feed, &store, &config).await.unwrap();

    assert_eq!(report.added, 0);
    assert_eq!(report.total, 1);
    assert_eq!(store.events(), first);
}

#[tokio::test]
async fn test_history_is_kept_and_sorted_newest_first() {
    let store = MemoryStore::with_events(vec![
        stored_event("old-1", "2025-01-10"),
        stored_event("old-2", "2025-03-01"),
    ]);
    let feed = MockFeed::new().with_items(vec![
        xyz_item(),
        RawItem::from_permalink("B", "Bei Miele fallen 1.300 Stellen weg", "Jan 5, 2025 · 9:00 AM UTC"),
    ]);

    let report = run_pipeline(&feed, &store, &cutoff_config()).await.unwrap();
    assert_eq!(report.added, 2);

    let ids: Vec<_> = store.events().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["old-2", "A", "old-1", "B"]);
}

#[tokio::test]
async fn test_feed_request_uses_config() {
    let feed = MockFeed::new();
    let store = MemoryStore::new();
    let config = cutoff_config().with_target_user("@someone").with_fetch_limit(25);

    run_pipeline(&feed, &store, &config).await.unwrap();

    let requests = feed.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].user, "someone");
    assert_eq!(requests[0].limit, 25);
}

#[tokio::test]
async fn test_feed_failure_aborts_without_writing() {
    let feed = MockFeed::new().with_items(vec![xyz_item()]);
    feed.fail_with("nitter instance unreachable");
    let store = MemoryStore::with_events(vec![stored_event("old-1", "2025-01-10")]);

    let result = run_pipeline(&feed, &store, &cutoff_config()).await;

    assert!(matches!(result, Err(TrackerError::Feed(_))));
    assert_eq!(store.save_count(), 0);
    assert_eq!(store.events().len(), 1);
}

#[tokio::test]
async fn test_dry_run_leaves_store_untouched() {
    let feed = MockFeed::new().with_items(vec![xyz_item()]);
    let store = MemoryStore::new();

    let report = run_pipeline(&feed, &store, &cutoff_config().with_dry_run(true))
        .await
        .unwrap();

    assert_eq!(report.added, 1);
    assert!(!report.saved);
    assert_eq!(store.save_count(), 0);
}

#[tokio::test]
async fn test_invalid_config_is_rejected_before_fetch() {
    let feed = MockFeed::new();
    let store = MemoryStore::new();

    let result = run_pipeline(&feed, &store, &cutoff_config().with_fetch_limit(0)).await;

    assert!(matches!(result, Err(TrackerError::InvalidConfig(_))));
    assert!(feed.requests().is_empty());
}

#[tokio::test]
async fn test_json_store_round_trip_through_runs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("layoffs.json");
    let store = JsonFileStore::new(&path);
    let feed = MockFeed::new().with_items(vec![xyz_item()]);

    assert!(store.load().await.unwrap().is_empty());

    run_pipeline(&feed, &store, &cutoff_config()).await.unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("\"company\": \"XYZ\""));
    assert!(written.contains("\"count\": 2000"));

    run_pipeline(&feed, &store, &cutoff_config()).await.unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), written);
}

#[tokio::test]
async fn test_corrupt_store_is_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layoffs.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = JsonFileStore::new(&path);
    let feed = MockFeed::new().with_items(vec![xyz_item()]);

    let result = run_pipeline(&feed, &store, &cutoff_config()).await;

    assert!(matches!(result, Err(TrackerError::CorruptStore { .. })));
    assert!(feed.requests().is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}

#[tokio::test]
async fn test_non_ascii_text_is_stored_unescaped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layoffs.json");
    let store = JsonFileStore::new(&path);
    let feed = MockFeed::new().with_items(vec![RawItem::from_permalink(
        "C",
        "Thyssenkrupp: Kündigung für 11.000 Beschäftigte",
        "2025-02-03",
    )]);

    run_pipeline(&feed, &store, &cutoff_config()).await.unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("Kündigung für 11.000 Beschäftigte"));
    assert!(!written.contains("\\u00"));
}

#[tokio::test]
async fn test_file_feed_replay() {
    let dir = tempfile::tempdir().unwrap();
    let dump = dir.path().join("tweets.json");
    std::fs::write(
        &dump,
        r#"[
            {"link": "https://nitter.net/u/status/1", "text": "Bosch streicht 1.000 Stellen", "date": "Jan 2, 2025 · 10:00 AM UTC"},
            {"link": "https://nitter.net/u/status/2", "text": "Ford baut 500 Jobs ab", "date": "Dec 30, 2024 · 10:00 AM UTC"},
            {"link": "https://nitter.net/u/status/3", "text": "Schönes Wetter heute", "date": "Jan 3, 2025 · 10:00 AM UTC"},
            {"text": "kaputt"}
        ]"#,
    )
    .unwrap();

    let feed = FileFeed::new(&dump);
    let store = MemoryStore::new();

    let report = run_pipeline(&feed, &store, &cutoff_config()).await.unwrap();

    assert_eq!(report.fetched, 3);
    assert_eq!(report.accepted, 1);
    assert_eq!(report.skipped.before_cutoff, 1);
    assert_eq!(report.skipped.not_relevant, 1);

    let events = store.events();
    assert_eq!(events[0].company, "Bosch");
    assert_eq!(events[0].count, 1000);
    assert_eq!(events[0].date.to_string(), "2025-01-02");
}
