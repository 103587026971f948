//! CLI for running the layoff pipeline
//!
//! `run` scrapes the tracked account through Apify, `import` replays a local
//! JSON dump, `show` prints the newest stored events.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use apify_client::ApifyClient;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use layoff_tracker::config::{parse_cutoff, Config};
use layoff_tracker::{
    run_pipeline, EventStore, Feed, FileFeed, JsonFileStore, RunReport, TrackerConfig, XFeed,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "layoff-tracker")]
#[command(about = "Collects announced layoffs from social posts into a JSON timeline")]
struct Cli {
    /// Event store location (overrides LAYOFF_STORE_PATH)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the tracked account and merge new events into the store
    Run {
        /// Account handle (overrides LAYOFF_TARGET_USER)
        #[arg(long)]
        user: Option<String>,

        /// Cutoff date, YYYY-MM-DD (overrides LAYOFF_CUTOFF_DATE)
        #[arg(long, value_parser = parse_cutoff)]
        since: Option<NaiveDate>,

        /// Maximum posts to fetch (overrides LAYOFF_FETCH_LIMIT)
        #[arg(long)]
        limit: Option<usize>,

        /// Report without writing the store
        #[arg(long)]
        dry_run: bool,
    },

    /// Merge posts from a local JSON dump into the store
    Import {
        file: PathBuf,

        /// Cutoff date, YYYY-MM-DD (overrides LAYOFF_CUTOFF_DATE)
        #[arg(long, value_parser = parse_cutoff)]
        since: Option<NaiveDate>,

        /// Report without writing the store
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the newest stored events
    Show {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,layoff_tracker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    let store = JsonFileStore::new(cli.store.clone().unwrap_or_else(|| config.store_path.clone()));

    match cli.command {
        Commands::Run {
            user,
            since,
            limit,
            dry_run,
        } => {
            let mut tracker = apply_overrides(config.tracker.clone(), since, dry_run);
            if let Some(user) = user {
                tracker = tracker.with_target_user(user);
            }
            if let Some(limit) = limit {
                tracker = tracker.with_fetch_limit(limit);
            }

            let apify = ApifyClient::new(config.require_apify_token()?.to_string());
            let feed = XFeed::new(Arc::new(apify));
            run(&feed, &store, &tracker).await
        }
        Commands::Import {
            file,
            since,
            dry_run,
        } => {
            let tracker = apply_overrides(config.tracker.clone(), since, dry_run)
                .with_fetch_limit(usize::MAX);
            let feed = FileFeed::new(file);
            run(&feed, &store, &tracker).await
        }
        Commands::Show { limit } => show(&store, limit).await,
    }
}

fn apply_overrides(tracker: TrackerConfig, since: Option<NaiveDate>, dry_run: bool) -> TrackerConfig {
    let tracker = tracker.with_dry_run(dry_run);
    match since {
        Some(cutoff) => tracker.with_cutoff_date(cutoff),
        None => tracker,
    }
}

async fn run(feed: &dyn Feed, store: &JsonFileStore, tracker: &TrackerConfig) -> Result<()> {
    let report = run_pipeline(feed, store, tracker)
        .await
        .context("Pipeline run failed")?;
    print_report(&report, store);
    Ok(())
}

fn print_report(report: &RunReport, store: &JsonFileStore) {
    println!(
        "Fetched {} posts, {} layoff events found, {} new",
        report.fetched, report.accepted, report.added
    );
    println!(
        "Skipped: {} unparseable date, {} before cutoff, {} not relevant, {} without headcount",
        report.skipped.unparseable_date,
        report.skipped.before_cutoff,
        report.skipped.not_relevant,
        report.skipped.no_count
    );
    if report.saved {
        println!(
            "Successfully saved {} entries to {}",
            report.total,
            store.path().display()
        );
    } else {
        println!("Dry run: {} entries would be saved", report.total);
    }
}

async fn show(store: &JsonFileStore, limit: usize) -> Result<()> {
    let events = store.load().await.context("Failed to load event store")?;
    if events.is_empty() {
        println!("No events in {}", store.path().display());
        return Ok(());
    }

    for event in events.iter().take(limit) {
        println!("{}  {:>7}  {}", event.date, event.count, event.company);
        println!("            {}", event.link);
    }
    println!("\n{} of {} events shown", limit.min(events.len()), events.len());
    Ok(())
}
