//! The extraction pipeline.
//!
//! Flow per run: feed items → date gate → event builder (relevance →
//! headcount → company) → merge with the persisted store → save.
//!
//! The heuristics are best-effort. They skip rather than guess: a post only
//! becomes an event when it is in the date window, mentions a layoff keyword
//! and carries a positive number.

pub mod build;
pub mod company;
pub mod date_gate;
pub mod merge;
pub mod numbers;
pub mod relevance;
pub mod run;

pub use build::{build_event, evaluate, SkipReason};
pub use company::extract_company;
pub use date_gate::{check_date, parse_published, parse_raw_date};
pub use merge::{merge_events, MergeOutcome};
pub use numbers::extract_count;
pub use relevance::is_relevant;
pub use run::{process_items, run_pipeline, RunReport, SkipCounts};
