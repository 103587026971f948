//! Date canonicalization and cutoff filtering.
//!
//! Upstream sources disagree on how they print dates. Anything that cannot
//! be parsed is skipped, never raised.

use chrono::{DateTime, NaiveDate, Utc};

use super::build::SkipReason;
use crate::types::item::PublishedAt;

/// Twitter API style, e.g. `Wed Jan 01 10:00:00 +0000 2025`.
const TWITTER_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Nitter display date once commas and the time part are removed, e.g. `Jan 1 2025`.
const NITTER_FORMAT: &str = "%b %d %Y";

/// Separator between date and time in Nitter display strings.
const NITTER_SEPARATOR: char = '·';

/// Canonicalize a publication time to a calendar date, then apply the cutoff.
///
/// The cutoff is inclusive: a post dated on `cutoff` passes.
pub fn check_date(published: &PublishedAt, cutoff: NaiveDate) -> Result<NaiveDate, SkipReason> {
    let date = parse_published(published).ok_or(SkipReason::UnparseableDate)?;
    if date < cutoff {
        return Err(SkipReason::BeforeCutoff);
    }
    Ok(date)
}

/// Canonical (UTC) calendar date of a publication time, if it can be parsed.
pub fn parse_published(published: &PublishedAt) -> Option<NaiveDate> {
    match published {
        PublishedAt::Timestamp(ts) => Some(ts.date_naive()),
        PublishedAt::Raw(raw) => parse_raw_date(raw),
    }
}

/// Parse a source-formatted date string.
///
/// Tried in order: RFC 3339, `YYYY-MM-DD`, Twitter API format, Nitter
/// display format.
pub fn parse_raw_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_str(raw, TWITTER_FORMAT) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }

    let cleaned = raw.replace(',', "");
    let date_part = cleaned.split(NITTER_SEPARATOR).next().unwrap_or_default().trim();
    NaiveDate::parse_from_str(date_part, NITTER_FORMAT).ok()
}
