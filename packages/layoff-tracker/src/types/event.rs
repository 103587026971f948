//! The persisted layoff record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Company name used when no token in the post qualifies.
pub const UNKNOWN_COMPANY: &str = "Unbekannt";

/// A company announcing a headcount reduction, derived from exactly one post.
///
/// Created once per run and never mutated. `count` is always positive:
/// posts without a usable number never become events.
///
/// Field order matches the JSON store (`id, date, company, count, text, link`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoffEvent {
    pub id: String,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub company: String,
    pub count: u64,
    pub text: String,
    pub link: String,
}
