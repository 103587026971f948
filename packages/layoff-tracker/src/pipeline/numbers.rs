//! Headcount extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 1-3 digits with optional `.`/`,` thousands groups (1.000, 10,000), or a bare run.
    // ASCII digits only; other scripts' digits are not headcounts here.
    static ref HEADCOUNT_REGEX: Regex =
        Regex::new(r"[0-9]{1,3}(?:[.,][0-9]{3})*|[0-9]+").unwrap();
}

/// Return the first headcount-like number in `text`, separators stripped.
///
/// Only the earliest match is considered; later numbers are never examined.
/// Only ASCII digits are recognized. Returns `None` when nothing matches or
/// the match overflows `u64`. Callers treat `None` as a
/// count of zero.
pub fn extract_count(text: &str) -> Option<u64> {
    let m = HEADCOUNT_REGEX.find(text)?;
    let digits: String = m.as_str().chars().filter(|c| *c != '.' && *c != ',').collect();
    digits.parse().ok()
}
