//! Company name heuristic.
//!
//! Deliberately crude: the first token that is not a stop word, not a
//! hashtag and longer than two characters is taken as the company. No
//! capitalization check, no entity resolution. Downstream consumers must
//! tolerate noisy names.

use crate::types::event::UNKNOWN_COMPANY;

const EDGE_PUNCTUATION: &[char] = &['.', ',', ':', ';', '!', '?'];

/// Pick the most likely company token from `text`, or [`UNKNOWN_COMPANY`].
///
/// Stop words are compared case-insensitively. Surrounding `.,:;!?` are stripped
/// from each token before it is tested and before it is returned.
pub fn extract_company<S: AsRef<str>>(text: &str, stop_words: &[S]) -> String {
    text.split_whitespace()
        .map(|token| token.trim_matches(EDGE_PUNCTUATION))
        .find(|token| qualifies(token, stop_words))
        .unwrap_or(UNKNOWN_COMPANY)
        .to_string()
}

fn qualifies<S: AsRef<str>>(token: &str, stop_words: &[S]) -> bool {
    if token.starts_with('#') || token.chars().count() <= 2 {
        return false;
    }
    let lowered = token.to_lowercase();
    !stop_words
        .iter()
        .any(|w| w.as_ref().trim().to_lowercase() == lowered)
}
