//! Keyword gate deciding whether a post is about layoffs at all.

/// True iff any keyword occurs as a substring of the lower-cased text.
///
/// Keywords are compared lower-case; blank keywords never match. A post
/// failing this gate is discarded regardless of any numbers it contains.
pub fn is_relevant<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    let lowered = text.to_lowercase();
    keywords.iter().any(|k| {
        let keyword = k.as_ref().trim();
        !keyword.is_empty() && lowered.contains(&keyword.to_lowercase())
    })
}
