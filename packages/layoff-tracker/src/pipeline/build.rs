//! Turns one raw item into a candidate event, or says why it was skipped.

use chrono::NaiveDate;
use std::fmt;

use super::company::extract_company;
use super::date_gate::check_date;
use super::numbers::extract_count;
use super::relevance::is_relevant;
use crate::types::{LayoffEvent, RawItem, TrackerConfig};

/// Why an item did not become an event. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// No known date format matched
    UnparseableDate,
    /// Dated strictly before the cutoff
    BeforeCutoff,
    /// No relevance keyword in the text
    NotRelevant,
    /// Relevant, but no strictly positive headcount
    NoCount,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::UnparseableDate => "unparseable date",
            SkipReason::BeforeCutoff => "before cutoff",
            SkipReason::NotRelevant => "not relevant",
            SkipReason::NoCount => "no headcount",
        };
        f.write_str(s)
    }
}

/// Build an event from an item whose date has already passed the gate.
///
/// Relevance is checked first; number and company are extracted
/// independently afterwards. Pure function of its inputs.
pub fn build_event(
    item: RawItem,
    date: NaiveDate,
    config: &TrackerConfig,
) -> Result<LayoffEvent, SkipReason> {
    if !is_relevant(&item.text, &config.keywords) {
        return Err(SkipReason::NotRelevant);
    }

    let count = extract_count(&item.text).unwrap_or(0);
    if count == 0 {
        return Err(SkipReason::NoCount);
    }
    let company = extract_company(&item.text, &config.stop_words);

    Ok(LayoffEvent {
        id: item.id,
        date,
        company,
        count,
        text: item.text,
        link: item.link,
    })
}

/// Run the date gate, then the event builder.
pub fn evaluate(item: RawItem, config: &TrackerConfig) -> Result<LayoffEvent, SkipReason> {
    let date = check_date(&item.published_at, config.cutoff_date)?;
    build_event(item, date, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TrackerConfig {
        TrackerConfig::new().with_cutoff_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    fn item(text: &str, date: &str) -> RawItem {
        RawItem::from_permalink("https://x.com/E_Boeminghaus/status/1", text, date)
    }

    #[test]
    fn test_builds_event_from_relevant_post() {
        let event = evaluate(item("XYZ streicht 2.000 Stellen", "2025-02-01"), &config()).unwrap();

        assert_eq!(event.id, "https://x.com/E_Boeminghaus/status/1");
        assert_eq!(event.link, event.id);
        assert_eq!(event.date.to_string(), "2025-02-01");
        assert_eq!(event.company, "XYZ");
        assert_eq!(event.count, 2000);
        assert_eq!(event.text, "XYZ streicht 2.000 Stellen");
    }

    #[test]
    fn test_irrelevant_post_is_skipped_despite_number() {
        let result = evaluate(item("Bosch meldet 2.000 neue Patente", "2025-02-01"), &config());
        assert_eq!(result, Err(SkipReason::NotRelevant));
    }

    #[test]
    fn test_relevant_post_without_number_is_skipped() {
        let result = evaluate(item("Bosch kündigt Stellenabbau an", "2025-02-01"), &config());
        assert_eq!(result, Err(SkipReason::NoCount));
    }

    #[test]
    fn test_zero_headcount_is_skipped() {
        let result = evaluate(item("Bosch: 0 Stellen betroffen", "2025-02-01"), &config());
        assert_eq!(result, Err(SkipReason::NoCount));
    }

    #[test]
    fn test_date_gate_runs_before_relevance() {
        let result = evaluate(item("Foo streicht 100 Stellen", "Dec 31, 2024 · 8:00 AM UTC"), &config());
        assert_eq!(result, Err(SkipReason::BeforeCutoff));

        let result = evaluate(item("Foo streicht 100 Stellen", "irgendwann"), &config());
        assert_eq!(result, Err(SkipReason::UnparseableDate));
    }

    #[test]
    fn test_unknown_company_still_yields_event() {
        let event = evaluate(item("In 12 Werken: 900 Jobs weg", "2025-03-01"), &config()).unwrap();
        assert_eq!(event.company, "Werken");
        assert_eq!(event.count, 12);

        let event = evaluate(item("#jobs 40", "2025-03-01"), &config()).unwrap();
        assert_eq!(event.company, crate::types::event::UNKNOWN_COMPANY);
        assert_eq!(event.count, 40);
    }

    #[test]
    fn test_custom_keywords_replace_defaults() {
        let config = config().with_keywords(["layoffs"]);
        let result = evaluate(item("XYZ streicht 2.000 Stellen", "2025-02-01"), &config);
        assert_eq!(result, Err(SkipReason::NotRelevant));
    }
}
