//! Pure filter engine for the moderation listing
//!
//! Every evaluation runs against the full, immutable record set and derives
//! a fresh view: criteria are never cumulative across calls and the input
//! order is preserved.

use crate::models::{ContentRecord, FilterCriteria};
use crate::utils::dates::parse_iso_date;

/// Case-insensitive substring containment
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Title clause: empty means no constraint, otherwise a case-insensitive
/// substring match on the record name
fn matches_title(record: &ContentRecord, title: &str) -> bool {
    title.is_empty() || contains_ignore_case(&record.name, title)
}

/// Content clause: same contract as the title clause, on the description
fn matches_content(record: &ContentRecord, content: &str) -> bool {
    content.is_empty() || contains_ignore_case(&record.description, content)
}

/// Date clause: inclusive calendar-day range, active only when both bounds
/// are set. An unparseable bound deactivates the clause (the form's date
/// inputs cannot produce one); a record whose date cannot be parsed cannot
/// satisfy an active range.
fn matches_date_range(record: &ContentRecord, criteria: &FilterCriteria) -> bool {
    if !criteria.has_date_range() {
        return true;
    }
    let (Some(start), Some(end)) = (
        parse_iso_date(&criteria.start_date),
        parse_iso_date(&criteria.end_date),
    ) else {
        return true;
    };
    match parse_iso_date(&record.date) {
        Some(date) => start <= date && date <= end,
        None => false,
    }
}

/// Apply the conjunctive filter predicate to the full record set.
///
/// All clauses are ANDed; the tab selection never participates in the
/// predicate.
pub fn apply_filters(records: &[ContentRecord], criteria: &FilterCriteria) -> Vec<ContentRecord> {
    records
        .iter()
        .filter(|record| {
            matches_title(record, &criteria.title)
                && matches_content(record, &criteria.content)
                && matches_date_range(record, criteria)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DashboardTab;

    fn record(id: &str, name: &str, description: &str, date: &str) -> ContentRecord {
        ContentRecord {
            id: id.to_string(),
            name: name.to_string(),
            creator: format!("createur-{id}"),
            description: description.to_string(),
            contents: 0,
            views: 0,
            date: date.to_string(),
        }
    }

    fn sample_records() -> Vec<ContentRecord> {
        vec![
            record("1", "Maison Canne à Sucre", "Découvrez nos produits", "2025-05-9"),
            record("2", "jock", "mon la-a-la", "2025-05-09"),
            record("3", "le temps", "qui sait l'avenir", "2025-06-01"),
        ]
    }

    #[test]
    fn test_empty_criteria_returns_all_in_order() {
        let records = sample_records();
        let filtered = apply_filters(&records, &FilterCriteria::default());

        assert_eq!(filtered, records);
    }

    #[test]
    fn test_title_substring_is_case_insensitive() {
        let records = sample_records();
        let criteria = FilterCriteria {
            title: "canne".to_string(),
            ..Default::default()
        };

        let filtered = apply_filters(&records, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Maison Canne à Sucre");
    }

    #[test]
    fn test_content_matches_description() {
        let records = sample_records();
        let criteria = FilterCriteria {
            content: "LA-A-LA".to_string(),
            ..Default::default()
        };

        let filtered = apply_filters(&records, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    /// Range bounds are inclusive on both ends, calendar days only
    #[test]
    fn test_date_range_is_inclusive() {
        let records = sample_records();
        let criteria = FilterCriteria {
            start_date: "2025-05-01".to_string(),
            end_date: "2025-05-31".to_string(),
            ..Default::default()
        };

        let filtered = apply_filters(&records, &criteria);
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"], "2025-06-01 falls outside the range");

        let criteria = FilterCriteria {
            start_date: "2025-05-09".to_string(),
            end_date: "2025-05-09".to_string(),
            ..Default::default()
        };
        let filtered = apply_filters(&records, &criteria);
        assert_eq!(filtered.len(), 2, "bounds themselves are included");
    }

    /// A single date bound applies no constraint
    #[test]
    fn test_half_open_range_is_ignored() {
        let records = sample_records();
        let criteria = FilterCriteria {
            start_date: "2025-05-01".to_string(),
            ..Default::default()
        };

        assert_eq!(apply_filters(&records, &criteria).len(), records.len());
    }

    /// All clauses are conjunctive
    #[test]
    fn test_clauses_combine_with_and() {
        let records = sample_records();
        let criteria = FilterCriteria {
            title: "o".to_string(),
            content: "produits".to_string(),
            start_date: "2025-05-01".to_string(),
            end_date: "2025-05-31".to_string(),
            ..Default::default()
        };

        let filtered = apply_filters(&records, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    /// The tab never filters: both tabs see the same records
    #[test]
    fn test_tab_does_not_filter() {
        let records = sample_records();
        let validation = FilterCriteria {
            tab: DashboardTab::Validation,
            title: "jock".to_string(),
            ..Default::default()
        };
        let promotion = FilterCriteria {
            tab: DashboardTab::Promotion,
            ..validation.clone()
        };

        assert_eq!(
            apply_filters(&records, &validation),
            apply_filters(&records, &promotion)
        );
    }

    /// A record with an unparseable date cannot satisfy an active range
    #[test]
    fn test_unparseable_record_date_is_excluded_by_range() {
        let records = vec![record("9", "brouillon", "sans date", "n/a")];
        let criteria = FilterCriteria {
            start_date: "2025-05-01".to_string(),
            end_date: "2025-05-31".to_string(),
            ..Default::default()
        };

        assert!(apply_filters(&records, &criteria).is_empty());
        assert_eq!(
            apply_filters(&records, &FilterCriteria::default()).len(),
            1,
            "without an active range the record stays"
        );
    }

    /// Filtering derives a view; the source set is untouched and a later
    /// call starts from the original set again
    #[test]
    fn test_source_set_is_never_mutated() {
        let records = sample_records();
        let narrow = FilterCriteria {
            title: "jock".to_string(),
            ..Default::default()
        };

        let first = apply_filters(&records, &narrow);
        assert_eq!(first.len(), 1);

        let second = apply_filters(&records, &FilterCriteria::default());
        assert_eq!(second.len(), 3, "criteria are not cumulative");
        assert_eq!(records, sample_records());
    }
}
