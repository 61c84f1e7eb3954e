//! Property-based tests for the dashboard filter and its debounce
//!
//! This module covers the two behaviors the moderation listing depends on:
//!
//! # Test Strategy
//!
//! ## 1. Property-Based Tests
//! Core filter behaviors under random inputs:
//! - Empty criteria matching the full record set
//! - Substring matching on title and content
//! - Case-insensitive matching
//! - Non-matching criteria rejection
//! - Results staying a subset of the source, in source order
//!
//! ## 2. Concrete Scenario Tests
//! Realistic moderation queries against a sample record set shaped like
//! the shipped catalog: single-record title hits, accent and case
//! handling, inclusive date bounds, half-open ranges, criteria
//! conjunction and the cosmetic tab.
//!
//! ## 3. Debounce Tests
//! The generation counter that cancels pending evaluations. The helper
//! mirrors the generation handling in dashboard.rs: a keystroke claims
//! the next generation before sleeping, and its wakeup applies only
//! when no newer generation was claimed meanwhile.

use proptest::prelude::*;

use crate::models::{ContentRecord, DashboardTab, FilterCriteria};
use crate::utils::filter::apply_filters;

fn record(
    id: &str,
    name: &str,
    creator: &str,
    description: &str,
    contents: u32,
    views: u32,
    date: &str,
) -> ContentRecord {
    ContentRecord {
        id: id.to_string(),
        name: name.to_string(),
        creator: creator.to_string(),
        description: description.to_string(),
        contents,
        views,
        date: date.to_string(),
    }
}

/// Sample records shaped like the shipped moderation set
fn sample_records() -> Vec<ContentRecord> {
    vec![
        record(
            "1",
            "Maison Canne à Sucre",
            "Kekeli canne à sucre",
            "La maison CANNE À SUCRE est disponible pour mettre de la douceur dans vos visuels",
            8,
            0,
            "2025-05-9",
        ),
        record("2", "jock", "etoilevida", "mon la-a-la", 1, 0, "2025-05-9"),
        record("3", "le temps", "Smileys", "Le temps qui passe et nous façonne", 1, 0, "2025-05-9"),
        record("4", "CONSEIL", "SEMEKONAWO", "DIEU D'ABORD", 0, 0, "2025-05-9"),
        record(
            "5",
            "motivation personnel",
            "KAGNALE",
            "qui sait l'avenir",
            0,
            0,
            "2025-05-9",
        ),
        record("6", "Honoré le frick", "Honoré le frick", "now time", 0, 0, "2025-05-9"),
        record("7", "Lala", "BALINGA", "Lucas", 2, 0, "2025-04-28"),
    ]
}

fn title_criteria(title: &str) -> FilterCriteria {
    FilterCriteria {
        title: title.to_string(),
        ..FilterCriteria::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Filter accuracy properties
    // ============================================================================

    proptest! {
        /// Property: Empty criteria return every record
        ///
        /// With no constraint active, filtering must be the identity on
        /// the record list.
        #[test]
        fn prop_empty_criteria_matches_all(
            names in proptest::collection::vec("[a-zA-Z0-9 ]{1,30}", 0..20),
        ) {
            let records: Vec<ContentRecord> = names
                .iter()
                .enumerate()
                .map(|(i, name)| record(&i.to_string(), name, "createur", "texte", 0, 0, "2025-05-09"))
                .collect();

            let results = apply_filters(&records, &FilterCriteria::default());
            prop_assert_eq!(results, records, "empty criteria should keep every record");
        }

        /// Property: A title containing the query matches
        #[test]
        fn prop_title_substring_matches(
            prefix in "[a-zA-Z]{0,8}",
            query in "[a-zA-Z]{1,8}",
            suffix in "[a-zA-Z]{0,8}",
        ) {
            let name = format!("{}{}{}", prefix, query, suffix);
            let records = vec![record("1", &name, "createur", "texte", 0, 0, "2025-05-09")];

            let results = apply_filters(&records, &title_criteria(&query));
            prop_assert_eq!(results.len(), 1, "title containing the query should match");
        }

        /// Property: Title matching ignores case
        #[test]
        fn prop_title_matching_is_case_insensitive(
            query in "[a-z]{2,8}",
        ) {
            let name = format!("Avant {} Après", query);
            let records = vec![record("1", &name, "createur", "texte", 0, 0, "2025-05-09")];

            let lower = apply_filters(&records, &title_criteria(&query));
            let upper = apply_filters(&records, &title_criteria(&query.to_uppercase()));
            prop_assert_eq!(lower.len(), upper.len(), "case should not affect matching");
            prop_assert_eq!(lower.len(), 1);
        }

        /// Property: A query absent from the title excludes the record
        #[test]
        fn prop_non_matching_title_excluded(
            name in "abc[a-z]{1,10}",
            query in "xyz[a-z]{1,10}",
        ) {
            prop_assume!(!name.to_lowercase().contains(&query.to_lowercase()));

            let records = vec![record("1", &name, "createur", "texte", 0, 0, "2025-05-09")];
            let results = apply_filters(&records, &title_criteria(&query));
            prop_assert!(results.is_empty(), "non-matching query should exclude the record");
        }

        /// Property: Results are a subset of the source, in source order
        #[test]
        fn prop_results_subset_in_source_order(
            query in "[a-zA-Z]{0,4}",
        ) {
            let records = sample_records();
            let results = apply_filters(&records, &title_criteria(&query));

            prop_assert!(results.len() <= records.len());

            let mut source_ids = records.iter().map(|r| r.id.as_str());
            for matched in &results {
                prop_assert!(
                    source_ids.any(|id| id == matched.id),
                    "results must follow the source order"
                );
            }
        }
    }

    // ============================================================================
    // Concrete moderation scenarios
    // ============================================================================

    #[test]
    fn test_title_search_finds_single_record() {
        let records = sample_records();
        let results = apply_filters(&records, &title_criteria("canne"));

        assert_eq!(results.len(), 1, "only one title contains 'canne'");
        assert_eq!(results[0].id, "1");
    }

    #[test]
    fn test_content_search_ignores_case() {
        let records = sample_records();
        let criteria = FilterCriteria {
            content: "LA-A-LA".to_string(),
            ..FilterCriteria::default()
        };

        let results = apply_filters(&records, &criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "2", "description 'mon la-a-la' should match");
    }

    #[test]
    fn test_date_range_bounds_are_inclusive() {
        let records = sample_records();
        let criteria = FilterCriteria {
            start_date: "2025-05-09".to_string(),
            end_date: "2025-05-09".to_string(),
            ..FilterCriteria::default()
        };

        let results = apply_filters(&records, &criteria);
        // Six records carry the boundary date, record 7 is older
        assert_eq!(results.len(), 6);
        assert!(results.iter().all(|r| r.id != "7"));
    }

    #[test]
    fn test_half_open_date_range_is_inert() {
        let records = sample_records();
        let criteria = FilterCriteria {
            start_date: "2025-05-01".to_string(),
            ..FilterCriteria::default()
        };

        let results = apply_filters(&records, &criteria);
        assert_eq!(results.len(), records.len(), "a lone bound should not constrain");
    }

    #[test]
    fn test_criteria_combine_conjunctively() {
        let records = sample_records();
        let criteria = FilterCriteria {
            title: "le".to_string(),
            content: "temps".to_string(),
            ..FilterCriteria::default()
        };

        let results = apply_filters(&records, &criteria);
        assert_eq!(results.len(), 1, "both clauses must hold");
        assert_eq!(results[0].id, "3");
    }

    #[test]
    fn test_tab_does_not_affect_matching() {
        let records = sample_records();
        let validation = FilterCriteria {
            title: "l".to_string(),
            tab: DashboardTab::Validation,
            ..FilterCriteria::default()
        };
        let promotion = FilterCriteria {
            tab: DashboardTab::Promotion,
            ..validation.clone()
        };

        assert_eq!(
            apply_filters(&records, &validation),
            apply_filters(&records, &promotion),
            "the tab is cosmetic"
        );
    }

    #[test]
    fn test_relaxed_criteria_restore_hidden_records() {
        let records = sample_records();

        let narrowed = apply_filters(&records, &title_criteria("canne"));
        assert_eq!(narrowed.len(), 1);

        // Filtering always runs over the original set, never the narrowed one
        let restored = apply_filters(&records, &FilterCriteria::default());
        assert_eq!(restored, records);
    }

    #[test]
    fn test_no_match_yields_empty_results() {
        let records = sample_records();
        let results = apply_filters(&records, &title_criteria("introuvable"));

        assert!(results.is_empty());
    }

    // ============================================================================
    // Debounce generation counter
    // ============================================================================

    mod debounce {
        use std::sync::atomic::{AtomicU64, Ordering};
        use std::sync::{Arc, Mutex};
        use std::time::Duration;

        use super::*;

        /// Mirrors the generation handling in dashboard.rs: sleep out the
        /// debounce window, then apply only if this claim is still the
        /// newest one.
        async fn debounced_evaluation(
            generation: Arc<AtomicU64>,
            scheduled: u64,
            window: Duration,
            records: Vec<ContentRecord>,
            criteria: FilterCriteria,
            applied: Arc<Mutex<Vec<Vec<ContentRecord>>>>,
        ) {
            tokio::time::sleep(window).await;

            if generation.load(Ordering::SeqCst) != scheduled {
                return;
            }
            let mut applied = applied.lock().unwrap();
            applied.push(apply_filters(&records, &criteria));
        }

        /// A keystroke arriving inside the window cancels the pending
        /// evaluation; only the newest claim lands.
        #[tokio::test]
        async fn test_new_keystroke_cancels_pending_evaluation() {
            let generation = Arc::new(AtomicU64::new(0));
            let applied = Arc::new(Mutex::new(Vec::new()));
            let records = sample_records();

            let first = generation.fetch_add(1, Ordering::SeqCst) + 1;
            let first_task = tokio::spawn(debounced_evaluation(
                generation.clone(),
                first,
                Duration::from_millis(40),
                records.clone(),
                title_criteria("cann"),
                applied.clone(),
            ));

            // Second keystroke before the first window elapses
            tokio::time::sleep(Duration::from_millis(10)).await;
            let second = generation.fetch_add(1, Ordering::SeqCst) + 1;
            let second_task = tokio::spawn(debounced_evaluation(
                generation.clone(),
                second,
                Duration::from_millis(40),
                records.clone(),
                title_criteria("canne"),
                applied.clone(),
            ));

            first_task.await.unwrap();
            second_task.await.unwrap();

            let applied = applied.lock().unwrap();
            assert_eq!(applied.len(), 1, "the superseded evaluation must not land");
            assert_eq!(applied[0].len(), 1);
            assert_eq!(applied[0][0].id, "1");
        }

        /// A burst of keystrokes applies exactly the final criteria
        #[tokio::test]
        async fn test_rapid_keystrokes_apply_only_final_criteria() {
            let generation = Arc::new(AtomicU64::new(0));
            let applied = Arc::new(Mutex::new(Vec::new()));
            let records = sample_records();

            let mut tasks = Vec::new();
            for query in ["t", "te", "temps"] {
                let scheduled = generation.fetch_add(1, Ordering::SeqCst) + 1;
                tasks.push(tokio::spawn(debounced_evaluation(
                    generation.clone(),
                    scheduled,
                    Duration::from_millis(40),
                    records.clone(),
                    title_criteria(query),
                    applied.clone(),
                )));
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
            for task in tasks {
                task.await.unwrap();
            }

            let applied = applied.lock().unwrap();
            assert_eq!(applied.len(), 1, "only the last keystroke should evaluate");
            assert_eq!(applied[0].len(), 1);
            assert_eq!(applied[0][0].id, "3", "'le temps' is the only title match");
        }

        /// An undisturbed window applies normally
        #[tokio::test]
        async fn test_quiet_window_applies_evaluation() {
            let generation = Arc::new(AtomicU64::new(0));
            let applied = Arc::new(Mutex::new(Vec::new()));
            let records = sample_records();

            let scheduled = generation.fetch_add(1, Ordering::SeqCst) + 1;
            debounced_evaluation(
                generation.clone(),
                scheduled,
                Duration::from_millis(10),
                records.clone(),
                FilterCriteria::default(),
                applied.clone(),
            )
            .await;

            let applied = applied.lock().unwrap();
            assert_eq!(applied.len(), 1);
            assert_eq!(applied[0].len(), records.len());
        }
    }
}
