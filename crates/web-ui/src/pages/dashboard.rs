//! Moderation dashboard: filter form plus content listing
//!
//! Filtering always runs over the full loaded record set, so relaxing a
//! criterion restores rows. Keystrokes are debounced; the pending
//! evaluation is cancelled whenever a newer keystroke arrives.

use dioxus::prelude::*;

use crate::components::{Button, EmptyState, Input, LoadingState};
use crate::hooks::{use_catalog_loader, use_toaster, CatalogContext};
use crate::models::{ContentRecord, DashboardTab, FilterCriteria};
use crate::utils::dates::format_long_date;
use crate::utils::filter::apply_filters;

/// Debounce window between a criteria keystroke and filter evaluation
const FILTER_DEBOUNCE_MS: u64 = 300;

/// Dashboard page at `/dashboard`
#[component]
pub fn DashboardPage() -> Element {
    let catalog = use_catalog_loader();
    let criteria = use_signal(FilterCriteria::default);
    let mut results = use_signal(|| None::<Vec<ContentRecord>>);
    let filter_generation = use_signal(|| 0u64);
    let mut toaster = use_toaster();

    // Seed the table with the full record set once loaded
    use_effect({
        let catalog = catalog.clone();
        move || {
            if results.read().is_none() {
                if let Some(records) = catalog.records() {
                    results.set(Some(records));
                }
            }
        }
    });

    let catalog_for_input = catalog.clone();
    let catalog_for_tab = catalog.clone();

    rsx! {
        div { class: "space-y-6",
            // Header
            div { class: "bg-white shadow rounded-lg",
                div { class: "px-4 py-5 sm:p-6",
                    h3 { class: "text-lg leading-6 font-medium text-gray-900",
                        "Gestion de Contenu"
                    }
                    p { class: "mt-1 text-sm text-gray-500",
                        "Filtrez et examinez les contenus publiés"
                    }
                }
            }

            FilterForm {
                criteria,
                on_input: move |_| {
                    schedule_filter_evaluation(
                        catalog_for_input.clone(),
                        criteria,
                        results,
                        filter_generation,
                    );
                },
                on_tab_change: {
                    let mut criteria = criteria;
                    move |tab| {
                        criteria.with_mut(|c| c.tab = tab);
                        evaluate_now(catalog_for_tab.clone(), criteria, results, filter_generation);
                    }
                },
            }

            LoadingState {
                loading: catalog.is_loading(),
                error: catalog.error(),
                has_data: results().is_some(),

                if let Some(rows) = results() {
                    ResultsTable {
                        records: rows,
                        on_view: move |record: ContentRecord| {
                            toaster.notify(
                                format!("Détails de {}", record.name),
                                format!(
                                    "Vous consultez les détails de {} créé par {}",
                                    record.name, record.creator
                                ),
                            );
                        },
                    }
                }
            }
        }
    }
}

/// Filter form: tab strip, title/content search and the date range
#[component]
fn FilterForm(
    criteria: Signal<FilterCriteria>,
    on_input: EventHandler<()>,
    on_tab_change: EventHandler<DashboardTab>,
) -> Element {
    let mut criteria = criteria;
    let active_tab = criteria.read().tab;

    rsx! {
        div { class: "bg-white shadow rounded-lg",
            div { class: "px-4 py-5 sm:p-6 space-y-4",
                // Tab strip, cosmetic but immediate
                div { class: "flex space-x-2",
                    for tab in [DashboardTab::Validation, DashboardTab::Promotion] {
                        button {
                            class: format!(
                                "px-4 py-2 text-sm font-medium rounded-md transition-colors {}",
                                if active_tab == tab {
                                    "bg-orange-600 text-white shadow-sm"
                                } else {
                                    "bg-gray-100 text-gray-700 hover:bg-gray-200"
                                }
                            ),
                            onclick: move |_| on_tab_change.call(tab),
                            "{tab.display_text()}"
                        }
                    }
                }

                div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4",
                    Input {
                        label: "Laala".to_string(),
                        value: criteria.read().title.clone(),
                        placeholder: "Rechercher par titre...".to_string(),
                        oninput: move |value: String| {
                            criteria.with_mut(|c| c.title = value);
                            on_input.call(());
                        },
                    }
                    Input {
                        label: "Contenue".to_string(),
                        value: criteria.read().content.clone(),
                        placeholder: "Rechercher par contenu...".to_string(),
                        oninput: move |value: String| {
                            criteria.with_mut(|c| c.content = value);
                            on_input.call(());
                        },
                    }
                    Input {
                        label: "Date Debut".to_string(),
                        input_type: "date".to_string(),
                        value: criteria.read().start_date.clone(),
                        oninput: move |value: String| {
                            criteria.with_mut(|c| c.start_date = value);
                            on_input.call(());
                        },
                    }
                    Input {
                        label: "Date fin".to_string(),
                        input_type: "date".to_string(),
                        value: criteria.read().end_date.clone(),
                        oninput: move |value: String| {
                            criteria.with_mut(|c| c.end_date = value);
                            on_input.call(());
                        },
                    }
                }
            }
        }
    }
}

/// Content listing with the per-row detail action
#[component]
fn ResultsTable(records: Vec<ContentRecord>, on_view: EventHandler<ContentRecord>) -> Element {
    if records.is_empty() {
        return rsx! {
            div { class: "bg-white shadow rounded-lg",
                EmptyState {
                    title: "Aucun contenu trouvé".to_string(),
                    message: Some("Essayez d'ajuster vos critères de recherche.".to_string()),
                }
            }
        };
    }

    rsx! {
        div { class: "bg-white shadow rounded-lg overflow-hidden",
            div { class: "overflow-x-auto",
                table { class: "min-w-full divide-y divide-gray-200",
                    thead { class: "bg-gray-50",
                        tr {
                            th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Nom" }
                            th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Createur" }
                            th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Description" }
                            th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Contenues" }
                            th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Vues" }
                            th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Date" }
                            th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Action" }
                        }
                    }
                    tbody { class: "bg-white divide-y divide-gray-200",
                        for record in records {
                            ResultRow { key: "{record.id}", record, on_view }
                        }
                    }
                }
            }
        }
    }
}

/// One listing row
#[component]
fn ResultRow(record: ContentRecord, on_view: EventHandler<ContentRecord>) -> Element {
    let view_record = record.clone();

    rsx! {
        tr { class: "hover:bg-gray-50",
            td { class: "px-4 py-3 text-sm font-medium text-gray-900", "{record.name}" }
            td { class: "px-4 py-3 text-sm text-gray-600", "{record.creator}" }
            td { class: "px-4 py-3 text-sm text-gray-600 max-w-xs truncate", "{record.description}" }
            td { class: "px-4 py-3 text-sm text-gray-900",
                "{record.contents}"
                if record.is_rich() {
                    span { class: "ml-1 text-orange-500", "✦" }
                }
            }
            td { class: "px-4 py-3 text-sm",
                if record.has_views() {
                    span { class: "px-2 py-0.5 rounded-full text-xs font-medium bg-green-100 text-green-800",
                        "{record.views}"
                    }
                } else {
                    span { class: "text-gray-500", "0" }
                }
            }
            td { class: "px-4 py-3 text-sm text-gray-600", {format_long_date(&record.date)} }
            td { class: "px-4 py-3 text-sm",
                Button {
                    variant: "secondary".to_string(),
                    size: "small".to_string(),
                    onclick: move |_| on_view.call(view_record.clone()),
                    "Voir"
                }
            }
        }
    }
}

/// Schedule a debounced filter evaluation.
///
/// Each call claims a new generation; the sleeping task re-checks the
/// counter on wakeup and discards itself when a newer keystroke claimed
/// a later one, so only the latest criteria ever reach the table.
fn schedule_filter_evaluation(
    catalog: CatalogContext,
    criteria: Signal<FilterCriteria>,
    mut results: Signal<Option<Vec<ContentRecord>>>,
    mut generation: Signal<u64>,
) {
    let scheduled = generation() + 1;
    generation.set(scheduled);

    spawn(async move {
        #[cfg(target_arch = "wasm32")]
        {
            gloo_timers::future::sleep(std::time::Duration::from_millis(FILTER_DEBOUNCE_MS)).await;
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tokio::time::sleep(tokio::time::Duration::from_millis(FILTER_DEBOUNCE_MS)).await;
        }

        if generation() != scheduled {
            web_sys::console::info_1(
                &format!("Filter evaluation {} superseded, discarding", scheduled).into(),
            );
            return;
        }

        if let Some(records) = catalog.records() {
            let matched = apply_filters(&records, &criteria.read());
            results.set(Some(matched));
        }
    });
}

/// Evaluate the current criteria immediately, cancelling any pending
/// debounced evaluation by claiming the next generation.
fn evaluate_now(
    catalog: CatalogContext,
    criteria: Signal<FilterCriteria>,
    mut results: Signal<Option<Vec<ContentRecord>>>,
    mut generation: Signal<u64>,
) {
    generation.set(generation() + 1);

    if let Some(records) = catalog.records() {
        let matched = apply_filters(&records, &criteria.read());
        results.set(Some(matched));
    }
}
