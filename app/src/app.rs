#![allow(non_snake_case)]

use dioxus::prelude::*;

use clinic_audit_core::view::{detail_title, ranking_rows};
use clinic_audit_core::{
    ClinicRecord, DashboardConfig, DashboardEvent, DashboardState, Dataset, Metric, ViewTab,
    load_dashboard_config_or_default, sorted_by_metric,
};

use crate::components::{ClinicCard, Footer, Header, RatingChart};

static CSS: Asset = asset!("/assets/styles.css");

const DATASET_JSON: &str = include_str!("../assets/clinics.json");
const CONFIG_TOML: &str = include_str!("../assets/dashboard.toml");

// ─────────────────────────────────────────────────────────────────────────────
// App Component
// ─────────────────────────────────────────────────────────────────────────────

pub fn App() -> Element {
    // Dataset and layout config are read once for the whole session
    let dataset = use_hook(|| {
        Dataset::from_json(DATASET_JSON).map_err(|err| {
            tracing::error!(error = %err, "failed to load audit dataset");
            err.to_string()
        })
    });
    let config = use_hook(|| load_dashboard_config_or_default(CONFIG_TOML));

    rsx! {
        link { rel: "stylesheet", href: CSS }
        link { rel: "stylesheet", href: "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css" }
        match dataset {
            Ok(dataset) => rsx! { Dashboard { dataset, config } },
            Err(message) => rsx! {
                div { class: "app app--error",
                    i { class: "fa-solid fa-triangle-exclamation" }
                    p { "Не удалось загрузить данные аудита" }
                    p { class: "hint", "{message}" }
                }
            },
        }
    }
}

/// Top-level controller: sole owner of the dashboard state
#[component]
fn Dashboard(dataset: Dataset, config: DashboardConfig) -> Element {
    let mut state = use_signal(DashboardState::new);

    // Viewport observation only drives re-render
    let mut viewport_width = use_signal(initial_viewport_width);
    let breakpoint = f64::from(config.mobile_breakpoint_px);
    let is_mobile = use_memo(move || viewport_width() < breakpoint);

    let current = state();
    let sorted = sorted_by_metric(dataset.clinics(), current.active_metric);
    let rows = ranking_rows(&sorted, &current, &config);
    let visible: Vec<ClinicRecord> = current
        .visible_clinics(&sorted)
        .into_iter()
        .cloned()
        .collect();
    let title = detail_title(&current);
    let active_tab = current.active_tab;

    let tab_class = |tab: ViewTab| {
        if active_tab == tab {
            "app__tab app__tab--active"
        } else {
            "app__tab"
        }
    };

    rsx! {
        div {
            class: "app",
            onresize: move |evt| {
                if let Ok(size) = evt.get_border_box_size() {
                    viewport_width.set(size.width);
                }
            },

            Header { meta: dataset.meta().clone() }

            div { class: "app__tabs",
                for tab in [ViewTab::Chart, ViewTab::List] {
                    button {
                        key: "{tab.label()}",
                        class: tab_class(tab),
                        onclick: move |_| state.write().apply(DashboardEvent::TabSelected(tab)),
                        "{tab.label()}"
                    }
                }
            }

            main { class: "app__main",
                div {
                    class: if active_tab == ViewTab::Chart { "app__chart app__chart--visible" } else { "app__chart" },
                    RatingChart {
                        rows,
                        metric: current.active_metric,
                        is_mobile: is_mobile(),
                        config: config.clone(),
                        on_metric_change: move |metric: Metric| {
                            state.write().apply(DashboardEvent::MetricChanged(metric));
                        },
                        on_clinic_click: move |id: String| {
                            state.write().apply(DashboardEvent::ChartClicked(id));
                        },
                    }
                }

                section {
                    class: if active_tab == ViewTab::List { "app__cards app__cards--visible" } else { "app__cards" },
                    h2 { class: "app__cards-title",
                        "{title}"
                        if current.has_selection() {
                            button {
                                class: "app__cards-reset",
                                onclick: move |_| state.write().apply(DashboardEvent::ResetSelection),
                                "Показать все"
                            }
                        }
                    }

                    if visible.is_empty() {
                        div { class: "app__cards-empty",
                            i { class: "fa-solid fa-inbox" }
                            p { "Нет клиник для отображения" }
                        }
                    }

                    for clinic in visible {
                        {
                            let toggle_id = clinic.id.clone();
                            let is_expanded = current.is_expanded(&clinic.id);
                            rsx! {
                                ClinicCard {
                                    key: "{clinic.id}",
                                    clinic: clinic.clone(),
                                    is_expanded,
                                    on_toggle: move |_| {
                                        state.write().apply(DashboardEvent::CardClicked(toggle_id.clone()));
                                    },
                                }
                            }
                        }
                    }
                }
            }

            Footer {}
        }
    }
}

/// Window width at startup; treated as desktop when unavailable
fn initial_viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::INFINITY)
}
