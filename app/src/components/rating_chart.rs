//! Ranking Chart Component
//!
//! Horizontal bar ranking of all clinics for the selected metric. Bars are
//! plain SVG rects so benchmark entries can carry a dashed stroke.

use dioxus::prelude::*;

use clinic_audit_core::view::tooltip;
use clinic_audit_core::{ColorBucket, DashboardConfig, Metric, RankingRow};

/// Stroke around benchmark bars
const BENCHMARK_STROKE: &str = "#32373c";

#[component]
pub fn RatingChart(
    rows: Vec<RankingRow>,
    metric: Metric,
    is_mobile: bool,
    config: DashboardConfig,
    on_metric_change: EventHandler<Metric>,
    on_clinic_click: EventHandler<String>,
) -> Element {
    let height = config.chart_height_px(rows.len());
    let label_width = config.label_width(is_mobile);
    let bar_height = config.bar_row_height_px.saturating_sub(8).max(8);
    let right_margin = if is_mobile { 10 } else { 30 };

    rsx! {
        div { class: "rating-chart",
            div { class: "rating-chart__header",
                label { class: "rating-chart__label", r#for: "metric-select", "Метрика" }
                select {
                    id: "metric-select",
                    class: "rating-chart__select",
                    value: "{metric.config_key()}",
                    onchange: move |evt: FormEvent| {
                        if let Some(selected) = Metric::from_config_key(&evt.value()) {
                            on_metric_change.call(selected);
                        }
                    },
                    for option_metric in Metric::all() {
                        option {
                            key: "{option_metric.config_key()}",
                            value: "{option_metric.config_key()}",
                            selected: *option_metric == metric,
                            "{option_metric.label()}"
                        }
                    }
                }
            }

            div {
                class: "rating-chart__container",
                style: "min-height: {height}px; padding-right: {right_margin}px;",
                for row in rows.iter() {
                    {
                        let label_id = row.id.clone();
                        let bar_id = row.id.clone();
                        let tip = tooltip(row.value, metric);
                        let (stroke, stroke_width, dash) = if row.is_benchmark {
                            (BENCHMARK_STROKE, "2", "4 2")
                        } else {
                            ("none", "0", "none")
                        };

                        rsx! {
                            div {
                                key: "{row.id}",
                                class: if row.is_selected { "rating-chart__row rating-chart__row--selected" } else { "rating-chart__row" },
                                style: "height: {config.bar_row_height_px}px;",
                                span {
                                    class: "rating-chart__name",
                                    style: "width: {label_width}px;",
                                    onclick: move |_| on_clinic_click.call(label_id.clone()),
                                    "{row.name}"
                                }
                                div { class: "rating-chart__track", title: "{tip}",
                                    svg {
                                        width: "100%",
                                        height: "{bar_height}",
                                        rect {
                                            class: "rating-chart__bar",
                                            x: "1",
                                            y: "1",
                                            rx: "4",
                                            width: "{row.width_percent}%",
                                            height: "{bar_height.saturating_sub(2)}",
                                            fill: "{row.color.hex()}",
                                            opacity: "{row.opacity}",
                                            stroke: "{stroke}",
                                            stroke_width: "{stroke_width}",
                                            stroke_dasharray: "{dash}",
                                            onclick: move |_| on_clinic_click.call(bar_id.clone()),
                                        }
                                    }
                                }
                                span { class: "rating-chart__value", "{row.value:.0}" }
                            }
                        }
                    }
                }
            }

            div { class: "rating-chart__legend",
                for bucket in ColorBucket::all() {
                    span { class: "rating-chart__legend-item",
                        span {
                            class: "rating-chart__legend-color",
                            style: "background: {bucket.hex()}",
                        }
                        "{bucket.legend_label()}"
                    }
                }
            }
        }
    }
}
