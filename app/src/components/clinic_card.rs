//! Clinic Card Component
//!
//! Collapsible detail card. The header is always shown; the expanded panel
//! holds dimension stars, the profile radar, checklist counts and issue lists.

use std::f64::consts::PI;

use dioxus::prelude::*;

use clinic_audit_core::view::{ProfileAxis, clinic_profile, dimension_rows, issue_sections};
use clinic_audit_core::{ClinicRecord, integrated_stars};

const RADAR_WIDTH: f64 = 240.0;
const RADAR_HEIGHT: f64 = 150.0;
const RADAR_RADIUS: f64 = 52.0;
const RADAR_COLOR: &str = "#0693e3";

#[component]
pub fn ClinicCard(clinic: ClinicRecord, is_expanded: bool, on_toggle: EventHandler<()>) -> Element {
    let mut card_class = String::from("clinic-card");
    if is_expanded {
        card_class.push_str(" clinic-card--expanded");
    }
    if clinic.is_benchmark {
        card_class.push_str(" clinic-card--benchmark");
    }
    let chevron = if is_expanded { "fa-chevron-up" } else { "fa-chevron-down" };

    rsx! {
        div { class: "{card_class}",
            div {
                class: "clinic-card__header",
                role: "button",
                tabindex: "0",
                onclick: move |_| on_toggle.call(()),
                div { class: "clinic-card__main",
                    div { class: "clinic-card__title-row",
                        span { class: "clinic-card__name", "{clinic.name}" }
                        a {
                            class: "clinic-card__site-link",
                            href: "{clinic.site_url()}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            // Following the link must not toggle the card
                            onclick: move |evt: MouseEvent| evt.stop_propagation(),
                            "{clinic.id} "
                            i { class: "fa-solid fa-arrow-up-right-from-square" }
                        }
                        if clinic.is_benchmark {
                            span { class: "clinic-card__badge", "Бенчмарк" }
                        }
                    }
                    span { class: "clinic-card__city", "{clinic.city}" }
                }
                div { class: "clinic-card__score",
                    span { class: "clinic-card__score-value", "{clinic.integrated}" }
                    Stars { count: integrated_stars(clinic.integrated) }
                }
                i { class: "fa-solid {chevron} clinic-card__chevron" }
            }

            if is_expanded {
                ClinicDetails { clinic: clinic.clone() }
            }
        }
    }
}

#[component]
fn ClinicDetails(clinic: ClinicRecord) -> Element {
    let rows = dimension_rows(&clinic);
    let details = clinic.functionality_details;
    let sections: Vec<(&'static str, Vec<String>)> = issue_sections(&clinic)
        .into_iter()
        .map(|(title, items)| (title, items.to_vec()))
        .collect();

    rsx! {
        div { class: "clinic-card__details",
            div { class: "clinic-card__visualizations",
                div { class: "clinic-card__viz-section",
                    h4 { class: "clinic-card__viz-title", "Оценки по измерениям" }
                    div { class: "clinic-card__dimension-stars",
                        for row in rows {
                            div { class: "clinic-card__dimension-row", key: "{row.label}",
                                span { class: "clinic-card__dimension-label",
                                    "{row.label}"
                                    span {
                                        class: match row.modifier {
                                            Some(modifier) => format!("clinic-card__dimension-detail clinic-card__dimension-detail--{modifier}"),
                                            None => "clinic-card__dimension-detail".to_string(),
                                        },
                                        "{row.detail}"
                                    }
                                }
                                Stars { count: row.stars, small: true }
                            }
                        }
                    }
                }
                div { class: "clinic-card__viz-section",
                    h4 { class: "clinic-card__viz-title", "Профиль клиники" }
                    ProfileRadar { axes: clinic_profile(&clinic).to_vec() }
                }
            }

            if details.total() > 0 {
                div { class: "clinic-card__checklist",
                    span { class: "clinic-card__checklist-item clinic-card__checklist-item--yes",
                        i { class: "fa-solid fa-check" }
                        " {details.yes}"
                    }
                    span { class: "clinic-card__checklist-item clinic-card__checklist-item--warning",
                        i { class: "fa-solid fa-triangle-exclamation" }
                        " {details.warning}"
                    }
                    span { class: "clinic-card__checklist-item clinic-card__checklist-item--no",
                        i { class: "fa-solid fa-xmark" }
                        " {details.no}"
                    }
                }
            }

            if !sections.is_empty() {
                div { class: "clinic-card__issues",
                    for (title, items) in sections {
                        div { class: "clinic-card__issue-group", key: "{title}",
                            h5 { class: "clinic-card__issue-title", "{title}" }
                            ul { class: "clinic-card__issue-list",
                                for item in items {
                                    li { "{item}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Five filled-or-empty stars
#[component]
fn Stars(count: u8, #[props(default)] small: bool) -> Element {
    let size_class = if small { "clinic-card__stars clinic-card__stars--small" } else { "clinic-card__stars" };

    rsx! {
        span { class: "{size_class}",
            for n in 0..5u8 {
                i {
                    key: "{n}",
                    class: if n < count { "fa-solid fa-star clinic-card__star--filled" } else { "fa-regular fa-star clinic-card__star--empty" },
                }
            }
        }
    }
}

/// Radar polygon over the five profile axes
#[component]
fn ProfileRadar(axes: Vec<ProfileAxis>) -> Element {
    let cx = RADAR_WIDTH / 2.0;
    let cy = RADAR_HEIGHT / 2.0;
    let count = axes.len();
    let grid: Vec<String> = [0.25, 0.5, 0.75, 1.0]
        .iter()
        .map(|level| polygon_points(&vec![level * 100.0; count], cx, cy))
        .collect();
    let values: Vec<f64> = axes.iter().map(|a| a.value).collect();
    let shape = polygon_points(&values, cx, cy);
    let labels: Vec<(f64, f64, &'static str)> = axes
        .iter()
        .enumerate()
        .map(|(i, axis)| {
            let (x, y) = axis_point(i, count, RADAR_RADIUS + 14.0, cx, cy);
            (x, y, axis.label)
        })
        .collect();

    rsx! {
        div { class: "clinic-card__radar",
            svg {
                width: "100%",
                height: "{RADAR_HEIGHT}",
                view_box: "0 0 {RADAR_WIDTH} {RADAR_HEIGHT}",
                for points in grid {
                    polygon { points: "{points}", fill: "none", stroke: "#e0e0e0" }
                }
                polygon {
                    points: "{shape}",
                    fill: RADAR_COLOR,
                    fill_opacity: "0.3",
                    stroke: RADAR_COLOR,
                }
                for (x, y, label) in labels {
                    text {
                        x: "{x:.1}",
                        y: "{y:.1}",
                        font_size: "11",
                        text_anchor: "middle",
                        dominant_baseline: "middle",
                        "{label}"
                    }
                }
            }
        }
    }
}

/// Point on axis `index` of `count`, starting at twelve o'clock
fn axis_point(index: usize, count: usize, radius: f64, cx: f64, cy: f64) -> (f64, f64) {
    let angle = -PI / 2.0 + 2.0 * PI * index as f64 / count.max(1) as f64;
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// SVG `points` for values on a 0-100 scale (clamped)
fn polygon_points(values: &[f64], cx: f64, cy: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let radius = RADAR_RADIUS * value.clamp(0.0, 100.0) / 100.0;
            let (x, y) = axis_point(i, values.len(), radius, cx, cy);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}
