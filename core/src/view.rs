//! Presentation models derived from the dataset and [`DashboardState`]
//!
//! The frontend renders these without further computation.

use clinic_audit_types::{ClinicRecord, ColorBucket, DashboardConfig, Metric};

use crate::metrics::{accessibility_value, app_value, color_of, metric_value, seo_value};
use crate::selection::DashboardState;
use crate::stars::DimensionStars;

/// One bar in the ranking chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingRow {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub color: ColorBucket,
    pub is_benchmark: bool,
    pub is_selected: bool,
    /// 1.0, or the dimmed opacity when another clinic is selected
    pub opacity: f32,
    /// Bar length as a percentage of the largest value in the ranking
    pub width_percent: f64,
}

/// Ranking rows in `sorted` order for the active metric.
pub fn ranking_rows(
    sorted: &[ClinicRecord],
    state: &DashboardState,
    config: &DashboardConfig,
) -> Vec<RankingRow> {
    let metric = state.active_metric;
    let values: Vec<f64> = sorted.iter().map(|c| metric_value(c, metric)).collect();
    let data_max = values.iter().copied().fold(0.0_f64, f64::max);

    sorted
        .iter()
        .zip(values)
        .map(|(clinic, value)| {
            let is_selected = state.is_selected(&clinic.id);
            let opacity = if state.has_selection() && !is_selected {
                config.dimmed_opacity
            } else {
                1.0
            };
            RankingRow {
                id: clinic.id.clone(),
                name: clinic.name.clone(),
                value,
                color: color_of(value),
                is_benchmark: clinic.is_benchmark,
                is_selected,
                opacity,
                width_percent: bar_width_percent(value, data_max),
            }
        })
        .collect()
}

fn bar_width_percent(value: f64, data_max: f64) -> f64 {
    if data_max <= 0.0 {
        0.0
    } else {
        (value / data_max * 100.0).clamp(0.0, 100.0)
    }
}

/// Bar tooltip, e.g. "72: Интегральный балл"
pub fn tooltip(value: f64, metric: Metric) -> String {
    format!("{value:.0}: {}", metric.axis_label())
}

/// One axis of the clinic profile radar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileAxis {
    pub label: &'static str,
    pub value: f64,
}

/// Five-axis profile, each axis on a 0-100 scale except readability,
/// which is the raw Flesch score.
pub fn clinic_profile(clinic: &ClinicRecord) -> [ProfileAxis; 5] {
    [
        ProfileAxis {
            label: "Функциональность",
            value: clinic.functionality,
        },
        ProfileAxis {
            label: "Доступность",
            value: accessibility_value(clinic.wcag),
        },
        ProfileAxis {
            label: "Читабельность",
            value: clinic.flesch,
        },
        ProfileAxis {
            label: "SEO",
            value: seo_value(clinic.seo),
        },
        ProfileAxis {
            label: "Приложение",
            value: app_value(clinic.app.as_ref()),
        },
    ]
}

/// One star row in the expanded card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionRow {
    pub label: &'static str,
    pub detail: String,
    /// CSS modifier for the detail text (SEO verdict colouring)
    pub modifier: Option<&'static str>,
    pub stars: u8,
}

/// Star rows for the expanded card; the app row is omitted without an app
pub fn dimension_rows(clinic: &ClinicRecord) -> Vec<DimensionRow> {
    let stars = DimensionStars::for_clinic(clinic);
    let mut rows = vec![
        DimensionRow {
            label: "Функциональность",
            detail: format!("({}%)", clinic.functionality),
            modifier: None,
            stars: stars.functionality,
        },
        DimensionRow {
            label: "Доступность",
            detail: format!("({} ошибок)", clinic.wcag),
            modifier: None,
            stars: stars.accessibility,
        },
        DimensionRow {
            label: "Читабельность",
            detail: format!("(Flesch {})", clinic.flesch),
            modifier: None,
            stars: stars.readability,
        },
        DimensionRow {
            label: "SEO",
            detail: format!("({})", clinic.seo.label()),
            modifier: Some(clinic.seo.css_key()),
            stars: stars.seo,
        },
    ];

    if let (Some(app), Some(app_stars)) = (clinic.app.as_ref(), stars.app) {
        rows.push(DimensionRow {
            label: "Приложение",
            detail: format!("({:.1}★, {} отз.)", app.rating, app.reviews_count),
            modifier: None,
            stars: app_stars,
        });
    }
    rows
}

/// Non-empty issue lists with their dimension headings
pub fn issue_sections(clinic: &ClinicRecord) -> Vec<(&'static str, &[String])> {
    let issues = &clinic.issues;
    [
        ("Функциональность", issues.functionality.as_slice()),
        ("Доступность", issues.wcag.as_slice()),
        ("Читабельность", issues.flesch.as_slice()),
        ("SEO", issues.seo.as_slice()),
    ]
    .into_iter()
    .filter(|(_, list)| !list.is_empty())
    .collect()
}

/// Detail section heading
pub fn detail_title(state: &DashboardState) -> &'static str {
    if state.has_selection() {
        "Выбранная клиника"
    } else {
        "Детали по клиникам"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::test_support::{app, clinic};
    use crate::selection::DashboardEvent;
    use clinic_audit_types::SeoStatus;

    fn dataset() -> Vec<ClinicRecord> {
        let mut a = clinic("a");
        a.integrated = 80.0;
        let mut b = clinic("b");
        b.integrated = 40.0;
        b.is_benchmark = true;
        let mut c = clinic("c");
        c.integrated = 20.0;
        vec![a, b, c]
    }

    #[test]
    fn rows_without_selection_are_opaque() {
        let rows = ranking_rows(&dataset(), &DashboardState::new(), &DashboardConfig::default());
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.opacity == 1.0 && !r.is_selected));
        assert_eq!(rows[0].width_percent, 100.0);
        assert_eq!(rows[1].width_percent, 50.0);
        assert_eq!(rows[0].color, ColorBucket::Excellent);
        assert_eq!(rows[1].color, ColorBucket::Fair);
        assert_eq!(rows[2].color, ColorBucket::Poor);
    }

    #[test]
    fn selection_dims_other_rows() {
        let mut state = DashboardState::new();
        state.apply(DashboardEvent::ChartClicked("b".into()));
        let rows = ranking_rows(&dataset(), &state, &DashboardConfig::default());

        assert_eq!(rows[0].opacity, 0.4);
        assert_eq!(rows[1].opacity, 1.0);
        assert!(rows[1].is_selected);
        assert!(rows[1].is_benchmark);
        assert_eq!(rows[2].opacity, 0.4);
    }

    #[test]
    fn all_zero_values_have_zero_width() {
        let mut state = DashboardState::new();
        state.set_metric(Metric::App);
        let rows = ranking_rows(&dataset(), &state, &DashboardConfig::default());
        assert!(rows.iter().all(|r| r.value == 0.0 && r.width_percent == 0.0));
    }

    #[test]
    fn empty_ranking() {
        let rows = ranking_rows(&[], &DashboardState::new(), &DashboardConfig::default());
        assert!(rows.is_empty());
    }

    #[test]
    fn tooltip_rounds_value() {
        assert_eq!(tooltip(71.6, Metric::Integrated), "72: Интегральный балл");
    }

    #[test]
    fn profile_axes() {
        let mut c = clinic("p");
        c.functionality = 84.0;
        c.wcag = 60;
        c.flesch = 33.0;
        c.seo = SeoStatus::Warning;
        c.app = Some(app(4.0));

        let values: Vec<f64> = clinic_profile(&c).iter().map(|a| a.value).collect();
        assert_eq!(values, [84.0, 0.0, 33.0, 50.0, 80.0]);

        c.app = None;
        assert_eq!(clinic_profile(&c)[4].value, 0.0);
    }

    #[test]
    fn dimension_rows_omit_missing_app() {
        let mut c = clinic("d");
        assert_eq!(dimension_rows(&c).len(), 4);

        c.app = Some(app(4.3));
        let rows = dimension_rows(&c);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4].detail, "(4.3★, 100 отз.)");
    }

    #[test]
    fn dimension_row_details() {
        let mut c = clinic("d");
        c.functionality = 84.0;
        c.wcag = 12;
        c.flesch = 41.5;
        c.seo = SeoStatus::Bad;
        let rows = dimension_rows(&c);
        assert_eq!(rows[0].detail, "(84%)");
        assert_eq!(rows[1].detail, "(12 ошибок)");
        assert_eq!(rows[2].detail, "(Flesch 41.5)");
        assert_eq!(rows[3].detail, "(Критично)");
        assert_eq!(rows[3].modifier, Some("bad"));
    }

    #[test]
    fn issue_sections_skip_empty_lists() {
        let mut c = clinic("i");
        assert!(issue_sections(&c).is_empty());
        c.issues.wcag = vec!["Низкий контраст".to_string()];
        let sections = issue_sections(&c);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].0, "Доступность");
    }

    #[test]
    fn detail_title_follows_selection() {
        let mut state = DashboardState::new();
        assert_eq!(detail_title(&state), "Детали по клиникам");
        state.chart_click("a".into());
        assert_eq!(detail_title(&state), "Выбранная клиника");
    }
}
