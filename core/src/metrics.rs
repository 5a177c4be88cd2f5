//! Metric value resolution
//!
//! Maps a clinic record and a ranking metric to one comparable 0-100 value.
//! Every metric is normalized so that higher is better before it reaches the
//! chart, and one colour table applies to all of them.

use clinic_audit_types::{ClinicApp, ClinicRecord, ColorBucket, Metric, SeoStatus};

/// Display points lost per WCAG error
const WCAG_PENALTY_PER_ERROR: f64 = 2.0;

/// Multiplier taking a 0-5 store rating onto the 0-100 scale
const APP_RATING_SCALE: f64 = 20.0;

/// Resolved value for `metric`. Total: an absent app yields 0.
pub fn metric_value(clinic: &ClinicRecord, metric: Metric) -> f64 {
    match metric {
        Metric::Integrated => clinic.integrated,
        Metric::Functionality => clinic.functionality,
        Metric::Wcag => accessibility_value(clinic.wcag),
        Metric::Flesch => clinic.flesch,
        Metric::Seo => seo_value(clinic.seo),
        Metric::App => app_value(clinic.app.as_ref()),
    }
}

/// `100 - errors * 2`, saturating at 0 from 50 errors upward
pub fn accessibility_value(wcag_errors: u32) -> f64 {
    (100.0 - f64::from(wcag_errors) * WCAG_PENALTY_PER_ERROR).max(0.0)
}

pub fn seo_value(seo: SeoStatus) -> f64 {
    match seo {
        SeoStatus::Good => 100.0,
        SeoStatus::Warning => 50.0,
        SeoStatus::Bad => 0.0,
    }
}

pub fn app_value(app: Option<&ClinicApp>) -> f64 {
    app.map_or(0.0, |a| a.rating * APP_RATING_SCALE)
}

/// Colour band for an already-resolved value.
///
/// Thresholds are shared by every metric, WCAG included.
pub fn color_of(value: f64) -> ColorBucket {
    if value >= 70.0 {
        ColorBucket::Excellent
    } else if value >= 50.0 {
        ColorBucket::Good
    } else if value >= 30.0 {
        ColorBucket::Fair
    } else {
        ColorBucket::Poor
    }
}

/// Resolve and bucket in one step
pub fn metric_color(clinic: &ClinicRecord, metric: Metric) -> ColorBucket {
    color_of(metric_value(clinic, metric))
}

#[cfg(test)]
pub(crate) mod test_support {
    use clinic_audit_types::{
        AppStore, ClinicApp, ClinicIssues, ClinicRecord, Country, FunctionalityDetails, SeoStatus,
    };

    /// Minimal clinic with neutral scores; tests override the fields they need
    pub fn clinic(id: &str) -> ClinicRecord {
        ClinicRecord {
            id: id.to_string(),
            name: format!("Clinic {id}"),
            city: "Москва".to_string(),
            country: Country::Ru,
            is_benchmark: false,
            functionality: 50.0,
            functionality_details: FunctionalityDetails::default(),
            flesch: 50.0,
            wcag: 10,
            seo: SeoStatus::Good,
            integrated: 50.0,
            stars: 3,
            issues: ClinicIssues::default(),
            app: None,
        }
    }

    pub fn app(rating: f64) -> ClinicApp {
        ClinicApp {
            rating,
            reviews_count: 100,
            negative_percent: 10.0,
            store: AppStore::AppStore,
        }
    }
}
