//! Star ratings for the detail cards
//!
//! Two scales live here and they are not interchangeable:
//! - per-dimension stars, banded on the percentage of a dimension maximum
//! - integrated-score stars, with their own uneven cut points
//!
//! Neither matches the chart colour buckets in [`crate::metrics`].

use clinic_audit_types::ClinicRecord;

use crate::metrics::seo_value;

/// Upper bound of the WCAG error range mapped onto the star scale
pub const WCAG_STAR_MAX: f64 = 50.0;

/// Upper bound of a store rating
pub const APP_RATING_MAX: f64 = 5.0;

/// 1-5 stars for `value` as a share of `max`.
///
/// With `invert`, the share is `(max - value) / max`, so smaller values earn
/// more stars. Shares above 100% or below 0% clamp to the outer bands.
pub fn dimension_stars(value: f64, max: f64, invert: bool) -> u8 {
    if max <= 0.0 {
        return 1;
    }
    let percent = if invert {
        (max - value) / max * 100.0
    } else {
        value / max * 100.0
    };

    if percent >= 80.0 {
        5
    } else if percent >= 60.0 {
        4
    } else if percent >= 40.0 {
        3
    } else if percent >= 20.0 {
        2
    } else {
        1
    }
}

/// 1-5 stars for the composite score shown in the card header
pub fn integrated_stars(integrated: f64) -> u8 {
    if integrated >= 80.0 {
        5
    } else if integrated >= 60.0 {
        4
    } else if integrated >= 50.0 {
        3
    } else if integrated >= 30.0 {
        2
    } else {
        1
    }
}

/// Per-dimension stars of one clinic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionStars {
    pub functionality: u8,
    pub accessibility: u8,
    pub readability: u8,
    pub seo: u8,
    /// None when the clinic has no mobile app
    pub app: Option<u8>,
}

impl DimensionStars {
    pub fn for_clinic(clinic: &ClinicRecord) -> Self {
        Self {
            functionality: dimension_stars(clinic.functionality, 100.0, false),
            accessibility: dimension_stars(f64::from(clinic.wcag), WCAG_STAR_MAX, true),
            readability: dimension_stars(clinic.flesch, 100.0, false),
            seo: dimension_stars(seo_value(clinic.seo), 100.0, false),
            app: clinic
                .app
                .as_ref()
                .map(|a| dimension_stars(a.rating, APP_RATING_MAX, false)),
        }
    }
}
