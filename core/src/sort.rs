//! Ranking order for the active metric
//!
//! Every metric ranks descending by its value except WCAG, which ranks
//! ascending by the raw error count. Sorting is stable, so ties keep dataset
//! order.

use std::cmp::Ordering;

use clinic_audit_types::{ClinicRecord, Metric};

use crate::metrics::seo_value;

/// Ordering of `a` relative to `b` under `metric`; `Less` ranks first.
pub fn compare(a: &ClinicRecord, b: &ClinicRecord, metric: Metric) -> Ordering {
    match metric {
        Metric::Integrated => b.integrated.total_cmp(&a.integrated),
        Metric::Functionality => b.functionality.total_cmp(&a.functionality),
        Metric::Wcag => a.wcag.cmp(&b.wcag),
        Metric::Flesch => b.flesch.total_cmp(&a.flesch),
        Metric::Seo => seo_value(b.seo).total_cmp(&seo_value(a.seo)),
        Metric::App => app_rating(b).total_cmp(&app_rating(a)),
    }
}

fn app_rating(clinic: &ClinicRecord) -> f64 {
    clinic.app.as_ref().map_or(0.0, |a| a.rating)
}

/// Sort in place
pub fn sort_by_metric(clinics: &mut [ClinicRecord], metric: Metric) {
    clinics.sort_by(|a, b| compare(a, b, metric));
}

/// Sorted copy of `clinics`, leaving the dataset order untouched
pub fn sorted_by_metric(clinics: &[ClinicRecord], metric: Metric) -> Vec<ClinicRecord> {
    let mut sorted = clinics.to_vec();
    sort_by_metric(&mut sorted, metric);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::metric_value;
    use crate::metrics::test_support::{app, clinic};
    use clinic_audit_types::SeoStatus;

    fn ids(clinics: &[ClinicRecord]) -> Vec<&str> {
        clinics.iter().map(|c| c.id.as_str()).collect()
    }

    fn scenario() -> Vec<ClinicRecord> {
        let mut a = clinic("A");
        a.integrated = 90.0;
        a.wcag = 10;
        let mut b = clinic("B");
        b.integrated = 70.0;
        b.wcag = 2;
        vec![a, b]
    }

    #[test]
    fn integrated_descending() {
        assert_eq!(ids(&sorted_by_metric(&scenario(), Metric::Integrated)), ["A", "B"]);
    }

    #[test]
    fn wcag_ascending_by_raw_errors() {
        assert_eq!(ids(&sorted_by_metric(&scenario(), Metric::Wcag)), ["B", "A"]);
    }

    #[test]
    fn wcag_resort_ignores_previous_order() {
        let mut clinics = Vec::new();
        for (id, integrated, wcag) in [("x", 95.0, 30), ("y", 20.0, 1), ("z", 60.0, 12)] {
            let mut c = clinic(id);
            c.integrated = integrated;
            c.wcag = wcag;
            clinics.push(c);
        }
        sort_by_metric(&mut clinics, Metric::Integrated);
        assert_eq!(ids(&clinics), ["x", "z", "y"]);
        sort_by_metric(&mut clinics, Metric::Wcag);
        assert_eq!(clinics[0].id, "y");
    }

    #[test]
    fn wcag_order_matches_descending_normalized_value() {
        let mut clinics = Vec::new();
        for (id, wcag) in [("a", 40), ("b", 3), ("c", 75), ("d", 17)] {
            let mut c = clinic(id);
            c.wcag = wcag;
            clinics.push(c);
        }
        let sorted = sorted_by_metric(&clinics, Metric::Wcag);
        let values: Vec<f64> = sorted.iter().map(|c| metric_value(c, Metric::Wcag)).collect();
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn app_sorts_by_raw_rating_with_missing_as_zero() {
        let mut with_low = clinic("low");
        with_low.app = Some(app(1.5));
        let without = clinic("none");
        let mut with_high = clinic("high");
        with_high.app = Some(app(4.8));

        let sorted = sorted_by_metric(&[without, with_low, with_high], Metric::App);
        assert_eq!(ids(&sorted), ["high", "low", "none"]);
    }

    #[test]
    fn seo_sorts_by_ordinal() {
        let mut bad = clinic("bad");
        bad.seo = SeoStatus::Bad;
        let mut warn = clinic("warn");
        warn.seo = SeoStatus::Warning;
        let good = clinic("good");

        let sorted = sorted_by_metric(&[bad, warn, good], Metric::Seo);
        assert_eq!(ids(&sorted), ["good", "warn", "bad"]);
    }

    #[test]
    fn ties_keep_dataset_order() {
        let clinics: Vec<_> = ["p", "q", "r", "s"].into_iter().map(clinic).collect();
        for metric in Metric::all() {
            assert_eq!(ids(&sorted_by_metric(&clinics, *metric)), ["p", "q", "r", "s"]);
        }
    }

    #[test]
    fn nan_flesch_does_not_panic() {
        let mut odd = clinic("nan");
        odd.flesch = f64::NAN;
        let normal = clinic("ok");
        let sorted = sorted_by_metric(&[normal, odd], Metric::Flesch);
        assert_eq!(sorted.len(), 2);
    }
}
