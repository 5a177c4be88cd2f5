//! Static audit dataset
//!
//! The dataset is parsed once at startup and never written. Loading fails
//! fast on malformed records so the views can assume a valid collection.

mod error;

pub use error::DatasetError;

use clinic_audit_types::{AuditMeta, ClinicRecord, ClinicsData};
use hashbrown::HashSet;

/// Validated, immutable dataset in original file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    clinics: Vec<ClinicRecord>,
    meta: AuditMeta,
}

impl Dataset {
    /// Parse and validate a `{ clinics, meta }` JSON document
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let data: ClinicsData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    pub fn from_data(data: ClinicsData) -> Result<Self, DatasetError> {
        validate(&data.clinics)?;

        if data.meta.total_clinics as usize != data.clinics.len() {
            tracing::warn!(
                declared = data.meta.total_clinics,
                actual = data.clinics.len(),
                "dataset meta clinic count does not match records"
            );
        }
        tracing::info!(clinics = data.clinics.len(), "loaded audit dataset");

        Ok(Self {
            clinics: data.clinics,
            meta: data.meta,
        })
    }

    pub fn clinics(&self) -> &[ClinicRecord] {
        &self.clinics
    }

    pub fn meta(&self) -> &AuditMeta {
        &self.meta
    }

    pub fn find(&self, id: &str) -> Option<&ClinicRecord> {
        self.clinics.iter().find(|c| c.id == id)
    }
}

fn validate(clinics: &[ClinicRecord]) -> Result<(), DatasetError> {
    let mut seen = HashSet::with_capacity(clinics.len());
    for clinic in clinics {
        if !seen.insert(clinic.id.as_str()) {
            return Err(DatasetError::DuplicateId {
                id: clinic.id.clone(),
            });
        }
        check_range(clinic, "functionality", clinic.functionality, 0.0, 100.0)?;
        check_range(clinic, "integrated", clinic.integrated, 0.0, 100.0)?;
        if let Some(app) = &clinic.app {
            check_range(clinic, "app.rating", app.rating, 0.0, 5.0)?;
            check_range(clinic, "app.negativePercent", app.negative_percent, 0.0, 100.0)?;
        }
    }
    Ok(())
}

fn check_range(
    clinic: &ClinicRecord,
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), DatasetError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(DatasetError::OutOfRange {
            id: clinic.id.clone(),
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> String {
        format!(
            r#"{{
                "id": "{id}", "name": "Клиника {id}", "city": "Москва", "country": "ru",
                "isBenchmark": false, "functionality": 80, "flesch": 35, "wcag": 12,
                "seo": "good", "integrated": 70, "stars": 4,
                "issues": {{ "functionality": [], "wcag": [], "flesch": [], "seo": [] }},
                "app": null
            }}"#
        )
    }

    fn document(records: &[String], total: usize) -> String {
        format!(
            r#"{{ "clinics": [{}], "meta": {{ "totalClinics": {total}, "totalReviews": 500,
                "checklistItems": 60, "auditDate": "2025-12" }} }}"#,
            records.join(",")
        )
    }

    #[test]
    fn loads_valid_dataset_in_file_order() {
        let json = document(&[record("b.example"), record("a.example")], 2);
        let dataset = Dataset::from_json(&json).unwrap();

        assert_eq!(dataset.clinics().len(), 2);
        assert_eq!(dataset.clinics()[0].id, "b.example");
        assert_eq!(dataset.meta().checklist_items, 60);
        assert!(dataset.find("a.example").is_some());
        assert!(dataset.find("c.example").is_none());
    }

    #[test]
    fn meta_mismatch_is_not_fatal() {
        let json = document(&[record("a.example")], 7);
        assert!(Dataset::from_json(&json).is_ok());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = document(&[record("a.example"), record("a.example")], 2);
        let err = Dataset::from_json(&json).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateId { ref id } if id == "a.example"));
    }

    #[test]
    fn rejects_out_of_range_app_rating() {
        let bad = record("a.example").replace(
            r#""app": null"#,
            r#""app": { "rating": 7.5, "reviewsCount": 10, "negativePercent": 5, "store": "app_store" }"#,
        );
        let err = Dataset::from_json(&document(&[bad], 1)).unwrap_err();
        assert!(matches!(err, DatasetError::OutOfRange { field: "app.rating", .. }));
    }

    #[test]
    fn rejects_functionality_above_hundred() {
        let bad = record("a.example").replace(r#""functionality": 80"#, r#""functionality": 120"#);
        let err = Dataset::from_json(&document(&[bad], 1)).unwrap_err();
        assert!(matches!(err, DatasetError::OutOfRange { field: "functionality", .. }));
    }

    #[test]
    fn rejects_unknown_enum_and_negative_wcag() {
        let unknown_seo = record("a.example").replace(r#""seo": "good""#, r#""seo": "great""#);
        assert!(matches!(
            Dataset::from_json(&document(&[unknown_seo], 1)),
            Err(DatasetError::Parse(_))
        ));

        let negative = record("a.example").replace(r#""wcag": 12"#, r#""wcag": -1"#);
        assert!(matches!(
            Dataset::from_json(&document(&[negative], 1)),
            Err(DatasetError::Parse(_))
        ));
    }

    #[test]
    fn bundled_dataset_is_valid() {
        let dataset = Dataset::from_json(include_str!("../../../app/assets/clinics.json")).unwrap();
        assert_eq!(dataset.clinics().len(), dataset.meta().total_clinics as usize);
        assert!(dataset.clinics().iter().any(|c| c.is_benchmark));
        assert!(dataset.clinics().iter().any(|c| c.app.is_none()));
    }

    #[test]
    fn empty_dataset_is_valid() {
        let dataset = Dataset::from_json(&document(&[], 0)).unwrap();
        assert!(dataset.clinics().is_empty());
    }
}
