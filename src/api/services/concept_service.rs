//! Concept mapping coverage by category.

use super::catalog::{
    DEMOGRAPHICS_MAPPING_RATE, DRUG_MAPPING_RATE, MEASUREMENT_MAPPING_RATE,
    PROCEDURE_MAPPING_RATE, VISIT_MAPPING_RATE,
};
use super::metrics_service::CONCEPT_TARGET;
use crate::models::{ConceptCategory, ConceptReport, CoverageStatus, DashboardMetrics};

pub struct ConceptService;

impl ConceptService {
    pub fn build(metrics: &DashboardMetrics) -> ConceptReport {
        let mapped_rate = metrics.concept_rate;

        let categories = [
            ("Demographics", "person", DEMOGRAPHICS_MAPPING_RATE, "Gender, race, ethnicity"),
            ("Gastroenterology", "conditions", mapped_rate, "ICD-10, SNOMED-CT gastro"),
            ("Visit types", "visits", VISIT_MAPPING_RATE, "Outpatient, inpatient"),
            ("Drugs", "drugs", DRUG_MAPPING_RATE, "ATC, RxNorm"),
            ("Procedures", "procedures", PROCEDURE_MAPPING_RATE, "CPT-4, SNOMED-CT"),
            ("Measurements", "measurements", MEASUREMENT_MAPPING_RATE, "LOINC, numeric values"),
        ]
        .into_iter()
        .map(|(category, table, rate, vocabularies)| ConceptCategory {
            category: category.to_string(),
            table: table.to_string(),
            mapped_rate: rate,
            status: Self::status(rate),
            vocabularies: vocabularies.to_string(),
        })
        .collect();

        ConceptReport {
            mapped_rate,
            unmapped_rate: 1.0 - mapped_rate,
            categories,
            strengths: [
                "Demographics: complete mapping (100%)",
                "Gastroenterology: specialty vocabulary in place",
                "Visits: excellent coverage",
                "Procedures: solid mapping",
            ]
            .map(String::from)
            .to_vec(),
            improvements: [
                "Drugs: extend the ATC vocabulary",
                "Measurements: improve LOINC mapping",
                "Observations: standardise free text",
                "Source concepts: validate against Athena",
            ]
            .map(String::from)
            .to_vec(),
        }
    }

    pub fn status(rate: f64) -> CoverageStatus {
        if rate >= CONCEPT_TARGET {
            CoverageStatus::Excellent
        } else {
            CoverageStatus::Review
        }
    }
}
