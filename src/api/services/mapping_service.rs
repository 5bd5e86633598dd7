//! Detailed mapping analysis: which source records still lack a standard
//! concept, per CDM table.

use super::catalog::{
    DRUG_MAPPING_RATE, GASTRO_MAPPING_RATE, HIGHLIGHTED_CONDITIONS, IMPROVEMENT_TARGETS,
    MEASUREMENT_MAPPING_RATE, PROCEDURE_MAPPING_RATE, UNMAPPED_CONDITIONS, UNMAPPED_DRUGS,
    UNMAPPED_MEASUREMENTS, UNMAPPED_PROCEDURES,
};
use crate::models::{
    DataSnapshot, Guidance, ImprovementPlan, MappingAnalysis, MappingGap, MissingConcept,
    OmopTable, Priority, SyntheaTable, UnmappedRecord, UnmappedTableReport,
};

/// Patient numbers wrap around this many synthetic patients.
const PATIENT_POOL: usize = 30;

struct TableProfile {
    omop_table: OmopTable,
    source_table: SyntheaTable,
    /// Used when the source file was not found.
    default_total: u64,
    rate: f64,
    id_prefix: &'static str,
    patient_multiplier: usize,
}

const CONDITIONS: TableProfile = TableProfile {
    omop_table: OmopTable::ConditionOccurrence,
    source_table: SyntheaTable::Conditions,
    default_total: 54,
    rate: GASTRO_MAPPING_RATE,
    id_prefix: "COND",
    patient_multiplier: 3,
};

const DRUGS: TableProfile = TableProfile {
    omop_table: OmopTable::DrugExposure,
    source_table: SyntheaTable::Medications,
    default_total: 42,
    rate: DRUG_MAPPING_RATE,
    id_prefix: "MED",
    patient_multiplier: 2,
};

const PROCEDURES: TableProfile = TableProfile {
    omop_table: OmopTable::ProcedureOccurrence,
    source_table: SyntheaTable::Procedures,
    default_total: 38,
    rate: PROCEDURE_MAPPING_RATE,
    id_prefix: "PROC",
    patient_multiplier: 5,
};

const MEASUREMENTS: TableProfile = TableProfile {
    omop_table: OmopTable::Measurement,
    source_table: SyntheaTable::Observations,
    default_total: 28,
    rate: MEASUREMENT_MAPPING_RATE,
    id_prefix: "MEAS",
    patient_multiplier: 4,
};

const CONCLUSION: &str = "The automated framework already covers what USAGI does, without the \
    manual review. USAGI only pays off for very specific data that needs record-by-record review.";

/// Catalogue entry turned into a record, before numbering.
struct Entry {
    code: Option<String>,
    description: String,
    value: Option<String>,
    suggestion: String,
    gap: MappingGap,
    priority: Priority,
}

pub struct MappingService;

impl MappingService {
    pub fn build(snapshot: &DataSnapshot) -> MappingAnalysis {
        let conditions = Self::table_report(snapshot, &CONDITIONS, |i| {
            UNMAPPED_CONDITIONS.get(i - 1).map(|(code, desc, snomed)| Entry {
                code: Some(code.to_string()),
                description: desc.to_string(),
                value: None,
                suggestion: snomed.to_string(),
                gap: MappingGap::MissingSnomed,
                priority: if i <= 5 { Priority::High } else { Priority::Medium },
            })
        });

        let drugs = Self::table_report(snapshot, &DRUGS, |i| {
            UNMAPPED_DRUGS.get(i - 1).map(|(drug, atc, rxnorm)| Entry {
                code: Some(atc.to_string()),
                description: drug.to_string(),
                value: None,
                suggestion: rxnorm.to_string(),
                gap: Self::drug_gap(i),
                priority: if i == 5 { Priority::High } else { Priority::Medium },
            })
        });

        let procedures = Self::table_report(snapshot, &PROCEDURES, |i| {
            UNMAPPED_PROCEDURES.get(i - 1).map(|(cpt, desc, snomed)| Entry {
                code: Some(cpt.to_string()),
                description: desc.to_string(),
                value: None,
                suggestion: snomed.to_string(),
                gap: MappingGap::MissingSnomed,
                priority: Priority::Medium,
            })
        });

        let measurements = Self::table_report(snapshot, &MEASUREMENTS, |i| {
            UNMAPPED_MEASUREMENTS.get(i - 1).map(|(param, value, loinc)| Entry {
                code: None,
                description: param.to_string(),
                value: Some(value.to_string()),
                suggestion: loinc.to_string(),
                gap: MappingGap::MissingLoinc,
                priority: Priority::Medium,
            })
        });

        MappingAnalysis {
            gastro_rate: GASTRO_MAPPING_RATE,
            drug_rate: DRUG_MAPPING_RATE,
            missing_conditions: Self::missing_conditions(),
            missing_drugs: Self::missing_drugs(),
            tables: vec![conditions, drugs, procedures, measurements],
            actions: Self::actions(),
            tools: Self::tools(),
            improvement_plan: Self::improvement_plan(),
            framework_comparison: Self::framework_comparison(),
            conclusion: CONCLUSION.to_string(),
            next_steps: Self::next_steps(),
        }
    }

    /// `(mapped, unmapped)` for `total` source records at `rate` coverage.
    pub fn split_total(total: u64, rate: f64) -> (u64, u64) {
        let mapped = ((total as f64) * rate).floor() as u64;
        let mapped = mapped.min(total);
        (mapped, total - mapped)
    }

    /// `PAT_007` style synthetic patient reference for record `i`.
    pub fn patient_ref(i: usize, multiplier: usize) -> String {
        format!("PAT_{:03}", (i * multiplier) % PATIENT_POOL + 1)
    }

    /// Synthetic 2024 record date for record `i`.
    pub fn record_date(i: usize) -> String {
        format!("2024-0{}-{:02}", (i % 3) + 1, (i % 28) + 1)
    }

    fn drug_gap(i: usize) -> MappingGap {
        if i <= 4 {
            MappingGap::MissingRxNorm
        } else {
            MappingGap::MissingAtcAndRxNorm
        }
    }

    fn table_report<F>(
        snapshot: &DataSnapshot,
        profile: &TableProfile,
        entry: F,
    ) -> UnmappedTableReport
    where
        F: Fn(usize) -> Option<Entry>,
    {
        let source_total = snapshot
            .synthea
            .get_or(profile.source_table, profile.default_total);
        let (mapped, unmapped) = Self::split_total(source_total, profile.rate);
        let unmapped_percent = if source_total > 0 {
            unmapped as f64 / source_total as f64 * 100.0
        } else {
            0.0
        };

        let records = (1..=unmapped as usize)
            .map_while(|i| entry(i).map(|e| (i, e)))
            .map(|(i, e)| UnmappedRecord {
                id: format!("{}_{:03}", profile.id_prefix, i),
                code: e.code,
                description: e.description,
                value: e.value,
                patient: Self::patient_ref(i, profile.patient_multiplier),
                date: Self::record_date(i),
                gap: e.gap,
                suggestion: e.suggestion,
                priority: e.priority,
            })
            .collect();

        UnmappedTableReport {
            omop_table: profile.omop_table,
            source_table: profile.source_table,
            mapping_rate: profile.rate,
            source_total,
            mapped,
            unmapped,
            unmapped_percent,
            records,
        }
    }

    fn missing_conditions() -> Vec<MissingConcept> {
        UNMAPPED_CONDITIONS
            .iter()
            .take(HIGHLIGHTED_CONDITIONS)
            .map(|(code, desc, snomed)| MissingConcept {
                code: Some(code.to_string()),
                description: desc.to_string(),
                gap: MappingGap::MissingSnomed,
                suggestion: snomed.to_string(),
            })
            .collect()
    }

    fn missing_drugs() -> Vec<MissingConcept> {
        UNMAPPED_DRUGS
            .iter()
            .enumerate()
            .map(|(idx, (drug, atc, rxnorm))| MissingConcept {
                code: Some(atc.to_string()),
                description: drug.to_string(),
                gap: Self::drug_gap(idx + 1),
                suggestion: rxnorm.to_string(),
            })
            .collect()
    }

    fn guidance(title: &str, items: &[&str]) -> Guidance {
        Guidance {
            title: title.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn actions() -> Vec<Guidance> {
        vec![
            Self::guidance(
                "Gastroenterology",
                &[
                    "Use the SNOMED-CT vocabulary for gastroenterology",
                    "Automate ICD-10 to SNOMED mapping",
                    "Review Galicia-specific custom concepts",
                ],
            ),
            Self::guidance(
                "Drugs",
                &[
                    "Update the RxNorm vocabulary",
                    "Map ATC codes to RxNorm",
                    "Include Spain-specific medicines",
                ],
            ),
        ]
    }

    /// Coverage as a percentage with one decimal, e.g. `0.467` to `46.7`.
    pub fn percent(rate: f64) -> f64 {
        (rate * 1000.0).round() / 10.0
    }

    fn improvement_plan() -> ImprovementPlan {
        ImprovementPlan {
            labels: IMPROVEMENT_TARGETS.iter().map(|(label, _, _)| label.to_string()).collect(),
            current: IMPROVEMENT_TARGETS.iter().map(|(_, rate, _)| Self::percent(*rate)).collect(),
            target: IMPROVEMENT_TARGETS.iter().map(|(_, _, goal)| Self::percent(*goal)).collect(),
        }
    }

    fn tools() -> Vec<Guidance> {
        vec![
            Self::guidance(
                "ATHENA OHDSI",
                &[
                    "Standard OMOP vocabularies",
                    "Concept search",
                    "Automatic mappings",
                    "athena.ohdsi.org",
                ],
            ),
            Self::guidance(
                "USAGI (OHDSI)",
                &[
                    "Only when a manual mapping is needed",
                    "Similarity algorithms",
                    "Record-by-record validation",
                    "Not needed with the automated framework",
                ],
            ),
            Self::guidance(
                "Automated framework",
                &[
                    "Custom rules",
                    "Galicia-specific mapping",
                    "Automatic validation",
                    "Database integration",
                ],
            ),
        ]
    }

    fn framework_comparison() -> Vec<Guidance> {
        vec![
            Self::guidance(
                "USAGI (manual tool)",
                &[
                    "Concept-by-concept mapping",
                    "Hours or days of manual work",
                    "Prone to human error",
                    "Not specific to Galicia",
                    "No automatic database integration",
                    "Limited to small files",
                ],
            ),
            Self::guidance(
                "Automated framework",
                &[
                    "Automatic mapping",
                    "Processing in minutes",
                    "Automatic validation against the database",
                    "Tuned for Galicia",
                    "Direct PostgreSQL integration",
                    "Scales to thousands of patients",
                ],
            ),
        ]
    }

    fn next_steps() -> Vec<Guidance> {
        vec![
            Self::guidance(
                "High priority",
                &[
                    "Improve gastroenterology mapping (46.7% → 95%)",
                    "Complete the drug vocabulary (88% → 95%)",
                    "Optimise LOINC measurements (85% → 90%)",
                ],
            ),
            Self::guidance(
                "Technical steps",
                &[
                    "Download the OMOP vocabularies from Athena (athena.ohdsi.org)",
                    "Load CONCEPT.csv and CONCEPT_RELATIONSHIP.csv into the OMOP database",
                    "Add custom gastroenterology rules (e.g. K29.9 → 4247120)",
                    "Re-run the pipeline on the 30-patient test set and compare coverage",
                ],
            ),
        ]
    }
}
