//! Side-by-side comparison of Synthea and OMOP row counts.

use crate::models::{
    ChartSeries, ComparisonReport, ComparisonRow, DataSnapshot, Integrity, OmopTable,
    SyntheaTable,
};

/// How the rows of a source table land in the CDM.
enum Target {
    One(OmopTable),
    Split(&'static [OmopTable]),
    /// Folded into another table without a count of its own.
    Folded { table: &'static str, note: &'static str },
}

const ROWS: [(SyntheaTable, Option<&str>, Target); 10] = [
    (SyntheaTable::Patients, None, Target::One(OmopTable::Person)),
    (SyntheaTable::Encounters, None, Target::One(OmopTable::VisitOccurrence)),
    (SyntheaTable::Conditions, None, Target::One(OmopTable::ConditionOccurrence)),
    (SyntheaTable::Medications, None, Target::One(OmopTable::DrugExposure)),
    (SyntheaTable::Procedures, None, Target::One(OmopTable::ProcedureOccurrence)),
    (
        SyntheaTable::Observations,
        None,
        Target::Split(&[OmopTable::Measurement, OmopTable::Observation]),
    ),
    (
        SyntheaTable::Organizations,
        None,
        Target::Split(&[OmopTable::CareSite, OmopTable::Location]),
    ),
    (SyntheaTable::Providers, None, Target::One(OmopTable::Provider)),
    (
        SyntheaTable::Patients,
        Some("patients (periods)"),
        Target::One(OmopTable::ObservationPeriod),
    ),
    (
        SyntheaTable::Allergies,
        None,
        Target::Folded {
            table: "observation (allergies)",
            note: "Included in observation",
        },
    ),
];

/// Pairs plotted on the comparison chart.
const CHART_PAIRS: [(SyntheaTable, OmopTable); 5] = [
    (SyntheaTable::Patients, OmopTable::Person),
    (SyntheaTable::Encounters, OmopTable::VisitOccurrence),
    (SyntheaTable::Conditions, OmopTable::ConditionOccurrence),
    (SyntheaTable::Medications, OmopTable::DrugExposure),
    (SyntheaTable::Procedures, OmopTable::ProcedureOccurrence),
];

pub struct ComparisonService;

impl ComparisonService {
    pub fn build(snapshot: &DataSnapshot) -> ComparisonReport {
        let rows = ROWS
            .iter()
            .map(|(source, source_label, target)| {
                Self::row(snapshot, *source, *source_label, target)
            })
            .collect();

        let chart = ChartSeries {
            labels: CHART_PAIRS
                .iter()
                .map(|(source, _)| source.label().to_string())
                .collect(),
            synthea: CHART_PAIRS
                .iter()
                .map(|(source, _)| snapshot.synthea.get(*source))
                .collect(),
            omop: CHART_PAIRS
                .iter()
                .map(|(_, target)| snapshot.omop.get(*target))
                .collect(),
        };

        let synthea_total: u64 = chart.synthea.iter().sum();
        let omop_total: u64 = chart.omop.iter().sum();
        let efficiency =
            (synthea_total > 0).then(|| omop_total as f64 / synthea_total as f64 * 100.0);

        ComparisonReport {
            rows,
            chart,
            synthea_total,
            omop_total,
            efficiency,
        }
    }

    fn row(
        snapshot: &DataSnapshot,
        source: SyntheaTable,
        source_label: Option<&str>,
        target: &Target,
    ) -> ComparisonRow {
        let source_count = snapshot.synthea.get(source);
        let source_table = source_label.unwrap_or(source.name()).to_string();

        match target {
            Target::One(table) => {
                let target_count = snapshot.omop.get(*table);
                ComparisonRow {
                    source_table,
                    source_count,
                    target_table: table.name().to_string(),
                    target_count: Some(target_count),
                    target_note: None,
                    integrity: if source_count == target_count {
                        Integrity::Complete
                    } else {
                        Integrity::Review
                    },
                }
            }
            Target::Split(tables) => {
                let target_count: u64 = tables.iter().map(|t| snapshot.omop.get(*t)).sum();
                let names: Vec<&str> = tables.iter().map(|t| t.name()).collect();
                ComparisonRow {
                    source_table,
                    source_count,
                    target_table: names.join(" + "),
                    target_count: Some(target_count),
                    target_note: None,
                    integrity: if target_count > 0 {
                        Integrity::Split
                    } else {
                        Integrity::Review
                    },
                }
            }
            Target::Folded { table, note } => ComparisonRow {
                source_table,
                source_count,
                target_table: table.to_string(),
                target_count: None,
                target_note: Some(note.to_string()),
                integrity: if source_count > 0 {
                    Integrity::Transformed
                } else {
                    Integrity::NoData
                },
            },
        }
    }
}
