//! Unit tests for the Synthea vs OMOP table comparison.

use omop_dashboard::models::{
    DataSnapshot, Integrity, OmopTable, PipelineReport, SyntheaTable, TableCounts,
};
use omop_dashboard::services::ComparisonService;

fn full_snapshot() -> DataSnapshot {
    let synthea: TableCounts<SyntheaTable> = [
        (SyntheaTable::Patients, 30),
        (SyntheaTable::Encounters, 200),
        (SyntheaTable::Conditions, 54),
        (SyntheaTable::Medications, 42),
        (SyntheaTable::Procedures, 38),
        (SyntheaTable::Observations, 300),
        (SyntheaTable::Allergies, 12),
        (SyntheaTable::Organizations, 5),
        (SyntheaTable::Providers, 8),
    ]
    .into_iter()
    .collect();
    let omop: TableCounts<OmopTable> = [
        (OmopTable::Person, 30),
        (OmopTable::VisitOccurrence, 200),
        (OmopTable::ConditionOccurrence, 50),
        (OmopTable::DrugExposure, 42),
        (OmopTable::ProcedureOccurrence, 38),
        (OmopTable::Measurement, 180),
        (OmopTable::Observation, 132),
        (OmopTable::CareSite, 5),
        (OmopTable::Location, 5),
        (OmopTable::Provider, 8),
        (OmopTable::ObservationPeriod, 30),
    ]
    .into_iter()
    .collect();
    DataSnapshot::new(synthea, omop, PipelineReport::empty())
}

#[test]
fn test_rows_and_integrity() {
    let report = ComparisonService::build(&full_snapshot());
    assert_eq!(report.rows.len(), 10);

    let person = &report.rows[0];
    assert_eq!(person.source_table, "patients");
    assert_eq!(person.target_table, "person");
    assert_eq!(person.target_count, Some(30));
    assert_eq!(person.integrity, Integrity::Complete);

    let conditions = &report.rows[2];
    assert_eq!(conditions.target_count, Some(50));
    assert_eq!(conditions.integrity, Integrity::Review);

    let observations = &report.rows[5];
    assert_eq!(observations.target_table, "measurement + observation");
    assert_eq!(observations.target_count, Some(312));
    assert_eq!(observations.integrity, Integrity::Split);

    let organizations = &report.rows[6];
    assert_eq!(organizations.target_table, "care_site + location");
    assert_eq!(organizations.target_count, Some(10));

    let periods = &report.rows[8];
    assert_eq!(periods.source_table, "patients (periods)");
    assert_eq!(periods.target_table, "observation_period");
    assert_eq!(periods.integrity, Integrity::Complete);

    let allergies = &report.rows[9];
    assert_eq!(allergies.source_count, 12);
    assert_eq!(allergies.target_count, None);
    assert_eq!(
        allergies.target_note.as_deref(),
        Some("Included in observation")
    );
    assert_eq!(allergies.integrity, Integrity::Transformed);
}

#[test]
fn test_chart_and_efficiency() {
    let report = ComparisonService::build(&full_snapshot());

    assert_eq!(
        report.chart.labels,
        vec![
            "Patients",
            "Encounters",
            "Conditions",
            "Medications",
            "Procedures"
        ]
    );
    assert_eq!(report.chart.synthea, vec![30, 200, 54, 42, 38]);
    assert_eq!(report.chart.omop, vec![30, 200, 50, 42, 38]);
    assert_eq!(report.synthea_total, 364);
    assert_eq!(report.omop_total, 360);

    let efficiency = report.efficiency.unwrap();
    assert!((efficiency - 360.0 / 364.0 * 100.0).abs() < 1e-9);
}

#[test]
fn test_empty_snapshot() {
    let report = ComparisonService::build(&DataSnapshot::empty());

    assert_eq!(report.rows.len(), 10);
    assert_eq!(report.efficiency, None);
    assert_eq!(report.synthea_total, 0);

    // Zero vs zero still matches one to one
    assert_eq!(report.rows[0].integrity, Integrity::Complete);
    assert_eq!(report.rows[5].integrity, Integrity::Review);
    assert_eq!(report.rows[9].integrity, Integrity::NoData);
}

#[test]
fn test_integrity_labels() {
    assert_eq!(Integrity::Complete.label(), "100%");
    assert_eq!(Integrity::NoData.label(), "No data");
    assert!(Integrity::Split.is_ok());
    assert!(!Integrity::Review.is_ok());
}
