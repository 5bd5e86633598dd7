//! Unit tests for the unmapped record analysis.

use omop_dashboard::models::{
    DataSnapshot, MappingGap, OmopTable, PipelineReport, Priority, SyntheaTable, TableCounts,
};
use omop_dashboard::services::MappingService;
use omop_dashboard::services::catalog::{GASTRO_MAPPING_RATE, UNMAPPED_CONDITIONS};

#[test]
fn test_split_total() {
    assert_eq!(MappingService::split_total(10, 0.5), (5, 5));
    assert_eq!(MappingService::split_total(0, 0.5), (0, 0));
    assert_eq!(MappingService::split_total(7, 1.0), (7, 0));
    assert_eq!(MappingService::split_total(54, GASTRO_MAPPING_RATE), (25, 29));
}

#[test]
fn test_synthetic_references() {
    assert_eq!(MappingService::patient_ref(1, 3), "PAT_004");
    assert_eq!(MappingService::patient_ref(10, 3), "PAT_001");
    assert_eq!(MappingService::record_date(1), "2024-02-02");
    assert_eq!(MappingService::record_date(3), "2024-01-04");
}

#[test]
fn test_defaults_when_files_missing() {
    let analysis = MappingService::build(&DataSnapshot::empty());
    assert_eq!(analysis.tables.len(), 4);

    let conditions = &analysis.tables[0];
    assert_eq!(conditions.omop_table, OmopTable::ConditionOccurrence);
    assert_eq!(conditions.source_total, 54);
    assert_eq!(conditions.mapped, 25);
    assert_eq!(conditions.unmapped, 29);
    // Records are capped by the catalogue of known gaps
    assert_eq!(conditions.records.len(), UNMAPPED_CONDITIONS.len());

    let drugs = &analysis.tables[1];
    assert_eq!(drugs.source_total, 42);
    assert_eq!(drugs.unmapped, 6);
    assert_eq!(drugs.records.len(), 5);

    let procedures = &analysis.tables[2];
    assert_eq!(procedures.source_total, 38);
    assert_eq!(procedures.records.len(), 3);

    let measurements = &analysis.tables[3];
    assert_eq!(measurements.source_table, SyntheaTable::Observations);
    assert_eq!(measurements.source_total, 28);
    assert_eq!(measurements.records.len(), 4);
    assert!(measurements.records.iter().all(|r| r.code.is_none() && r.value.is_some()));
}

#[test]
fn test_records_follow_unmapped_count() {
    let mut synthea = TableCounts::new();
    synthea.insert(SyntheaTable::Conditions, 10);
    let snapshot = DataSnapshot::new(synthea, TableCounts::new(), PipelineReport::empty());

    let conditions = &MappingService::build(&snapshot).tables[0];
    assert_eq!(conditions.source_total, 10);
    assert_eq!(conditions.mapped, 4);
    assert_eq!(conditions.unmapped, 6);
    assert_eq!(conditions.records.len(), 6);

    let first = &conditions.records[0];
    assert_eq!(first.id, "COND_001");
    assert_eq!(first.code.as_deref(), Some("K29.9"));
    assert_eq!(first.patient, "PAT_004");
    assert_eq!(first.gap, MappingGap::MissingSnomed);
    assert_eq!(first.priority, Priority::High);
    assert_eq!(conditions.records[5].priority, Priority::Medium);
}

#[test]
fn test_empty_source_table() {
    let mut synthea = TableCounts::new();
    synthea.insert(SyntheaTable::Medications, 0);
    let snapshot = DataSnapshot::new(synthea, TableCounts::new(), PipelineReport::empty());

    let drugs = &MappingService::build(&snapshot).tables[1];
    assert_eq!(drugs.source_total, 0);
    assert_eq!(drugs.unmapped, 0);
    assert_eq!(drugs.unmapped_percent, 0.0);
    assert!(drugs.records.is_empty());
}

#[test]
fn test_drug_gaps_and_priorities() {
    let analysis = MappingService::build(&DataSnapshot::empty());

    let gaps: Vec<MappingGap> = analysis.missing_drugs.iter().map(|d| d.gap).collect();
    assert_eq!(
        gaps,
        vec![
            MappingGap::MissingRxNorm,
            MappingGap::MissingRxNorm,
            MappingGap::MissingRxNorm,
            MappingGap::MissingRxNorm,
            MappingGap::MissingAtcAndRxNorm,
        ]
    );
    assert_eq!(MappingGap::MissingAtcAndRxNorm.label(), "No ATC or RxNorm");

    let drugs = &analysis.tables[1];
    assert_eq!(drugs.records[4].priority, Priority::High);
    assert_eq!(drugs.records[0].priority, Priority::Medium);
    assert_eq!(drugs.records[0].id, "MED_001");
}

#[test]
fn test_highlights_and_guidance() {
    let analysis = MappingService::build(&DataSnapshot::empty());

    assert_eq!(analysis.missing_conditions.len(), 6);
    assert_eq!(analysis.gastro_rate, GASTRO_MAPPING_RATE);
    assert_eq!(analysis.actions.len(), 2);
    assert_eq!(analysis.next_steps.len(), 2);

    let titles: Vec<&str> = analysis.tools.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["ATHENA OHDSI", "USAGI (OHDSI)", "Automated framework"]);
    assert_eq!(analysis.framework_comparison.len(), 2);
    assert!(analysis.framework_comparison.iter().all(|g| g.items.len() == 6));
    assert!(analysis.conclusion.contains("USAGI"));
}

#[test]
fn test_improvement_plan() {
    let plan = MappingService::build(&DataSnapshot::empty()).improvement_plan;

    assert_eq!(
        plan.labels,
        vec![
            "Demographics",
            "Gastroenterology",
            "Visits",
            "Drugs",
            "Procedures",
            "Measurements"
        ]
    );
    assert_eq!(plan.current, vec![100.0, 46.7, 95.0, 88.0, 92.0, 85.0]);
    assert_eq!(plan.target, vec![100.0, 95.0, 98.0, 95.0, 95.0, 90.0]);
    assert!(plan.current.iter().zip(&plan.target).all(|(c, t)| c <= t));
}

#[test]
fn test_percent_rounds_to_one_decimal() {
    assert_eq!(MappingService::percent(GASTRO_MAPPING_RATE), 46.7);
    assert_eq!(MappingService::percent(0.9), 90.0);
    assert_eq!(MappingService::percent(1.0), 100.0);
}
