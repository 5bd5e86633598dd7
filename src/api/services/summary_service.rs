//! Executive summary of a transformation run.

use super::catalog::GASTRO_MAPPING_RATE;
use super::metrics_service::{MetricsService, PROCESSING_TIME_TARGET};
use crate::models::{
    Bottleneck, CountLine, DashboardMetrics, DataSnapshot, ExecutiveSummary, KeyAnswer, OmopTable,
    SummaryCard, SyntheaTable, Tone, format_percent,
};

pub struct SummaryService;

impl SummaryService {
    pub fn build(
        snapshot: &DataSnapshot,
        metrics: &DashboardMetrics,
        specialty: &str,
    ) -> ExecutiveSummary {
        let inputs: Vec<CountLine> = SyntheaTable::ALL
            .iter()
            .map(|&table| CountLine {
                table: table.name().to_string(),
                label: table.label().to_string(),
                count: snapshot.synthea.get(table),
            })
            .collect();
        let outputs: Vec<CountLine> = OmopTable::ALL
            .iter()
            .map(|&table| CountLine {
                table: table.name().to_string(),
                label: table.name().to_string(),
                count: snapshot.omop.get(table),
            })
            .collect();

        ExecutiveSummary {
            cards: Self::cards(metrics, specialty),
            bottleneck: Self::bottleneck(),
            synthea_total: inputs.iter().map(|line| line.count).sum(),
            inputs,
            omop_total: outputs.iter().map(|line| line.count).sum(),
            outputs,
            answers: Self::answers(metrics),
        }
    }

    fn cards(metrics: &DashboardMetrics, specialty: &str) -> Vec<SummaryCard> {
        let success_tone = if MetricsService::meets_success_target(metrics) {
            Tone::Good
        } else {
            Tone::Warning
        };
        let time_tone = if MetricsService::meets_time_target(metrics) {
            Tone::Good
        } else {
            Tone::Warning
        };
        let (db_value, db_tone) = if metrics.db_connected {
            ("Connected", Tone::Good)
        } else {
            ("Disconnected", Tone::Critical)
        };

        vec![
            SummaryCard {
                title: "Patients".to_string(),
                value: metrics.total_patients.to_string(),
                caption: specialty.to_string(),
                tone: Tone::Neutral,
            },
            SummaryCard {
                title: "Success rate".to_string(),
                value: format_percent(metrics.success_rate),
                caption: "Target: ≥90%".to_string(),
                tone: success_tone,
            },
            SummaryCard {
                title: "Processing time".to_string(),
                value: metrics.processing_time_display(),
                caption: format!("Target: < {}min", (PROCESSING_TIME_TARGET / 60.0) as u64),
                tone: time_tone,
            },
            SummaryCard {
                title: "OMOP database".to_string(),
                value: db_value.to_string(),
                caption: "OMOP concepts".to_string(),
                tone: db_tone,
            },
        ]
    }

    fn bottleneck() -> Bottleneck {
        Bottleneck {
            area: "Gastroenterology mapping".to_string(),
            mapped_rate: GASTRO_MAPPING_RATE,
            unmapped_rate: 1.0 - GASTRO_MAPPING_RATE,
            cause: "OMOP vocabularies are incomplete for Spanish gastroenterology".to_string(),
            solution: "Automatic ICD-10 to SNOMED-CT mapping".to_string(),
        }
    }

    fn answers(metrics: &DashboardMetrics) -> Vec<KeyAnswer> {
        let success = format_percent(metrics.success_rate);
        let transformation = if MetricsService::meets_success_target(metrics) {
            KeyAnswer {
                question: "Did the transformation work?".to_string(),
                passed: true,
                headline: "Complete success".to_string(),
                detail: format!("The transformation succeeded with a {} success rate.", success),
                action: "Framework validated".to_string(),
            }
        } else {
            KeyAnswer {
                question: "Did the transformation work?".to_string(),
                passed: false,
                headline: "Partial success".to_string(),
                detail: format!("The transformation ran with a {} success rate.", success),
                action: "Review the pipeline logs".to_string(),
            }
        };

        let data_loss = if MetricsService::is_lossless(metrics) {
            KeyAnswer {
                question: "Was any data lost?".to_string(),
                passed: true,
                headline: "No losses".to_string(),
                detail: format!(
                    "All {} patients were transformed.",
                    metrics.total_patients
                ),
                action: "Integrity fully preserved".to_string(),
            }
        } else {
            KeyAnswer {
                question: "Was any data lost?".to_string(),
                passed: false,
                headline: "Check integrity".to_string(),
                detail: format!(
                    "{}/{} patients transformed.",
                    metrics.omop_persons, metrics.total_patients
                ),
                action: "Verify the mappings".to_string(),
            }
        };

        let concept = format_percent(metrics.concept_rate);
        let concepts = if MetricsService::meets_concept_target(metrics) {
            KeyAnswer {
                question: "Are the concepts valid?".to_string(),
                passed: true,
                headline: "Concepts valid".to_string(),
                detail: format!("{} of concepts validated against the OMOP database.", concept),
                action: "Ready for production".to_string(),
            }
        } else {
            KeyAnswer {
                question: "Are the concepts valid?".to_string(),
                passed: false,
                headline: "Check concepts".to_string(),
                detail: format!("Only {} of concepts validated.", concept),
                action: "Update the semantic mappings".to_string(),
            }
        };

        vec![transformation, data_loss, concepts]
    }
}
