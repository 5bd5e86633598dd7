//! Run report written by the transformation pipeline.
//!
//! The report is kept as raw JSON: the pipeline adds fields between
//! releases and the dashboard only reads a handful of them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineReport {
    /// File name the report was read from, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    /// Report body. `Value::Null` when no report was loaded.
    #[serde(default)]
    pub body: Value,
}

impl PipelineReport {
    pub fn new(source_file: impl Into<String>, body: Value) -> Self {
        Self {
            source_file: Some(source_file.into()),
            body,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// True when no report was found or the report is `{}`.
    pub fn is_empty(&self) -> bool {
        match &self.body {
            Value::Object(map) => map.is_empty(),
            _ => true,
        }
    }

    fn section(&self, key: &str) -> Option<&Value> {
        self.body.as_object().and_then(|map| map.get(key))
    }

    pub fn has_validation_results(&self) -> bool {
        self.section("validation_results").is_some()
    }

    pub fn has_phase_performance(&self) -> bool {
        self.section("phase_performance").is_some()
    }

    /// `validation_results.summary.overall_success_rate`.
    pub fn overall_success_rate(&self) -> Option<f64> {
        self.section("validation_results")?
            .get("summary")?
            .get("overall_success_rate")?
            .as_f64()
    }

    /// Every `mapped_rate` found under `validation_results.concept_coverage`.
    ///
    /// Entries that are not objects or carry no numeric `mapped_rate` are skipped.
    pub fn concept_mapped_rates(&self) -> Vec<f64> {
        let Some(coverage) = self
            .section("validation_results")
            .and_then(|v| v.get("concept_coverage"))
            .and_then(Value::as_object)
        else {
            return Vec::new();
        };

        coverage
            .values()
            .filter_map(|stats| stats.as_object())
            .filter_map(|stats| stats.get("mapped_rate").and_then(Value::as_f64))
            .collect()
    }

    /// `duration_seconds` of every phase under `phase_performance`, 0 when missing.
    pub fn phase_durations(&self) -> Vec<f64> {
        let Some(phases) = self.section("phase_performance").and_then(Value::as_object) else {
            return Vec::new();
        };

        phases
            .values()
            .map(|phase| {
                phase
                    .get("duration_seconds")
                    .and_then(Value::as_f64)
                    .unwrap_or(0.0)
            })
            .collect()
    }
}
