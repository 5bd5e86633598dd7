//! Source (Synthea) and target (OMOP CDM) table catalogue.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// A table in the Synthea CSV export.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SyntheaTable {
    Patients,
    Encounters,
    Conditions,
    Medications,
    Procedures,
    Observations,
    Allergies,
    Organizations,
    Providers,
}

impl SyntheaTable {
    pub const ALL: [SyntheaTable; 9] = [
        SyntheaTable::Patients,
        SyntheaTable::Encounters,
        SyntheaTable::Conditions,
        SyntheaTable::Medications,
        SyntheaTable::Procedures,
        SyntheaTable::Observations,
        SyntheaTable::Allergies,
        SyntheaTable::Organizations,
        SyntheaTable::Providers,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SyntheaTable::Patients => "patients",
            SyntheaTable::Encounters => "encounters",
            SyntheaTable::Conditions => "conditions",
            SyntheaTable::Medications => "medications",
            SyntheaTable::Procedures => "procedures",
            SyntheaTable::Observations => "observations",
            SyntheaTable::Allergies => "allergies",
            SyntheaTable::Organizations => "organizations",
            SyntheaTable::Providers => "providers",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.csv", self.name())
    }

    /// Human readable label used on the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            SyntheaTable::Patients => "Patients",
            SyntheaTable::Encounters => "Encounters",
            SyntheaTable::Conditions => "Conditions",
            SyntheaTable::Medications => "Medications",
            SyntheaTable::Procedures => "Procedures",
            SyntheaTable::Observations => "Observations",
            SyntheaTable::Allergies => "Allergies",
            SyntheaTable::Organizations => "Organizations",
            SyntheaTable::Providers => "Providers",
        }
    }
}

/// A table of the OMOP common data model written by the pipeline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum OmopTable {
    Person,
    VisitOccurrence,
    ConditionOccurrence,
    DrugExposure,
    ProcedureOccurrence,
    Measurement,
    Observation,
    CareSite,
    Location,
    Provider,
    ObservationPeriod,
}

impl OmopTable {
    pub const ALL: [OmopTable; 11] = [
        OmopTable::Person,
        OmopTable::VisitOccurrence,
        OmopTable::ConditionOccurrence,
        OmopTable::DrugExposure,
        OmopTable::ProcedureOccurrence,
        OmopTable::Measurement,
        OmopTable::Observation,
        OmopTable::CareSite,
        OmopTable::Location,
        OmopTable::Provider,
        OmopTable::ObservationPeriod,
    ];

    /// CDM table name, which is also the label shown on the dashboard.
    pub fn name(self) -> &'static str {
        match self {
            OmopTable::Person => "person",
            OmopTable::VisitOccurrence => "visit_occurrence",
            OmopTable::ConditionOccurrence => "condition_occurrence",
            OmopTable::DrugExposure => "drug_exposure",
            OmopTable::ProcedureOccurrence => "procedure_occurrence",
            OmopTable::Measurement => "measurement",
            OmopTable::Observation => "observation",
            OmopTable::CareSite => "care_site",
            OmopTable::Location => "location",
            OmopTable::Provider => "provider",
            OmopTable::ObservationPeriod => "observation_period",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.csv", self.name())
    }
}

/// Row counts keyed by table.
///
/// A table missing from the map means its file was not found. A table
/// present with a count of zero was found but empty or unreadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableCounts<T: Ord> {
    counts: BTreeMap<T, u64>,
}

impl<T: Ord + Copy> TableCounts<T> {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, table: T, count: u64) {
        self.counts.insert(table, count);
    }

    /// Row count, 0 when the file was not found.
    pub fn get(&self, table: T) -> u64 {
        self.get_or(table, 0)
    }

    /// Row count, `default` only when the file was not found.
    pub fn get_or(&self, table: T, default: u64) -> u64 {
        self.counts.get(&table).copied().unwrap_or(default)
    }

    pub fn contains(&self, table: T) -> bool {
        self.counts.contains_key(&table)
    }

    /// Number of files that were found.
    pub fn present(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

impl<T: Ord + Copy> Default for TableCounts<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Copy> FromIterator<(T, u64)> for TableCounts<T> {
    fn from_iter<I: IntoIterator<Item = (T, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
