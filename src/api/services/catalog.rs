//! Known mapping gaps of the current vocabulary set and the fixed coverage
//! figures the mapping review produced.

/// Mapping coverage of gastroenterology conditions (ICD-10 → SNOMED-CT).
pub const GASTRO_MAPPING_RATE: f64 = 0.467;
/// Mapping coverage of drugs (ATC → RxNorm).
pub const DRUG_MAPPING_RATE: f64 = 0.88;
/// Mapping coverage of procedures (CPT-4 → SNOMED-CT).
pub const PROCEDURE_MAPPING_RATE: f64 = 0.92;
/// Mapping coverage of measurements (LOINC).
pub const MEASUREMENT_MAPPING_RATE: f64 = 0.85;
pub const DEMOGRAPHICS_MAPPING_RATE: f64 = 1.0;
pub const VISIT_MAPPING_RATE: f64 = 0.95;

/// `(category, current coverage, target coverage)` for the improvement plan.
pub const IMPROVEMENT_TARGETS: [(&str, f64, f64); 6] = [
    ("Demographics", DEMOGRAPHICS_MAPPING_RATE, 1.0),
    ("Gastroenterology", GASTRO_MAPPING_RATE, 0.95),
    ("Visits", VISIT_MAPPING_RATE, 0.98),
    ("Drugs", DRUG_MAPPING_RATE, 0.95),
    ("Procedures", PROCEDURE_MAPPING_RATE, 0.95),
    ("Measurements", MEASUREMENT_MAPPING_RATE, 0.90),
];

/// `(ICD-10 code, description, suggested standard concept)`.
pub const UNMAPPED_CONDITIONS: [(&str, &str, &str); 10] = [
    ("K29.9", "Gastritis, unspecified", "SNOMED: 4247120"),
    ("K21.0", "Gastro-oesophageal reflux disease", "SNOMED: 235595009"),
    ("K59.0", "Constipation", "SNOMED: 14760008"),
    ("K92.2", "Gastrointestinal haemorrhage", "SNOMED: 74474003"),
    ("K25.9", "Gastric ulcer, unspecified", "SNOMED: 13200003"),
    ("K30", "Functional dyspepsia", "SNOMED: 162031009"),
    ("K50.9", "Crohn's disease", "SNOMED: 34000006"),
    ("K51.9", "Ulcerative colitis", "SNOMED: 64766004"),
    ("K80.2", "Gallstones", "SNOMED: 235919008"),
    ("K57.9", "Diverticulosis", "SNOMED: 307496006"),
];

/// How many of [`UNMAPPED_CONDITIONS`] are shown as highlights.
pub const HIGHLIGHTED_CONDITIONS: usize = 6;

/// `(drug, ATC code, suggested standard concept)`.
pub const UNMAPPED_DRUGS: [(&str, &str, &str); 5] = [
    ("Omeprazole 20mg", "A02BC01", "RxNorm: 7646"),
    ("Lansoprazole 30mg", "A02BC03", "RxNorm: 17128"),
    ("Mesalazine 500mg", "A07EC02", "RxNorm: 6759"),
    ("Pantoprazole 40mg", "A02BC02", "RxNorm: 40790"),
    ("Sucralfate 1g", "A02BX02", "RxNorm: 10156"),
];

/// `(CPT code, description, suggested standard concept)`.
pub const UNMAPPED_PROCEDURES: [(&str, &str, &str); 3] = [
    ("43239", "Upper GI endoscopy", "SNOMED: 423827005"),
    ("45378", "Diagnostic colonoscopy", "SNOMED: 73761001"),
    ("43235", "Oesophagogastroduodenoscopy", "SNOMED: 423827005"),
];

/// `(parameter, value, suggested standard concept)`.
pub const UNMAPPED_MEASUREMENTS: [(&str, &str, &str); 4] = [
    ("Haemoglobin", "12.5 g/dL", "LOINC: 718-7"),
    ("Serum ferritin", "45 ng/mL", "LOINC: 2276-4"),
    ("Vitamin B12", "180 pg/mL", "LOINC: 2132-9"),
    ("Creatinine", "1.1 mg/dL", "LOINC: 2160-0"),
];
