//! Quality - Checklists, specifications, inspections, PDIR, releases, revalidation

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::{last_two_years, last_year, CollectionSpec, Synthesize};
use crate::domain::errors::DomainError;
use crate::domain::services::Sampler;

const MEASUREMENT_UNITS: &[&str] = &["mm", "cm", "kg", "°C", "pH", "N/A"];
const RESULT_STATUSES: &[&str] = &["Pass", "Fail", "Marginal"];
const OVERALL_STATUSES: &[&str] = &["Passed", "Failed", "Conditional Pass"];
const DEFINITION_STATUSES: &[&str] = &["Active", "Inactive", "Under Review"];

pub fn collections() -> Vec<CollectionSpec> {
    vec![
        CollectionSpec::of::<InspectionChecklist>("inspection_checklists", 100),
        CollectionSpec::of::<StandardSpecification>("standard_specifications", 200),
        CollectionSpec::of::<MaterialInspection>("material_inspections", 1000),
        CollectionSpec::of::<PdirEntry>("pdir_entries", 500),
        CollectionSpec::of::<BatchRelease>("batch_releases", 1000),
        CollectionSpec::of::<MaterialRevalidation>("material_revalidation", 200),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Checkpoint {
    pub point_id: Uuid,
    pub checkpoint_name: String,
    pub description: String,
    pub acceptance_criteria: String,
    pub measurement_unit: String,
    pub is_mandatory: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectionChecklist {
    pub checklist_id: Uuid,
    pub checklist_code: String,
    pub checklist_name: String,
    pub category: String,
    pub description: String,
    /// 3 to 8 checkpoints
    pub checkpoints: Vec<Checkpoint>,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for InspectionChecklist {
    fn synthesize(s: &mut Sampler) -> Self {
        let checkpoint_count = s.int(3, 8);
        Self {
            checklist_id: s.uuid(),
            checklist_code: s.code("CHK", 8),
            checklist_name: format!("{} Inspection Checklist", s.title_word()),
            category: s.choice_str(&["Raw Material", "In-Process", "Final Product", "Packaging"]),
            description: s.text(200),
            checkpoints: (0..checkpoint_count)
                .map(|_| Checkpoint {
                    point_id: s.uuid(),
                    checkpoint_name: format!("{} Check", s.title_word()),
                    description: s.text(100),
                    acceptance_criteria: s.text(100),
                    measurement_unit: s.choice_str(MEASUREMENT_UNITS),
                    is_mandatory: s.coin(),
                })
                .collect(),
            status: s.choice_str(DEFINITION_STATUSES),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpecParameter {
    pub parameter_id: Uuid,
    pub parameter_name: String,
    pub unit: String,
    pub min_value: f64,
    pub max_value: f64,
    pub target_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandardSpecification {
    pub specification_id: Uuid,
    pub specification_code: String,
    pub specification_name: String,
    pub category: String,
    pub description: String,
    /// 2 to 5 parameters
    pub parameters: Vec<SpecParameter>,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for StandardSpecification {
    fn synthesize(s: &mut Sampler) -> Self {
        let parameter_count = s.int(2, 5);
        Self {
            specification_id: s.uuid(),
            specification_code: s.code("SPEC", 8),
            specification_name: format!("{} Specification", s.title_word()),
            category: s.choice_str(&["Physical", "Chemical", "Microbiological", "Visual"]),
            description: s.text(200),
            parameters: (0..parameter_count)
                .map(|_| SpecParameter {
                    parameter_id: s.uuid(),
                    parameter_name: s.word(),
                    unit: s.choice_str(MEASUREMENT_UNITS),
                    min_value: s.amount(0.0, 100.0),
                    max_value: s.amount(100.0, 200.0),
                    target_value: s.amount(50.0, 150.0),
                })
                .collect(),
            status: s.choice_str(DEFINITION_STATUSES),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

/// One measured checkpoint of an inspection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectionResult {
    pub checkpoint_id: Uuid,
    pub measured_value: f64,
    pub status: String,
    pub remarks: String,
}

fn inspection_results(s: &mut Sampler, min: u32, max: u32) -> Vec<InspectionResult> {
    let count = s.int(min, max);
    (0..count)
        .map(|_| InspectionResult {
            checkpoint_id: s.uuid(),
            measured_value: s.amount(0.0, 200.0),
            status: s.choice_str(RESULT_STATUSES),
            remarks: s.text(100),
        })
        .collect()
}

/// Incoming material inspection (MRN)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialInspection {
    pub inspection_id: String,
    pub material_code: String,
    pub batch_number: String,
    pub inspection_date: DateTime<Utc>,
    pub checklist_id: Uuid,
    pub specification_id: Uuid,
    pub inspector_id: String,
    pub results: Vec<InspectionResult>,
    pub overall_status: String,
    pub remarks: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for MaterialInspection {
    fn synthesize(s: &mut Sampler) -> Self {
        let inspection_date = last_year(s);
        Self {
            inspection_id: s.code("MRN", 8),
            material_code: s.code("RM", 8),
            batch_number: s.code("B", 6),
            inspection_date,
            checklist_id: s.uuid(),
            specification_id: s.uuid(),
            inspector_id: s.code("INS", 6),
            results: inspection_results(s, 3, 8),
            overall_status: s.choice_str(OVERALL_STATUSES),
            remarks: s.text(200),
            created_by: s.person(),
            created_date: inspection_date,
            last_updated: s.plus_days(inspection_date, 1, 5),
        }
    }
}

/// Pre-dispatch inspection report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PdirEntry {
    pub pdir_id: String,
    pub product_code: String,
    pub batch_number: String,
    pub inspection_date: DateTime<Utc>,
    pub checklist_id: Uuid,
    pub specification_id: Uuid,
    pub inspector_id: String,
    pub results: Vec<InspectionResult>,
    pub overall_status: String,
    pub remarks: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for PdirEntry {
    fn synthesize(s: &mut Sampler) -> Self {
        let inspection_date = last_year(s);
        Self {
            pdir_id: s.code("PDIR", 8),
            product_code: s.code("PRD", 8),
            batch_number: s.code("B", 6),
            inspection_date,
            checklist_id: s.uuid(),
            specification_id: s.uuid(),
            inspector_id: s.code("INS", 6),
            results: inspection_results(s, 3, 8),
            overall_status: s.choice_str(OVERALL_STATUSES),
            remarks: s.text(200),
            created_by: s.person(),
            created_date: inspection_date,
            last_updated: s.plus_days(inspection_date, 1, 5),
        }
    }
}

/// Product codes and batch numbers already present in a PDIR collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdirSeed {
    pub product_codes: BTreeSet<String>,
    pub batch_numbers: BTreeSet<String>,
}

impl PdirSeed {
    pub fn from_entries(entries: &[PdirEntry]) -> Self {
        Self {
            product_codes: entries.iter().map(|e| e.product_code.clone()).collect(),
            batch_numbers: entries.iter().map(|e| e.batch_number.clone()).collect(),
        }
    }

    /// Read the two fields from raw documents, skipping documents without them
    pub fn from_values(values: &[Value]) -> Self {
        let field = |v: &Value, key: &str| v.get(key).and_then(Value::as_str).map(String::from);
        Self {
            product_codes: values.iter().filter_map(|v| field(v, "product_code")).collect(),
            batch_numbers: values.iter().filter_map(|v| field(v, "batch_number")).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.product_codes.is_empty() || self.batch_numbers.is_empty()
    }
}

/// Draw `count` PDIR entries that reuse existing product codes and batch
/// numbers. Results carry 2 to 5 checkpoints; the overall status is Passed
/// or Failed.
pub fn extend_pdir_entries(
    s: &mut Sampler,
    seed: &PdirSeed,
    count: usize,
) -> Result<Vec<PdirEntry>, DomainError> {
    if seed.is_empty() {
        return Err(DomainError::Validation(
            "PDIR extension needs at least one existing entry with product_code and batch_number"
                .to_string(),
        ));
    }

    let products: Vec<&String> = seed.product_codes.iter().collect();
    let batches: Vec<&String> = seed.batch_numbers.iter().collect();
    let now = s.now();

    let entries = (0..count)
        .map(|_| {
            let results_count = s.int(2u32, 5);
            PdirEntry {
                pdir_id: s.code("PDIR", 8),
                product_code: s.pick(&products).to_string(),
                batch_number: s.pick(&batches).to_string(),
                inspection_date: now - Duration::days(s.int(1, 365)),
                checklist_id: s.uuid(),
                specification_id: s.uuid(),
                inspector_id: s.code("INS", 6),
                results: (0..results_count)
                    .map(|_| InspectionResult {
                        checkpoint_id: s.uuid(),
                        measured_value: s.amount(1.0, 200.0),
                        status: s.choice_str(RESULT_STATUSES),
                        remarks: s.sentence(),
                    })
                    .collect(),
                overall_status: s.choice_str(&["Passed", "Failed"]),
                remarks: s.text(300),
                created_by: s.person(),
                created_date: now - Duration::days(s.int(1, 30)),
                last_updated: now,
            }
        })
        .collect();

    Ok(entries)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReleaseCondition {
    pub condition_id: Uuid,
    pub description: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchRelease {
    pub release_id: String,
    pub batch_id: String,
    pub product_code: String,
    pub release_date: DateTime<Utc>,
    pub quality_status: String,
    pub release_type: String,
    /// 1 to 3 conditions
    pub conditions: Vec<ReleaseCondition>,
    pub approved_by: String,
    pub remarks: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for BatchRelease {
    fn synthesize(s: &mut Sampler) -> Self {
        let release_date = last_year(s);
        let condition_count = s.int(1, 3);
        Self {
            release_id: s.code("REL", 8),
            batch_id: s.code("BCH", 8),
            product_code: s.code("PRD", 8),
            release_date,
            quality_status: s.choice_str(&["Released", "On Hold", "Rejected"]),
            release_type: s.choice_str(&["Full", "Conditional", "Rejected"]),
            conditions: (0..condition_count)
                .map(|_| ReleaseCondition {
                    condition_id: s.uuid(),
                    description: s.text(100),
                    status: s.choice_str(&["Met", "Not Met", "Pending"]),
                })
                .collect(),
            approved_by: s.person(),
            remarks: s.text(200),
            created_date: release_date,
            last_updated: s.plus_days(release_date, 1, 5),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevalidationResult {
    pub parameter_id: Uuid,
    pub measured_value: f64,
    pub status: String,
    pub remarks: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialRevalidation {
    pub revalidation_id: String,
    pub material_code: String,
    pub batch_number: String,
    pub revalidation_date: DateTime<Utc>,
    pub reason: String,
    /// 2 to 5 results
    pub test_results: Vec<RevalidationResult>,
    pub overall_status: String,
    pub valid_until: DateTime<Utc>,
    pub approved_by: String,
    pub remarks: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for MaterialRevalidation {
    fn synthesize(s: &mut Sampler) -> Self {
        let revalidation_date = last_year(s);
        let result_count = s.int(2, 5);
        Self {
            revalidation_id: s.code("REV", 8),
            material_code: s.code("RM", 8),
            batch_number: s.code("B", 6),
            revalidation_date,
            reason: s.choice_str(&[
                "Storage Extension",
                "Temperature Deviation",
                "Customer Request",
                "Regulatory Requirement",
            ]),
            test_results: (0..result_count)
                .map(|_| RevalidationResult {
                    parameter_id: s.uuid(),
                    measured_value: s.amount(0.0, 200.0),
                    status: s.choice_str(RESULT_STATUSES),
                    remarks: s.text(100),
                })
                .collect(),
            overall_status: s.choice_str(OVERALL_STATUSES),
            valid_until: s.plus_days(revalidation_date, 30, 365),
            approved_by: s.person(),
            remarks: s.text(200),
            created_date: revalidation_date,
            last_updated: s.plus_days(revalidation_date, 1, 5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::generate;
    use chrono::TimeZone;

    fn sampler() -> Sampler {
        Sampler::seeded(91, Utc.with_ymd_and_hms(2024, 3, 24, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_nested_list_sizes() {
        let mut s = sampler();
        for c in generate::<InspectionChecklist>(&mut s, 30) {
            assert!((3..=8).contains(&c.checkpoints.len()));
        }
        for spec in generate::<StandardSpecification>(&mut s, 30) {
            assert!((2..=5).contains(&spec.parameters.len()));
        }
        for r in generate::<BatchRelease>(&mut s, 30) {
            assert!((1..=3).contains(&r.conditions.len()));
        }
        for r in generate::<MaterialRevalidation>(&mut s, 30) {
            assert!((2..=5).contains(&r.test_results.len()));
        }
    }

    #[test]
    fn test_extend_pdir_reuses_existing_codes() {
        let mut s = sampler();
        let existing = generate::<PdirEntry>(&mut s, 20);
        let seed = PdirSeed::from_entries(&existing);

        let added = extend_pdir_entries(&mut s, &seed, 150).unwrap();
        assert_eq!(added.len(), 150);
        for entry in &added {
            assert!(seed.product_codes.contains(&entry.product_code));
            assert!(seed.batch_numbers.contains(&entry.batch_number));
            assert!((2..=5).contains(&entry.results.len()));
            assert!(entry.overall_status == "Passed" || entry.overall_status == "Failed");
            assert_eq!(entry.last_updated, s.now());
        }
    }

    #[test]
    fn test_extend_pdir_requires_existing_entries() {
        let mut s = sampler();
        let err = extend_pdir_entries(&mut s, &PdirSeed::default(), 10).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_seed_from_raw_values() {
        let values = vec![
            serde_json::json!({"product_code": "PRD1", "batch_number": "B1"}),
            serde_json::json!({"product_code": "PRD2", "batch_number": "B1"}),
            serde_json::json!({"note": "no codes"}),
        ];
        let seed = PdirSeed::from_values(&values);
        assert_eq!(seed.product_codes.len(), 2);
        assert_eq!(seed.batch_numbers.len(), 1);
    }
}
