//! Production - Raw materials, process routes, batches, work orders, job cards

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{last_two_years, last_year, CollectionSpec, Synthesize};
use crate::domain::services::Sampler;

const MATERIAL_CATEGORIES: &[&str] = &[
    "Chemicals",
    "Metals",
    "Plastics",
    "Textiles",
    "Electronics",
    "Packaging",
];
const MATERIAL_GRADES: &[&str] = &["Raw", "Processed", "Refined", "Basic", "Premium", "Industrial"];
const UNITS: &[&str] = &["KG", "PCS", "MTR", "LTR", "BOX"];
const RUN_STATUSES: &[&str] = &["Planned", "In Progress", "Completed", "Cancelled", "On Hold"];
pub(crate) const QC_STATUSES: &[&str] = &["Pending", "Passed", "Failed", "Under Review"];

pub fn collections() -> Vec<CollectionSpec> {
    vec![
        CollectionSpec::of::<RawMaterial>("raw_material_master", 1000),
        CollectionSpec::of::<ProcessDefinition>("process_definitions", 100),
        CollectionSpec::of::<BatchCard>("batch_cards", 1000),
        CollectionSpec::of::<WorkOrder>("work_orders", 1000),
        CollectionSpec::of::<JobCard>("job_cards", 2000),
        CollectionSpec::of::<ProductionInventory>("production_inventory", 1000),
    ]
}

/// Named attributes checked on receipt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QualityParameters {
    pub parameter1: String,
    pub parameter2: String,
    pub parameter3: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawMaterial {
    pub material_id: Uuid,
    pub material_code: String,
    pub material_name: String,
    pub category: String,
    pub description: String,
    pub unit_of_measure: String,
    pub standard_cost: f64,
    pub minimum_stock: u32,
    pub maximum_stock: u32,
    pub current_stock: u32,
    pub shelf_life_days: u32,
    pub storage_requirements: String,
    pub quality_parameters: QualityParameters,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for RawMaterial {
    fn synthesize(s: &mut Sampler) -> Self {
        let category = s.choice_str(MATERIAL_CATEGORIES);
        Self {
            material_id: s.uuid(),
            material_code: s.code("RM", 8),
            material_name: format!("{} {} {}", s.pick(MATERIAL_GRADES), category, s.word()),
            category,
            description: s.text(200),
            unit_of_measure: s.choice_str(UNITS),
            standard_cost: s.amount(100.0, 10_000.0),
            minimum_stock: s.int(100, 1000),
            maximum_stock: s.int(1000, 10_000),
            current_stock: s.int(0, 10_000),
            shelf_life_days: s.int(30, 365),
            storage_requirements: s.choice_str(&[
                "Room Temperature",
                "Refrigerated",
                "Humidity Controlled",
            ]),
            quality_parameters: QualityParameters {
                parameter1: s.choice_str(&["pH", "Viscosity", "Density", "Moisture"]),
                parameter2: s.choice_str(&["Color", "Odor", "Texture", "Purity"]),
                parameter3: s.choice_str(&["Size", "Shape", "Hardness", "Flexibility"]),
            },
            status: s.choice_str(&["Active", "Discontinued", "Under Review"]),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

/// Celsius bounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TemperatureRange {
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessDefinition {
    pub process_id: Uuid,
    pub process_code: String,
    pub process_name: String,
    pub description: String,
    pub standard_time_minutes: u32,
    pub setup_time_minutes: u32,
    pub cleanup_time_minutes: u32,
    pub required_skills: Vec<String>,
    pub required_tools: Vec<String>,
    pub quality_checkpoints: u32,
    pub temperature_requirements: Option<TemperatureRange>,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for ProcessDefinition {
    fn synthesize(s: &mut Sampler) -> Self {
        Self {
            process_id: s.uuid(),
            process_code: s.code("PRC", 8),
            process_name: s.choice_str(&[
                "Assembly",
                "Mixing",
                "Molding",
                "Cutting",
                "Welding",
                "Testing",
                "Packaging",
            ]),
            description: s.text(200),
            standard_time_minutes: s.int(5, 480),
            setup_time_minutes: s.int(5, 120),
            cleanup_time_minutes: s.int(5, 60),
            required_skills: owned(s.sample_between(
                &["Basic", "Intermediate", "Advanced", "Expert"],
                1,
                3,
            )),
            required_tools: owned(s.sample_between(
                &["Hand Tools", "Power Tools", "Measuring Tools", "Safety Equipment"],
                1,
                4,
            )),
            quality_checkpoints: s.int(1, 5),
            temperature_requirements: s.coin().then(|| TemperatureRange {
                min: s.int(15, 25),
                max: s.int(25, 35),
            }),
            status: s.choice_str(&["Active", "Inactive", "Under Review"]),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

fn owned(items: Vec<&str>) -> Vec<String> {
    items.into_iter().map(String::from).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchCard {
    pub batch_id: String,
    pub product_code: String,
    pub batch_number: String,
    pub start_date: DateTime<Utc>,
    pub planned_end_date: DateTime<Utc>,
    pub actual_end_date: DateTime<Utc>,
    pub planned_quantity: u32,
    pub actual_quantity: u32,
    pub status: String,
    pub quality_status: String,
    pub remarks: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for BatchCard {
    fn synthesize(s: &mut Sampler) -> Self {
        let start_date = last_year(s);
        Self {
            batch_id: s.code("BCH", 8),
            product_code: s.code("PRD", 8),
            batch_number: s.code("B", 6),
            start_date,
            planned_end_date: s.plus_days(start_date, 1, 30),
            actual_end_date: s.plus_days(start_date, 1, 30),
            planned_quantity: s.int(100, 10_000),
            actual_quantity: s.int(100, 10_000),
            status: s.choice_str(RUN_STATUSES),
            quality_status: s.choice_str(QC_STATUSES),
            remarks: s.text(200),
            created_by: s.person(),
            created_date: start_date,
            last_updated: s.plus_days(start_date, 1, 10),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkOrder {
    pub work_order_id: String,
    pub batch_id: String,
    pub process_id: Uuid,
    pub order_date: DateTime<Utc>,
    pub planned_start_date: DateTime<Utc>,
    pub planned_end_date: DateTime<Utc>,
    pub actual_start_date: DateTime<Utc>,
    pub actual_end_date: DateTime<Utc>,
    pub planned_quantity: u32,
    pub actual_quantity: u32,
    pub status: String,
    pub priority: String,
    pub remarks: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for WorkOrder {
    fn synthesize(s: &mut Sampler) -> Self {
        let order_date = last_year(s);
        Self {
            work_order_id: s.code("WO", 8),
            batch_id: s.code("BCH", 8),
            process_id: s.uuid(),
            order_date,
            // Starts fall in days 1-5, ends in days 6-30, so a start always precedes its end
            planned_start_date: s.plus_days(order_date, 1, 5),
            planned_end_date: s.plus_days(order_date, 6, 30),
            actual_start_date: s.plus_days(order_date, 1, 5),
            actual_end_date: s.plus_days(order_date, 6, 30),
            planned_quantity: s.int(100, 10_000),
            actual_quantity: s.int(100, 10_000),
            status: s.choice_str(RUN_STATUSES),
            priority: s.choice_str(&["Low", "Medium", "High", "Urgent"]),
            remarks: s.text(200),
            created_by: s.person(),
            created_date: order_date,
            last_updated: s.plus_days(order_date, 1, 10),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobCard {
    pub job_card_id: String,
    pub work_order_id: String,
    pub operator_id: String,
    pub machine_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub planned_quantity: u32,
    pub actual_quantity: u32,
    pub rejected_quantity: u32,
    pub status: String,
    pub quality_status: String,
    pub remarks: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for JobCard {
    fn synthesize(s: &mut Sampler) -> Self {
        let start_time = last_year(s);
        Self {
            job_card_id: s.code("JC", 8),
            work_order_id: s.code("WO", 8),
            operator_id: s.code("OP", 6),
            machine_id: s.code("MCH", 6),
            start_time,
            end_time: s.plus_hours(start_time, 1, 8),
            planned_quantity: s.int(10, 1000),
            actual_quantity: s.int(10, 1000),
            rejected_quantity: s.int(0, 50),
            status: s.choice_str(&["In Progress", "Completed", "Paused", "Cancelled"]),
            quality_status: s.choice_str(QC_STATUSES),
            remarks: s.text(200),
            created_by: s.person(),
            created_date: start_time,
            last_updated: s.plus_hours(start_time, 1, 8),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductionInventory {
    pub inventory_id: Uuid,
    pub product_code: String,
    pub batch_id: String,
    pub location: String,
    pub quantity: u32,
    pub unit_of_measure: String,
    pub status: String,
    pub quality_status: String,
    pub last_movement_date: DateTime<Utc>,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for ProductionInventory {
    fn synthesize(s: &mut Sampler) -> Self {
        let created_date = last_year(s);
        Self {
            inventory_id: s.uuid(),
            product_code: s.code("PRD", 8),
            batch_id: s.code("BCH", 8),
            location: s.choice_str(&[
                "Raw Material Store",
                "Work in Progress",
                "Finished Goods",
                "Quality Control",
            ]),
            quantity: s.int(0, 10_000),
            unit_of_measure: s.choice_str(UNITS),
            status: s.choice_str(&["Available", "Reserved", "In Transit", "Blocked"]),
            quality_status: s.choice_str(QC_STATUSES),
            last_movement_date: last_year(s),
            created_date,
            last_updated: s.plus_days(created_date, 1, 5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::generate;
    use chrono::TimeZone;

    fn sampler() -> Sampler {
        Sampler::seeded(81, Utc.with_ymd_and_hms(2024, 3, 24, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_material_name_carries_category() {
        let mut s = sampler();
        for m in generate::<RawMaterial>(&mut s, 100) {
            assert!(m.material_name.contains(&m.category), "{}", m.material_name);
            assert!(MATERIAL_GRADES.iter().any(|g| m.material_name.starts_with(g)));
        }
    }

    #[test]
    fn test_temperature_range_optional_and_ordered() {
        let mut s = sampler();
        let processes = generate::<ProcessDefinition>(&mut s, 100);
        assert!(processes.iter().any(|p| p.temperature_requirements.is_none()));
        for range in processes.iter().filter_map(|p| p.temperature_requirements) {
            assert!(range.min <= range.max);
        }
        for p in &processes {
            assert!((1..=3).contains(&p.required_skills.len()));
            assert!((1..=4).contains(&p.required_tools.len()));
        }
    }

    #[test]
    fn test_work_order_starts_before_end() {
        let mut s = sampler();
        for w in generate::<WorkOrder>(&mut s, 100) {
            assert!(w.planned_start_date < w.planned_end_date);
            assert!(w.actual_start_date < w.actual_end_date);
        }
    }
}
