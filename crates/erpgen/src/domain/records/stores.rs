//! Stores - Zones, stock categories and items, issues, transfers, ageing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::production::TemperatureRange;
use super::{last_two_years, last_year, CollectionSpec, Synthesize};
use crate::domain::services::Sampler;

const UNITS: &[&str] = &["KG", "PCS", "MTR", "LTR", "BOX", "SET"];

pub fn collections() -> Vec<CollectionSpec> {
    vec![
        CollectionSpec::of::<InventoryZone>("inventory_zones", 10),
        CollectionSpec::of::<StockCategory>("stock_categories", 50),
        CollectionSpec::of::<StockItem>("stock_items", 1000),
        CollectionSpec::of::<GoodsIssueNote>("goods_issue_notes", 1000),
        CollectionSpec::of::<StockTransfer>("stock_transfers", 500),
        CollectionSpec::of::<StockAging>("stock_aging", 1000),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryZone {
    pub zone_id: Uuid,
    pub zone_name: String,
    pub location_code: String,
    pub description: String,
    pub capacity: u32,
    /// Percent
    pub current_occupancy: u32,
    pub temperature_controlled: bool,
    pub temperature_range: Option<TemperatureRange>,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for InventoryZone {
    fn synthesize(s: &mut Sampler) -> Self {
        Self {
            zone_id: s.uuid(),
            zone_name: s.choice_str(&[
                "Main Store",
                "Stock Preparation Store",
                "Raw Material Store",
                "Finished Goods Store",
                "Quality Control Store",
            ]),
            location_code: s.code("LOC", 6),
            description: s.text(200),
            capacity: s.int(1000, 10_000),
            current_occupancy: s.int(0, 100),
            temperature_controlled: s.coin(),
            temperature_range: s.coin().then(|| TemperatureRange {
                min: s.int(15, 25),
                max: s.int(25, 35),
            }),
            status: s.choice_str(&["Active", "Maintenance", "Full", "Inactive"]),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockCategory {
    pub category_id: Uuid,
    pub category_name: String,
    pub sub_category: String,
    pub description: String,
    pub unit_of_measure: String,
    pub reorder_level: u32,
    pub maximum_level: u32,
    pub shelf_life_days: u32,
    pub storage_requirements: String,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for StockCategory {
    fn synthesize(s: &mut Sampler) -> Self {
        Self {
            category_id: s.uuid(),
            category_name: s.choice_str(&[
                "Raw Materials",
                "Work in Progress",
                "Finished Goods",
                "Spare Parts",
                "Consumables",
                "Packaging",
            ]),
            sub_category: s.word(),
            description: s.text(200),
            unit_of_measure: s.choice_str(UNITS),
            reorder_level: s.int(10, 100),
            maximum_level: s.int(100, 1000),
            shelf_life_days: s.int(30, 365),
            storage_requirements: s.choice_str(&[
                "Room Temperature",
                "Refrigerated",
                "Frozen",
                "Humidity Controlled",
            ]),
            status: s.choice_str(&["Active", "Inactive"]),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockItem {
    pub item_id: Uuid,
    pub item_code: String,
    pub item_name: String,
    pub category_id: Uuid,
    pub description: String,
    pub unit_of_measure: String,
    pub current_stock: u32,
    pub reorder_level: u32,
    pub maximum_level: u32,
    pub average_consumption: u32,
    pub last_received_date: DateTime<Utc>,
    pub last_issued_date: DateTime<Utc>,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for StockItem {
    fn synthesize(s: &mut Sampler) -> Self {
        let grade = s.pick(&["Standard", "Premium", "Basic", "Industrial", "Commercial", "Professional"]);
        let kind = s.pick(&["Tool", "Component", "Material", "Supply", "Equipment", "Accessory"]);
        Self {
            item_id: s.uuid(),
            item_code: s.code("STK", 8),
            item_name: format!("{} {} {}", grade, kind, s.word()),
            category_id: s.uuid(),
            description: s.text(200),
            unit_of_measure: s.choice_str(UNITS),
            current_stock: s.int(0, 1000),
            reorder_level: s.int(10, 100),
            maximum_level: s.int(100, 1000),
            average_consumption: s.int(1, 100),
            last_received_date: last_year(s),
            last_issued_date: last_year(s),
            status: s.choice_str(&["Active", "Discontinued", "Out of Stock"]),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoodsIssueNote {
    pub gin_id: String,
    pub issue_date: DateTime<Utc>,
    pub requisition_number: String,
    pub department: String,
    pub purpose: String,
    pub total_quantity: u32,
    pub total_value: f64,
    pub status: String,
    pub remarks: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for GoodsIssueNote {
    fn synthesize(s: &mut Sampler) -> Self {
        let issue_date = last_year(s);
        Self {
            gin_id: s.code("GIN", 8),
            issue_date,
            requisition_number: s.code("REQ", 8),
            department: s.choice_str(&[
                "Production",
                "Maintenance",
                "Quality Control",
                "Sales",
                "R&D",
            ]),
            purpose: s.choice_str(&[
                "Production",
                "Maintenance",
                "Quality Testing",
                "Sales",
                "Sample",
            ]),
            total_quantity: s.int(10, 1000),
            total_value: s.amount(1_000.0, 100_000.0),
            status: s.choice_str(&["Draft", "Approved", "Issued", "Cancelled"]),
            remarks: s.text(200),
            created_by: s.person(),
            created_date: issue_date,
            last_updated: s.plus_days(issue_date, 1, 5),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockTransfer {
    pub transfer_id: String,
    pub transfer_date: DateTime<Utc>,
    pub source_zone_id: Uuid,
    pub destination_zone_id: Uuid,
    pub transfer_type: String,
    pub total_items: u32,
    pub total_quantity: u32,
    pub total_value: f64,
    pub status: String,
    pub remarks: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for StockTransfer {
    fn synthesize(s: &mut Sampler) -> Self {
        let transfer_date = last_year(s);
        Self {
            transfer_id: s.code("TRF", 8),
            transfer_date,
            source_zone_id: s.uuid(),
            destination_zone_id: s.uuid(),
            transfer_type: s.choice_str(&["Internal", "Inter-Company", "Customer Return"]),
            total_items: s.int(1, 50),
            total_quantity: s.int(10, 1000),
            total_value: s.amount(1_000.0, 100_000.0),
            status: s.choice_str(&["Draft", "In Transit", "Completed", "Cancelled"]),
            remarks: s.text(200),
            created_by: s.person(),
            created_date: transfer_date,
            last_updated: s.plus_days(transfer_date, 1, 5),
        }
    }
}

/// Quantity on hand by days since receipt
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgeBrackets {
    #[serde(rename = "0-30_days")]
    pub days_0_30: u32,
    #[serde(rename = "31-60_days")]
    pub days_31_60: u32,
    #[serde(rename = "61-90_days")]
    pub days_61_90: u32,
    #[serde(rename = "90_plus_days")]
    pub days_90_plus: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockAging {
    pub aging_id: Uuid,
    pub item_id: Uuid,
    pub aging_date: DateTime<Utc>,
    pub current_stock: u32,
    pub stock_value: f64,
    pub age_brackets: AgeBrackets,
    pub last_movement_date: DateTime<Utc>,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for StockAging {
    fn synthesize(s: &mut Sampler) -> Self {
        let aging_date = last_year(s);
        Self {
            aging_id: s.uuid(),
            item_id: s.uuid(),
            aging_date,
            current_stock: s.int(0, 1000),
            stock_value: s.amount(1_000.0, 100_000.0),
            age_brackets: AgeBrackets {
                days_0_30: s.int(0, 500),
                days_31_60: s.int(0, 300),
                days_61_90: s.int(0, 200),
                days_90_plus: s.int(0, 100),
            },
            last_movement_date: last_year(s),
            created_date: aging_date,
            last_updated: s.plus_days(aging_date, 1, 5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_age_bracket_keys() {
        let mut s = Sampler::seeded(101, Utc.with_ymd_and_hms(2024, 3, 24, 12, 0, 0).unwrap());
        let aging = StockAging::synthesize(&mut s);
        let json = serde_json::to_value(&aging).unwrap();
        let brackets = json["age_brackets"].as_object().unwrap();

        let keys: Vec<&str> = brackets.keys().map(String::as_str).collect();
        for key in ["0-30_days", "31-60_days", "61-90_days", "90_plus_days"] {
            assert!(keys.contains(&key), "missing {}", key);
        }
        assert!(brackets["0-30_days"].as_u64().unwrap() <= 500);
    }
}
