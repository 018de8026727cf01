//! Purchase - Suppliers, items, purchase orders, GRNs, job work, debit notes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{last_two_years, last_year, CollectionSpec, Synthesize, GST_RATES, PAYMENT_TERMS};
use crate::domain::services::Sampler;

const ITEM_CATEGORIES: &[&str] = &[
    "Raw Materials",
    "Packaging",
    "Machinery",
    "Spare Parts",
    "Consumables",
    "Services",
];
const UNITS: &[&str] = &["KG", "PCS", "MTR", "LTR", "BOX", "SET", "HRS"];

pub fn collections() -> Vec<CollectionSpec> {
    vec![
        CollectionSpec::of::<Supplier>("supplier_master", 1000),
        CollectionSpec::of::<Item>("item_master", 1000),
        CollectionSpec::of::<PurchaseOrder>("purchase_orders", 1000),
        CollectionSpec::of::<GoodsReceipt>("grn", 1000),
        CollectionSpec::of::<JobWorkOrder>("job_work_orders", 500),
        CollectionSpec::of::<PurchaseDebitNote>("purchase_debit_notes", 200),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BankDetails {
    pub account_number: String,
    pub bank_name: String,
    pub ifsc_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    pub supplier_id: Uuid,
    pub supplier_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
    pub gst_number: String,
    pub pan_number: String,
    pub credit_limit: f64,
    pub payment_terms: String,
    pub bank_details: BankDetails,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for Supplier {
    fn synthesize(s: &mut Sampler) -> Self {
        Self {
            supplier_id: s.uuid(),
            supplier_name: s.company(),
            contact_person: s.person(),
            email: s.email(),
            phone: s.phone(),
            address: s.address(),
            city: s.city(),
            state: s.state(),
            country: s.country(),
            pincode: s.postcode(),
            gst_number: s.code("GST", 10),
            pan_number: s.code("PAN", 10),
            credit_limit: s.amount(50_000.0, 2_000_000.0),
            payment_terms: s.choice_str(PAYMENT_TERMS),
            bank_details: BankDetails {
                account_number: s.digits(12),
                bank_name: s.company(),
                ifsc_code: s.code("IFSC", 8),
            },
            status: s.choice_str(&["Active", "Inactive", "Blocked"]),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub item_id: Uuid,
    pub item_code: String,
    pub item_name: String,
    pub category: String,
    pub description: String,
    pub unit_of_measure: String,
    pub hsn_code: String,
    pub gst_percentage: u8,
    pub standard_cost: f64,
    pub minimum_order_quantity: u32,
    pub lead_time_days: u32,
    pub reorder_level: u32,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for Item {
    fn synthesize(s: &mut Sampler) -> Self {
        Self {
            item_id: s.uuid(),
            item_code: s.code("ITEM", 8),
            item_name: format!("{} {}", s.title_word(), s.title_word()),
            category: s.choice_str(ITEM_CATEGORIES),
            description: s.text(200),
            unit_of_measure: s.choice_str(UNITS),
            hsn_code: s.hsn_code(),
            gst_percentage: s.choice(GST_RATES),
            standard_cost: s.amount(100.0, 10_000.0),
            minimum_order_quantity: s.int(1, 100),
            lead_time_days: s.int(1, 30),
            reorder_level: s.int(10, 100),
            status: s.choice_str(&["Active", "Discontinued", "Out of Stock"]),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseOrder {
    pub po_id: String,
    pub supplier_id: Uuid,
    pub order_date: DateTime<Utc>,
    pub expected_delivery_date: DateTime<Utc>,
    pub order_status: String,
    pub payment_status: String,
    pub total_amount: f64,
    pub tax_amount: f64,
    pub shipping_amount: f64,
    pub grand_total: f64,
    pub terms_and_conditions: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for PurchaseOrder {
    fn synthesize(s: &mut Sampler) -> Self {
        let order_date = last_year(s);
        Self {
            po_id: s.code("PO", 8),
            supplier_id: s.uuid(),
            order_date,
            expected_delivery_date: s.plus_days(order_date, 1, 30),
            order_status: s.choice_str(&[
                "Draft",
                "Sent",
                "Acknowledged",
                "In Transit",
                "Received",
                "Cancelled",
            ]),
            payment_status: s.choice_str(&["Pending", "Partial", "Completed"]),
            total_amount: s.amount(10_000.0, 500_000.0),
            tax_amount: s.amount(1_000.0, 50_000.0),
            shipping_amount: s.amount(500.0, 5_000.0),
            grand_total: s.amount(11_500.0, 555_000.0),
            terms_and_conditions: s.text(500),
            created_by: s.person(),
            created_date: order_date,
            last_updated: s.plus_days(order_date, 1, 10),
        }
    }
}

/// Goods receipt note
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoodsReceipt {
    pub grn_id: String,
    pub po_id: String,
    pub supplier_id: Uuid,
    pub receipt_date: DateTime<Utc>,
    pub receipt_status: String,
    pub quality_status: String,
    pub total_quantity: u32,
    pub total_amount: f64,
    pub remarks: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for GoodsReceipt {
    fn synthesize(s: &mut Sampler) -> Self {
        let receipt_date = last_year(s);
        Self {
            grn_id: s.code("GRN", 8),
            po_id: s.code("PO", 8),
            supplier_id: s.uuid(),
            receipt_date,
            receipt_status: s.choice_str(&["Partial", "Complete", "Rejected"]),
            quality_status: s.choice_str(&["Accepted", "Rejected", "Under Review"]),
            total_quantity: s.int(10, 1000),
            total_amount: s.amount(10_000.0, 500_000.0),
            remarks: s.text(200),
            created_by: s.person(),
            created_date: receipt_date,
            last_updated: s.plus_days(receipt_date, 1, 5),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobWorkOrder {
    pub jwo_id: String,
    pub supplier_id: Uuid,
    pub order_date: DateTime<Utc>,
    pub expected_completion_date: DateTime<Utc>,
    pub work_status: String,
    pub work_description: String,
    pub total_amount: f64,
    pub advance_payment: f64,
    pub payment_status: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for JobWorkOrder {
    fn synthesize(s: &mut Sampler) -> Self {
        let order_date = last_year(s);
        Self {
            jwo_id: s.code("JWO", 8),
            supplier_id: s.uuid(),
            order_date,
            expected_completion_date: s.plus_days(order_date, 5, 60),
            work_status: s.choice_str(&["Draft", "In Progress", "Completed", "Cancelled"]),
            work_description: s.text(500),
            total_amount: s.amount(5_000.0, 200_000.0),
            advance_payment: s.amount(1_000.0, 50_000.0),
            payment_status: s.choice_str(&["Pending", "Partial", "Completed"]),
            created_by: s.person(),
            created_date: order_date,
            last_updated: s.plus_days(order_date, 1, 10),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseDebitNote {
    pub debit_note_id: String,
    pub po_id: String,
    pub supplier_id: Uuid,
    pub note_date: DateTime<Utc>,
    pub reason: String,
    pub amount: f64,
    pub status: String,
    pub remarks: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for PurchaseDebitNote {
    fn synthesize(s: &mut Sampler) -> Self {
        let note_date = last_year(s);
        Self {
            debit_note_id: s.code("DN", 8),
            po_id: s.code("PO", 8),
            supplier_id: s.uuid(),
            note_date,
            reason: s.choice_str(&[
                "Quality Issue",
                "Price Adjustment",
                "Quantity Discrepancy",
                "Service Issue",
            ]),
            amount: s.amount(1_000.0, 50_000.0),
            status: s.choice_str(&["Draft", "Sent", "Acknowledged", "Settled"]),
            remarks: s.text(200),
            created_by: s.person(),
            created_date: note_date,
            last_updated: s.plus_days(note_date, 1, 10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::generate;
    use chrono::TimeZone;

    #[test]
    fn test_supplier_bank_details_shape() {
        let mut s = Sampler::seeded(31, Utc.with_ymd_and_hms(2024, 3, 24, 12, 0, 0).unwrap());
        for supplier in generate::<Supplier>(&mut s, 50) {
            assert_eq!(supplier.bank_details.account_number.len(), 12);
            assert!(supplier.bank_details.ifsc_code.starts_with("IFSC"));
            assert!(PAYMENT_TERMS.contains(&supplier.payment_terms.as_str()));
        }
    }

    #[test]
    fn test_free_text_fields_are_bounded() {
        let mut s = Sampler::seeded(32, Utc.with_ymd_and_hms(2024, 3, 24, 12, 0, 0).unwrap());
        for po in generate::<PurchaseOrder>(&mut s, 50) {
            assert!(po.terms_and_conditions.chars().count() <= 500);
        }
        for grn in generate::<GoodsReceipt>(&mut s, 50) {
            assert!(grn.remarks.chars().count() <= 200);
        }
    }
}
