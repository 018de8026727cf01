//! Sales - Customers, SKUs, logistics partners, orders, dispatches, invoices

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{last_two_years, last_year, this_year, CollectionSpec, Synthesize, GST_RATES, PAYMENT_TERMS};
use crate::domain::services::Sampler;

const SKU_CATEGORIES: &[&str] = &["Electronics", "Clothing", "Food", "Furniture", "Books", "Sports"];

pub fn collections() -> Vec<CollectionSpec> {
    vec![
        CollectionSpec::of::<Customer>("customer_master", 1000),
        CollectionSpec::of::<Sku>("sku_master", 1000),
        CollectionSpec::of::<LogisticsPartner>("logistics_master", 100),
        CollectionSpec::of::<SalesOrder>("sales_orders", 1000),
        CollectionSpec::of::<DispatchRequest>("dispatch_requests", 1000),
        CollectionSpec::of::<Invoice>("invoices", 1000),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub customer_id: Uuid,
    pub customer_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
    pub gst_number: String,
    pub credit_limit: f64,
    pub payment_terms: String,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for Customer {
    fn synthesize(s: &mut Sampler) -> Self {
        Self {
            customer_id: s.uuid(),
            customer_name: s.company(),
            contact_person: s.person(),
            email: s.email(),
            phone: s.phone(),
            address: s.address(),
            city: s.city(),
            state: s.state(),
            country: s.country(),
            pincode: s.postcode(),
            gst_number: s.code("GST", 10),
            credit_limit: s.amount(10_000.0, 1_000_000.0),
            payment_terms: s.choice_str(PAYMENT_TERMS),
            status: s.choice_str(&["Active", "Inactive", "Blocked"]),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sku {
    pub sku_id: String,
    pub product_name: String,
    pub category: String,
    pub unit_price: f64,
    pub unit_cost: f64,
    pub stock_quantity: u32,
    pub manufacturer: String,
    pub description: String,
    pub created_date: DateTime<Utc>,
    pub hsn_code: String,
    pub gst_percentage: u8,
    pub reorder_level: u32,
    pub status: String,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for Sku {
    fn synthesize(s: &mut Sampler) -> Self {
        let category = *s.pick(SKU_CATEGORIES);
        Self {
            sku_id: s.code("SKU", 6),
            product_name: format!("{} {}", s.title_word(), category.trim_end_matches('s')),
            category: category.to_string(),
            unit_price: s.amount(100.0, 10_000.0),
            unit_cost: s.amount(50.0, 8_000.0),
            stock_quantity: s.int(0, 1000),
            manufacturer: s.company(),
            description: s.sentence(),
            created_date: this_year(s),
            hsn_code: s.hsn_code(),
            gst_percentage: s.choice(GST_RATES),
            reorder_level: s.int(10, 100),
            status: s.choice_str(&["Active", "Discontinued", "Out of Stock"]),
            last_updated: last_year(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogisticsPartner {
    pub partner_id: Uuid,
    pub partner_name: String,
    pub transport_mode: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub service_area: String,
    pub rating: f64,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for LogisticsPartner {
    fn synthesize(s: &mut Sampler) -> Self {
        Self {
            partner_id: s.uuid(),
            partner_name: s.company(),
            transport_mode: s.choice_str(&["Road", "Rail", "Air", "Sea"]),
            contact_person: s.person(),
            email: s.email(),
            phone: s.phone(),
            address: s.address(),
            service_area: s.choice_str(&["Local", "Regional", "National", "International"]),
            rating: s.rating(1.0, 5.0),
            status: s.choice_str(&["Active", "Inactive", "Suspended"]),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesOrder {
    pub order_id: String,
    pub customer_id: Uuid,
    pub order_date: DateTime<Utc>,
    pub delivery_date: DateTime<Utc>,
    pub order_status: String,
    pub payment_status: String,
    pub total_amount: f64,
    pub tax_amount: f64,
    pub shipping_amount: f64,
    pub grand_total: f64,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for SalesOrder {
    fn synthesize(s: &mut Sampler) -> Self {
        let order_date = last_year(s);
        Self {
            order_id: s.code("SO", 8),
            customer_id: s.uuid(),
            order_date,
            delivery_date: s.plus_days(order_date, 1, 30),
            order_status: s.choice_str(&[
                "Draft",
                "Confirmed",
                "Processing",
                "Shipped",
                "Delivered",
                "Cancelled",
            ]),
            payment_status: s.choice_str(&["Pending", "Partial", "Completed"]),
            total_amount: s.amount(1_000.0, 100_000.0),
            tax_amount: s.amount(100.0, 10_000.0),
            shipping_amount: s.amount(50.0, 1_000.0),
            grand_total: s.amount(1_150.0, 111_000.0),
            created_by: s.person(),
            created_date: order_date,
            last_updated: s.plus_days(order_date, 1, 10),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DispatchRequest {
    pub drn_id: String,
    pub order_id: String,
    pub customer_id: Uuid,
    pub dispatch_date: DateTime<Utc>,
    pub transport_partner_id: Uuid,
    pub status: String,
    pub shipping_address: String,
    pub tracking_number: Uuid,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for DispatchRequest {
    fn synthesize(s: &mut Sampler) -> Self {
        let dispatch_date = last_year(s);
        Self {
            drn_id: s.code("DRN", 8),
            order_id: s.code("SO", 8),
            customer_id: s.uuid(),
            dispatch_date,
            transport_partner_id: s.uuid(),
            status: s.choice_str(&["Pending", "In Transit", "Delivered", "Cancelled"]),
            shipping_address: s.address(),
            tracking_number: s.uuid(),
            created_by: s.person(),
            created_date: dispatch_date,
            last_updated: s.plus_days(dispatch_date, 1, 5),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub invoice_id: String,
    pub order_id: String,
    pub customer_id: Uuid,
    pub invoice_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub payment_status: String,
    pub total_amount: f64,
    pub tax_amount: f64,
    pub shipping_amount: f64,
    pub grand_total: f64,
    pub eway_bill_number: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for Invoice {
    fn synthesize(s: &mut Sampler) -> Self {
        let invoice_date = last_year(s);
        Self {
            invoice_id: s.code("INV", 8),
            order_id: s.code("SO", 8),
            customer_id: s.uuid(),
            invoice_date,
            due_date: s.plus_days(invoice_date, 15, 60),
            payment_status: s.choice_str(&["Pending", "Partial", "Completed", "Overdue"]),
            total_amount: s.amount(1_000.0, 100_000.0),
            tax_amount: s.amount(100.0, 10_000.0),
            shipping_amount: s.amount(50.0, 1_000.0),
            grand_total: s.amount(1_150.0, 111_000.0),
            eway_bill_number: s.code("EWB", 12),
            created_by: s.person(),
            created_date: invoice_date,
            last_updated: s.plus_days(invoice_date, 1, 10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::generate;
    use chrono::TimeZone;

    fn sampler() -> Sampler {
        Sampler::seeded(21, Utc.with_ymd_and_hms(2024, 3, 24, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_sku_name_uses_singular_category() {
        let mut s = sampler();
        for sku in generate::<Sku>(&mut s, 100) {
            let suffix = sku.category.trim_end_matches('s');
            assert!(sku.product_name.ends_with(suffix), "{}", sku.product_name);
            assert!(GST_RATES.contains(&sku.gst_percentage));
            assert!(sku.sku_id.starts_with("SKU"));
        }
    }

    #[test]
    fn test_order_dates_are_ordered() {
        let mut s = sampler();
        for order in generate::<SalesOrder>(&mut s, 100) {
            assert!(order.delivery_date > order.order_date);
            assert!(order.last_updated > order.created_date);
            assert!(order.order_date <= s.now());
        }
    }

    #[test]
    fn test_invoice_due_window() {
        let mut s = sampler();
        for invoice in generate::<Invoice>(&mut s, 100) {
            let days = (invoice.due_date - invoice.invoice_date).num_days();
            assert!((15..=60).contains(&days));
            assert_eq!(invoice.eway_bill_number.len(), 15);
        }
    }
}
