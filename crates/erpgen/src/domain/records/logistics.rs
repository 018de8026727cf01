//! Logistics - Shipping modes, transport partners, dispatches, ASNs, tracking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{last_two_years, last_year, CollectionSpec, Synthesize, PAYMENT_TERMS};
use crate::domain::services::Sampler;

const SERVICE_AREAS: &[&str] = &["Local", "Regional", "National", "International"];
const SHIPMENT_STATUSES: &[&str] = &["Pending", "In Transit", "Delivered", "Cancelled"];

pub fn collections() -> Vec<CollectionSpec> {
    vec![
        CollectionSpec::of::<ShippingMode>("shipping_modes", 20),
        CollectionSpec::of::<TransportPartner>("transport_partners", 100),
        CollectionSpec::of::<SalesDispatch>("sales_dispatches", 1000),
        CollectionSpec::of::<AdvanceShipmentNotice>("advance_shipment_notices", 500),
        CollectionSpec::of::<DispatchStatusReport>("dispatch_status_reports", 1000),
        CollectionSpec::of::<SalesRegisterEntry>("sales_register", 1000),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingMode {
    pub mode_id: Uuid,
    pub mode_code: String,
    pub mode_name: String,
    pub description: String,
    pub transit_time_days: u32,
    pub cost_per_kg: f64,
    pub max_weight_kg: u32,
    pub max_volume_cbm: f64,
    pub is_active: bool,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for ShippingMode {
    fn synthesize(s: &mut Sampler) -> Self {
        Self {
            mode_id: s.uuid(),
            mode_code: s.code("SHM", 6),
            mode_name: s.choice_str(&[
                "Road Transport",
                "Rail Transport",
                "Air Freight",
                "Sea Freight",
                "Express Delivery",
            ]),
            description: s.text(200),
            transit_time_days: s.int(1, 30),
            cost_per_kg: s.amount(10.0, 1_000.0),
            max_weight_kg: s.int(100, 10_000),
            max_volume_cbm: s.amount(1.0, 100.0),
            is_active: s.coin(),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransportPartner {
    pub partner_id: Uuid,
    pub partner_code: String,
    pub partner_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub gst_number: String,
    pub pan_number: String,
    pub service_areas: Vec<String>,
    /// Shipping mode codes (`SHM...`)
    pub shipping_modes: Vec<String>,
    pub rating: f64,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for TransportPartner {
    fn synthesize(s: &mut Sampler) -> Self {
        let mode_pool: Vec<String> = (0..5).map(|_| s.code("SHM", 6)).collect();
        Self {
            partner_id: s.uuid(),
            partner_code: s.code("TP", 8),
            partner_name: s.company(),
            contact_person: s.person(),
            email: s.email(),
            phone: s.phone(),
            address: s.address(),
            gst_number: s.code("GST", 10),
            pan_number: s.code("PAN", 10),
            service_areas: s
                .sample_between(SERVICE_AREAS, 1, SERVICE_AREAS.len())
                .into_iter()
                .map(String::from)
                .collect(),
            shipping_modes: s.sample_between(&mode_pool, 1, mode_pool.len()),
            rating: s.rating(1.0, 5.0),
            status: s.choice_str(&["Active", "Inactive", "Suspended"]),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

/// Vehicle and load details shared by dispatches and shipment notices
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Consignment {
    pub transport_partner_id: Uuid,
    pub shipping_mode_id: Uuid,
    pub vehicle_number: String,
    pub driver_name: String,
    pub driver_contact: String,
    pub total_packages: u32,
    pub total_weight_kg: f64,
    pub total_volume_cbm: f64,
}

impl Synthesize for Consignment {
    fn synthesize(s: &mut Sampler) -> Self {
        Self {
            transport_partner_id: s.uuid(),
            shipping_mode_id: s.uuid(),
            vehicle_number: s.code("VEH", 6),
            driver_name: s.person(),
            driver_contact: s.phone(),
            total_packages: s.int(1, 100),
            total_weight_kg: s.amount(10.0, 1_000.0),
            total_volume_cbm: s.amount(1.0, 50.0),
        }
    }
}

/// Dispatch request note raised against a sales order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesDispatch {
    pub drn_id: String,
    pub order_id: String,
    pub customer_id: Uuid,
    pub dispatch_date: DateTime<Utc>,
    pub expected_delivery_date: DateTime<Utc>,
    #[serde(flatten)]
    pub consignment: Consignment,
    pub status: String,
    pub tracking_number: Uuid,
    pub remarks: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for SalesDispatch {
    fn synthesize(s: &mut Sampler) -> Self {
        let dispatch_date = last_year(s);
        Self {
            drn_id: s.code("DRN", 8),
            order_id: s.code("SO", 8),
            customer_id: s.uuid(),
            dispatch_date,
            expected_delivery_date: s.plus_days(dispatch_date, 1, 30),
            consignment: Consignment::synthesize(s),
            status: s.choice_str(SHIPMENT_STATUSES),
            tracking_number: s.uuid(),
            remarks: s.text(200),
            created_by: s.person(),
            created_date: dispatch_date,
            last_updated: s.plus_days(dispatch_date, 1, 10),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvanceShipmentNotice {
    pub asn_id: String,
    pub drn_id: String,
    pub customer_id: Uuid,
    pub asn_date: DateTime<Utc>,
    pub expected_arrival_date: DateTime<Utc>,
    #[serde(flatten)]
    pub consignment: Consignment,
    pub status: String,
    pub tracking_number: Uuid,
    pub remarks: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for AdvanceShipmentNotice {
    fn synthesize(s: &mut Sampler) -> Self {
        let asn_date = last_year(s);
        Self {
            asn_id: s.code("ASN", 8),
            drn_id: s.code("DRN", 8),
            customer_id: s.uuid(),
            asn_date,
            expected_arrival_date: s.plus_days(asn_date, 1, 30),
            consignment: Consignment::synthesize(s),
            status: s.choice_str(SHIPMENT_STATUSES),
            tracking_number: s.uuid(),
            remarks: s.text(200),
            created_by: s.person(),
            created_date: asn_date,
            last_updated: s.plus_days(asn_date, 1, 10),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DispatchStatusReport {
    pub report_id: String,
    pub drn_id: String,
    pub report_date: DateTime<Utc>,
    pub current_location: String,
    pub current_status: String,
    pub estimated_delivery_date: DateTime<Utc>,
    /// Present on about half of the reports
    pub delay_reason: Option<String>,
    pub remarks: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for DispatchStatusReport {
    fn synthesize(s: &mut Sampler) -> Self {
        let report_date = last_year(s);
        Self {
            report_id: s.code("DSR", 8),
            drn_id: s.code("DRN", 8),
            report_date,
            current_location: s.city(),
            current_status: s.choice_str(&["In Transit", "At Hub", "Out for Delivery", "Delivered"]),
            estimated_delivery_date: s.plus_days(report_date, 1, 10),
            delay_reason: s.coin().then(|| {
                s.choice_str(&[
                    "Traffic",
                    "Weather",
                    "Vehicle Breakdown",
                    "Customer Not Available",
                    "None",
                ])
            }),
            remarks: s.text(200),
            created_by: s.person(),
            created_date: report_date,
            last_updated: s.plus_hours(report_date, 1, 24),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesRegisterEntry {
    pub sale_id: String,
    pub order_id: String,
    pub customer_id: Uuid,
    pub sale_date: DateTime<Utc>,
    pub product_code: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_amount: f64,
    pub tax_amount: f64,
    pub shipping_amount: f64,
    pub grand_total: f64,
    pub payment_status: String,
    pub payment_terms: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for SalesRegisterEntry {
    fn synthesize(s: &mut Sampler) -> Self {
        let sale_date = last_year(s);
        Self {
            sale_id: s.code("SALE", 8),
            order_id: s.code("SO", 8),
            customer_id: s.uuid(),
            sale_date,
            product_code: s.code("PRD", 8),
            quantity: s.int(1, 1000),
            unit_price: s.amount(100.0, 10_000.0),
            total_amount: s.amount(1_000.0, 100_000.0),
            tax_amount: s.amount(100.0, 10_000.0),
            shipping_amount: s.amount(50.0, 5_000.0),
            grand_total: s.amount(1_150.0, 115_000.0),
            payment_status: s.choice_str(&["Pending", "Partial", "Completed"]),
            payment_terms: s.choice_str(PAYMENT_TERMS),
            created_by: s.person(),
            created_date: sale_date,
            last_updated: s.plus_days(sale_date, 1, 10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::generate;
    use chrono::TimeZone;

    fn sampler() -> Sampler {
        Sampler::seeded(71, Utc.with_ymd_and_hms(2024, 3, 24, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_dispatch_serializes_consignment_inline() {
        let mut s = sampler();
        let dispatch = SalesDispatch::synthesize(&mut s);
        let json = serde_json::to_value(&dispatch).unwrap();

        assert!(json.get("consignment").is_none());
        assert!(json["vehicle_number"].as_str().unwrap().starts_with("VEH"));
        assert!(json["total_packages"].is_u64());

        let back: SalesDispatch = serde_json::from_value(json).unwrap();
        assert_eq!(back, dispatch);
    }

    #[test]
    fn test_partner_samples_are_non_empty() {
        let mut s = sampler();
        for p in generate::<TransportPartner>(&mut s, 50) {
            assert!((1..=4).contains(&p.service_areas.len()));
            assert!((1..=5).contains(&p.shipping_modes.len()));
            assert!(p.shipping_modes.iter().all(|m| m.starts_with("SHM")));
        }
    }

    #[test]
    fn test_status_report_update_within_a_day() {
        let mut s = sampler();
        for r in generate::<DispatchStatusReport>(&mut s, 50) {
            let hours = (r.last_updated - r.report_date).num_hours();
            assert!((1..=24).contains(&hours));
        }
    }
}
