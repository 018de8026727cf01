//! GST - Tax codes, registrations, e-documents and statutory returns
//!
//! Monthly returns (GSTR-1, GSTR-3B, GSTR-2A, reconciliation) are generated
//! one per closed month counting back from the anchor, so a default run of 12
//! covers the last year without repeating a period.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::{
    filing_after, last_two_years, last_year, period_months_back, to_values, CollectionSpec,
    Synthesize, GST_RATES,
};
use crate::domain::services::Sampler;

const SPLIT_RATES: &[f64] = &[0.0, 2.5, 6.0, 9.0, 14.0];

pub fn collections() -> Vec<CollectionSpec> {
    vec![
        CollectionSpec::of::<HsnCode>("hsn_codes", 100),
        CollectionSpec::of::<SacCode>("sac_codes", 50),
        CollectionSpec::of::<GstinRecord>("gstin_records", 500),
        CollectionSpec::of::<EInvoice>("e_invoices", 1000),
        CollectionSpec::of::<EWayBill>("e_way_bills", 500),
        CollectionSpec::of::<CreditDebitNote>("credit_debit_notes", 200),
        CollectionSpec::of::<RcmTransaction>("rcm_transactions", 100),
        CollectionSpec::custom("gstr1", 12, monthly::<Gstr1>),
        CollectionSpec::custom("gstr3b", 12, monthly::<Gstr3b>),
        CollectionSpec::custom("gstr2a", 12, monthly::<Gstr2a>),
        CollectionSpec::custom("gst_reconciliation", 12, monthly::<GstReconciliation>),
        CollectionSpec::of::<GstAuditReport>("gst_audit_reports", 2),
    ]
}

/// Records tied to one closed calendar month
pub trait MonthlyReturn: Serialize + Sized {
    /// `months_back` is 1 for the month before the anchor month
    fn for_month(s: &mut Sampler, months_back: u32) -> Self;
}

fn monthly<T: MonthlyReturn>(s: &mut Sampler, count: usize) -> Result<Vec<Value>, serde_json::Error> {
    let records: Vec<T> = (1..=count as u32).map(|back| T::for_month(s, back)).collect();
    to_values(records)
}

/// HSN (goods) or SAC (services) rate entry
macro_rules! rate_code {
    ($name:ident, $id:ident, $code:ident) => {
        #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
        pub struct $name {
            pub $id: Uuid,
            pub $code: String,
            pub description: String,
            pub gst_rate: u8,
            pub cgst_rate: f64,
            pub sgst_rate: f64,
            pub igst_rate: u8,
            pub is_active: bool,
            pub created_date: DateTime<Utc>,
            pub last_updated: DateTime<Utc>,
        }
    };
}

rate_code!(HsnCode, hsn_id, hsn_code);
rate_code!(SacCode, sac_id, sac_code);

impl Synthesize for HsnCode {
    fn synthesize(s: &mut Sampler) -> Self {
        Self {
            hsn_id: s.uuid(),
            hsn_code: s.hsn_code(),
            description: s.text(200),
            gst_rate: s.choice(GST_RATES),
            cgst_rate: s.choice(SPLIT_RATES),
            sgst_rate: s.choice(SPLIT_RATES),
            igst_rate: s.choice(GST_RATES),
            is_active: s.coin(),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

impl Synthesize for SacCode {
    fn synthesize(s: &mut Sampler) -> Self {
        Self {
            sac_id: s.uuid(),
            // Service codes all live under chapter 99
            sac_code: format!("99{}", s.int(1000, 9999)),
            description: s.text(200),
            gst_rate: s.choice(GST_RATES),
            cgst_rate: s.choice(SPLIT_RATES),
            sgst_rate: s.choice(SPLIT_RATES),
            igst_rate: s.choice(GST_RATES),
            is_active: s.coin(),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GstinRecord {
    pub gstin_id: Uuid,
    pub gstin: String,
    pub legal_name: String,
    pub trade_name: String,
    pub address: String,
    pub state_code: String,
    pub registration_type: String,
    pub registration_date: DateTime<Utc>,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for GstinRecord {
    fn synthesize(s: &mut Sampler) -> Self {
        Self {
            gstin_id: s.uuid(),
            gstin: s.gstin(),
            legal_name: s.company(),
            trade_name: s.company(),
            address: s.address(),
            state_code: format!("{:02}", s.int(1, 37)),
            registration_type: s.choice_str(&[
                "Regular",
                "Composition",
                "Unregistered",
                "Input Service Distributor",
            ]),
            registration_date: last_two_years(s),
            status: s.choice_str(&["Active", "Inactive", "Suspended", "Cancelled"]),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EInvoice {
    pub invoice_id: String,
    pub invoice_date: DateTime<Utc>,
    pub invoice_number: String,
    pub customer_gstin: String,
    pub hsn_code: String,
    pub taxable_amount: f64,
    pub cgst_amount: f64,
    pub sgst_amount: f64,
    pub igst_amount: f64,
    pub total_amount: f64,
    /// Invoice reference number
    pub irn: Uuid,
    pub qr_code: Uuid,
    pub status: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for EInvoice {
    fn synthesize(s: &mut Sampler) -> Self {
        let invoice_date = last_year(s);
        Self {
            invoice_id: s.code("EINV", 8),
            invoice_date,
            invoice_number: s.code("INV", 8),
            customer_gstin: s.gstin(),
            hsn_code: s.hsn_code(),
            taxable_amount: s.amount(1_000.0, 100_000.0),
            cgst_amount: s.amount(50.0, 5_000.0),
            sgst_amount: s.amount(50.0, 5_000.0),
            igst_amount: s.amount(100.0, 10_000.0),
            total_amount: s.amount(1_100.0, 110_000.0),
            irn: s.uuid(),
            qr_code: s.uuid(),
            status: s.choice_str(&["Generated", "Cancelled", "Amended"]),
            created_by: s.person(),
            created_date: invoice_date,
            last_updated: s.plus_days(invoice_date, 1, 5),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EWayBill {
    pub eway_bill_id: String,
    pub bill_date: DateTime<Utc>,
    pub bill_number: String,
    pub invoice_id: String,
    pub from_gstin: String,
    pub to_gstin: String,
    pub transport_mode: String,
    pub vehicle_number: String,
    pub distance_km: u32,
    pub value: f64,
    pub status: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for EWayBill {
    fn synthesize(s: &mut Sampler) -> Self {
        let bill_date = last_year(s);
        Self {
            eway_bill_id: s.code("EWB", 8),
            bill_date,
            bill_number: s.code("EWB", 8),
            invoice_id: s.code("INV", 8),
            from_gstin: s.gstin(),
            to_gstin: s.gstin(),
            transport_mode: s.choice_str(&["Road", "Rail", "Air", "Ship"]),
            vehicle_number: s.code("VEH", 6),
            distance_km: s.int(10, 1000),
            value: s.amount(50_000.0, 500_000.0),
            status: s.choice_str(&["Generated", "Cancelled", "Expired"]),
            created_by: s.person(),
            created_date: bill_date,
            last_updated: s.plus_days(bill_date, 1, 5),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreditDebitNote {
    pub note_id: String,
    pub note_date: DateTime<Utc>,
    pub note_number: String,
    pub invoice_id: String,
    pub customer_gstin: String,
    pub note_type: String,
    pub reason: String,
    pub taxable_amount: f64,
    pub cgst_amount: f64,
    pub sgst_amount: f64,
    pub igst_amount: f64,
    pub total_amount: f64,
    pub status: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for CreditDebitNote {
    fn synthesize(s: &mut Sampler) -> Self {
        let note_date = last_year(s);
        Self {
            note_id: s.code("CDN", 8),
            note_date,
            note_number: s.code("CDN", 8),
            invoice_id: s.code("INV", 8),
            customer_gstin: s.gstin(),
            note_type: s.choice_str(&["Credit", "Debit"]),
            reason: s.choice_str(&[
                "Rate Difference",
                "Quantity Difference",
                "Quality Issue",
                "Service Issue",
            ]),
            taxable_amount: s.amount(1_000.0, 10_000.0),
            cgst_amount: s.amount(50.0, 500.0),
            sgst_amount: s.amount(50.0, 500.0),
            igst_amount: s.amount(100.0, 1_000.0),
            total_amount: s.amount(1_100.0, 11_000.0),
            status: s.choice_str(&["Draft", "Posted", "Cancelled"]),
            created_by: s.person(),
            created_date: note_date,
            last_updated: s.plus_days(note_date, 1, 5),
        }
    }
}

/// Reverse-charge purchase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RcmTransaction {
    pub rcm_id: String,
    pub transaction_date: DateTime<Utc>,
    pub supplier_gstin: String,
    pub invoice_number: String,
    pub invoice_date: DateTime<Utc>,
    pub hsn_code: String,
    pub taxable_amount: f64,
    pub cgst_amount: f64,
    pub sgst_amount: f64,
    pub igst_amount: f64,
    pub total_amount: f64,
    pub status: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for RcmTransaction {
    fn synthesize(s: &mut Sampler) -> Self {
        let transaction_date = last_year(s);
        Self {
            rcm_id: s.code("RCM", 8),
            transaction_date,
            supplier_gstin: s.gstin(),
            invoice_number: s.code("INV", 8),
            invoice_date: transaction_date,
            hsn_code: s.hsn_code(),
            taxable_amount: s.amount(1_000.0, 10_000.0),
            cgst_amount: s.amount(50.0, 500.0),
            sgst_amount: s.amount(50.0, 500.0),
            igst_amount: s.amount(100.0, 1_000.0),
            total_amount: s.amount(1_100.0, 11_000.0),
            status: s.choice_str(&["Pending", "Paid", "Cancelled"]),
            created_by: s.person(),
            created_date: transaction_date,
            last_updated: s.plus_days(transaction_date, 1, 5),
        }
    }
}

/// Outward supplies return
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gstr1 {
    pub return_id: String,
    pub return_period: String,
    pub filing_date: DateTime<Utc>,
    pub total_invoices: u32,
    pub total_taxable_value: f64,
    pub total_cgst: f64,
    pub total_sgst: f64,
    pub total_igst: f64,
    pub total_cess: f64,
    pub status: String,
    pub filing_status: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl MonthlyReturn for Gstr1 {
    fn for_month(s: &mut Sampler, months_back: u32) -> Self {
        let filing_date = filing_after(s, months_back);
        Self {
            return_id: s.code("GSTR1", 8),
            return_period: period_months_back(s, months_back),
            filing_date,
            total_invoices: s.int(100, 1000),
            total_taxable_value: s.amount(1_000_000.0, 10_000_000.0),
            total_cgst: s.amount(50_000.0, 500_000.0),
            total_sgst: s.amount(50_000.0, 500_000.0),
            total_igst: s.amount(100_000.0, 1_000_000.0),
            total_cess: s.amount(10_000.0, 100_000.0),
            status: s.choice_str(&["Draft", "Filed", "Amended"]),
            filing_status: s.choice_str(&["Pending", "Filed", "Late"]),
            created_by: s.person(),
            created_date: filing_date,
            last_updated: s.plus_days(filing_date, 1, 5),
        }
    }
}

/// Monthly summary return
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gstr3b {
    pub return_id: String,
    pub return_period: String,
    pub filing_date: DateTime<Utc>,
    pub outward_supplies: f64,
    pub inward_supplies: f64,
    pub input_tax_credit: f64,
    pub output_tax: f64,
    pub net_tax: f64,
    pub status: String,
    pub filing_status: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl MonthlyReturn for Gstr3b {
    fn for_month(s: &mut Sampler, months_back: u32) -> Self {
        let filing_date = filing_after(s, months_back);
        Self {
            return_id: s.code("GSTR3B", 8),
            return_period: period_months_back(s, months_back),
            filing_date,
            outward_supplies: s.amount(1_000_000.0, 10_000_000.0),
            inward_supplies: s.amount(800_000.0, 8_000_000.0),
            input_tax_credit: s.amount(100_000.0, 1_000_000.0),
            output_tax: s.amount(150_000.0, 1_500_000.0),
            net_tax: s.amount(50_000.0, 500_000.0),
            status: s.choice_str(&["Draft", "Filed", "Amended"]),
            filing_status: s.choice_str(&["Pending", "Filed", "Late"]),
            created_by: s.person(),
            created_date: filing_date,
            last_updated: s.plus_days(filing_date, 1, 5),
        }
    }
}

/// Auto-drafted inward supplies statement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gstr2a {
    pub return_id: String,
    pub return_period: String,
    pub generation_date: DateTime<Utc>,
    pub total_invoices: u32,
    pub total_taxable_value: f64,
    pub total_cgst: f64,
    pub total_sgst: f64,
    pub total_igst: f64,
    pub total_cess: f64,
    pub status: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl MonthlyReturn for Gstr2a {
    fn for_month(s: &mut Sampler, months_back: u32) -> Self {
        let generation_date = filing_after(s, months_back);
        Self {
            return_id: s.code("GSTR2A", 8),
            return_period: period_months_back(s, months_back),
            generation_date,
            total_invoices: s.int(50, 500),
            total_taxable_value: s.amount(800_000.0, 8_000_000.0),
            total_cgst: s.amount(40_000.0, 400_000.0),
            total_sgst: s.amount(40_000.0, 400_000.0),
            total_igst: s.amount(80_000.0, 800_000.0),
            total_cess: s.amount(8_000.0, 80_000.0),
            status: s.choice_str(&["Generated", "Reconciled", "Pending"]),
            created_by: s.person(),
            created_date: generation_date,
            last_updated: s.plus_days(generation_date, 1, 5),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GstReconciliation {
    pub report_id: String,
    pub report_period: String,
    pub generation_date: DateTime<Utc>,
    pub gstr1_value: f64,
    pub gstr3b_value: f64,
    pub gstr2a_value: f64,
    pub difference_amount: f64,
    pub reconciliation_status: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl MonthlyReturn for GstReconciliation {
    fn for_month(s: &mut Sampler, months_back: u32) -> Self {
        let generation_date = filing_after(s, months_back);
        Self {
            report_id: s.code("REC", 8),
            report_period: period_months_back(s, months_back),
            generation_date,
            gstr1_value: s.amount(1_000_000.0, 10_000_000.0),
            gstr3b_value: s.amount(1_000_000.0, 10_000_000.0),
            gstr2a_value: s.amount(800_000.0, 8_000_000.0),
            difference_amount: s.amount(-100_000.0, 100_000.0),
            reconciliation_status: s.choice_str(&["Matched", "Unmatched", "Partially Matched"]),
            created_by: s.person(),
            created_date: generation_date,
            last_updated: s.plus_days(generation_date, 1, 5),
        }
    }
}

/// Annual return / reconciliation statement (GSTR-9, GSTR-9C)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GstAuditReport {
    pub report_id: String,
    pub report_type: String,
    pub financial_year: String,
    pub generation_date: DateTime<Utc>,
    pub total_turnover: f64,
    pub total_tax_paid: f64,
    pub total_input_tax_credit: f64,
    pub audit_status: String,
    pub auditor_name: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for GstAuditReport {
    fn synthesize(s: &mut Sampler) -> Self {
        let generation_date = last_year(s);
        Self {
            report_id: s.code("GSTR9", 8),
            report_type: s.choice_str(&["GSTR-9", "GSTR-9C"]),
            financial_year: generation_date.format("%Y").to_string(),
            generation_date,
            total_turnover: s.amount(10_000_000.0, 100_000_000.0),
            total_tax_paid: s.amount(1_000_000.0, 10_000_000.0),
            total_input_tax_credit: s.amount(800_000.0, 8_000_000.0),
            audit_status: s.choice_str(&["Draft", "Final", "Filed"]),
            auditor_name: s.person(),
            created_by: s.person(),
            created_date: generation_date,
            last_updated: s.plus_days(generation_date, 1, 5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::generate;
    use chrono::TimeZone;

    fn sampler() -> Sampler {
        Sampler::seeded(51, Utc.with_ymd_and_hms(2024, 3, 24, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_monthly_returns_cover_distinct_closed_months() {
        let mut s = sampler();
        let values = monthly::<Gstr1>(&mut s, 12).unwrap();
        let periods: Vec<&str> = values
            .iter()
            .map(|v| v["return_period"].as_str().unwrap())
            .collect();

        assert_eq!(periods.len(), 12);
        assert_eq!(periods[0], "2024-02");
        assert_eq!(periods[11], "2023-03");

        let mut unique = periods.clone();
        unique.dedup();
        assert_eq!(unique.len(), 12);
    }

    #[test]
    fn test_sac_codes_are_chapter_99() {
        let mut s = sampler();
        for sac in generate::<SacCode>(&mut s, 30) {
            assert!(sac.sac_code.starts_with("99"));
            assert_eq!(sac.sac_code.len(), 6);
        }
    }

    #[test]
    fn test_rcm_invoice_date_matches_transaction() {
        let mut s = sampler();
        for rcm in generate::<RcmTransaction>(&mut s, 20) {
            assert_eq!(rcm.invoice_date, rcm.transaction_date);
        }
    }
}
