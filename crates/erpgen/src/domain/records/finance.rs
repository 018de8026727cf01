//! Finance - Ledgers, tax setup, payments, journals, GST invoices and returns

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{last_two_years, last_year, period_of, CollectionSpec, Synthesize, GST_RATES};
use crate::domain::services::sampler::round2;
use crate::domain::services::Sampler;

const SPLIT_RATES: &[f64] = &[0.0, 2.5, 6.0, 9.0, 14.0];

pub fn collections() -> Vec<CollectionSpec> {
    vec![
        CollectionSpec::of::<LedgerAccount>("ledger_accounts", 500),
        CollectionSpec::of::<GstConfiguration>("gst_configurations", 50),
        CollectionSpec::of::<PaymentTerm>("payment_terms", 20),
        CollectionSpec::of::<TaxCode>("tax_codes", 30),
        CollectionSpec::of::<Payment>("payment_processing", 1000),
        CollectionSpec::of::<JournalEntry>("journal_entries", 1000),
        CollectionSpec::of::<GstInvoice>("gst_invoices", 1000),
        CollectionSpec::of::<GstReturn>("gst_returns", 100),
        CollectionSpec::of::<LedgerBalanceReport>("ledger_balance_reports", 200),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerAccount {
    pub account_id: Uuid,
    pub account_code: String,
    pub account_name: String,
    pub account_type: String,
    /// Set for roughly 30% of accounts
    pub parent_account: Option<String>,
    pub description: String,
    pub is_active: bool,
    pub opening_balance: f64,
    pub current_balance: f64,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for LedgerAccount {
    fn synthesize(s: &mut Sampler) -> Self {
        Self {
            account_id: s.uuid(),
            account_code: s.code("ACC", 6),
            account_name: s.company(),
            account_type: s.choice_str(&["Asset", "Liability", "Income", "Expense", "Equity"]),
            parent_account: s.chance(0.3).then(|| s.code("ACC", 6)),
            description: s.text(200),
            is_active: s.coin(),
            opening_balance: s.amount(-1_000_000.0, 1_000_000.0),
            current_balance: s.amount(-1_000_000.0, 1_000_000.0),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GstConfiguration {
    pub config_id: Uuid,
    pub hsn_code: String,
    pub description: String,
    pub gst_rate: u8,
    pub cgst_rate: f64,
    pub sgst_rate: f64,
    pub igst_rate: u8,
    pub is_active: bool,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for GstConfiguration {
    fn synthesize(s: &mut Sampler) -> Self {
        Self {
            config_id: s.uuid(),
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

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentTerm {
    pub term_id: Uuid,
    pub term_code: String,
    pub term_name: String,
    pub days: u32,
    pub description: String,
    pub is_active: bool,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for PaymentTerm {
    fn synthesize(s: &mut Sampler) -> Self {
        Self {
            term_id: s.uuid(),
            term_code: s.code("PT", 4),
            term_name: s.choice_str(&["Immediate", "Net 15", "Net 30", "Net 45", "Net 60", "Net 90"]),
            days: s.choice(&[0, 15, 30, 45, 60, 90]),
            description: s.text(200),
            is_active: s.coin(),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxCode {
    pub code_id: Uuid,
    pub tax_code: String,
    pub tax_name: String,
    pub rate: f64,
    pub description: String,
    pub is_active: bool,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for TaxCode {
    fn synthesize(s: &mut Sampler) -> Self {
        Self {
            code_id: s.uuid(),
            tax_code: s.code("TAX", 4),
            tax_name: s.choice_str(&["VAT", "CST", "Service Tax", "Excise", "Customs"]),
            rate: s.amount(0.0, 28.0),
            description: s.text(200),
            is_active: s.coin(),
            created_date: last_two_years(s),
            last_updated: last_year(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub payment_id: String,
    pub reference_id: String,
    pub payment_date: DateTime<Utc>,
    pub amount: f64,
    pub payment_mode: String,
    pub payment_type: String,
    pub account_id: String,
    pub status: String,
    pub remarks: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for Payment {
    fn synthesize(s: &mut Sampler) -> Self {
        let payment_date = last_year(s);
        Self {
            payment_id: s.code("PAY", 8),
            reference_id: s.code("REF", 8),
            payment_date,
            amount: s.amount(1_000.0, 100_000.0),
            payment_mode: s.choice_str(&["Cash", "Bank Transfer", "Cheque", "Credit Card", "UPI"]),
            payment_type: s.choice_str(&["Advance", "Regular", "Final", "Refund"]),
            account_id: s.code("ACC", 6),
            status: s.choice_str(&["Pending", "Completed", "Failed", "Cancelled"]),
            remarks: s.text(200),
            created_by: s.person(),
            created_date: payment_date,
            last_updated: s.plus_days(payment_date, 1, 5),
        }
    }
}

/// One side of a journal entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalLine {
    pub account_id: String,
    pub debit_amount: f64,
    pub credit_amount: f64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    pub entry_id: String,
    pub entry_date: DateTime<Utc>,
    pub reference: String,
    pub description: String,
    /// A debit line followed by a credit line
    pub entries: Vec<JournalLine>,
    pub total_debit: f64,
    pub total_credit: f64,
    pub status: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for JournalEntry {
    fn synthesize(s: &mut Sampler) -> Self {
        let entry_date = last_year(s);
        let entries = vec![
            JournalLine {
                account_id: s.code("ACC", 6),
                debit_amount: s.amount(0.0, 100_000.0),
                credit_amount: 0.0,
                description: s.text(100),
            },
            JournalLine {
                account_id: s.code("ACC", 6),
                debit_amount: 0.0,
                credit_amount: s.amount(0.0, 100_000.0),
                description: s.text(100),
            },
        ];
        let total_debit = round2(entries.iter().map(|l| l.debit_amount).sum());
        let total_credit = round2(entries.iter().map(|l| l.credit_amount).sum());

        Self {
            entry_id: s.code("JRN", 8),
            entry_date,
            reference: s.code("REF", 8),
            description: s.text(200),
            entries,
            total_debit,
            total_credit,
            status: s.choice_str(&["Draft", "Posted", "Void"]),
            created_by: s.person(),
            created_date: entry_date,
            last_updated: s.plus_days(entry_date, 1, 5),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GstInvoice {
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
    pub status: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for GstInvoice {
    fn synthesize(s: &mut Sampler) -> Self {
        let invoice_date = last_year(s);
        Self {
            invoice_id: s.code("GST", 8),
            invoice_date,
            invoice_number: s.code("INV", 8),
            customer_gstin: s.gstin(),
            hsn_code: s.hsn_code(),
            taxable_amount: s.amount(1_000.0, 100_000.0),
            cgst_amount: s.amount(50.0, 5_000.0),
            sgst_amount: s.amount(50.0, 5_000.0),
            igst_amount: s.amount(100.0, 10_000.0),
            total_amount: s.amount(1_100.0, 110_000.0),
            status: s.choice_str(&["Draft", "Posted", "Cancelled"]),
            created_by: s.person(),
            created_date: invoice_date,
            last_updated: s.plus_days(invoice_date, 1, 5),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GstReturn {
    pub return_id: String,
    pub return_type: String,
    /// `YYYY-MM` of the filing date
    pub return_period: String,
    pub filing_date: DateTime<Utc>,
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

impl Synthesize for GstReturn {
    fn synthesize(s: &mut Sampler) -> Self {
        let filing_date = last_year(s);
        Self {
            return_id: s.code("GST", 8),
            return_type: s.choice_str(&["GSTR-1", "GSTR-3B"]),
            return_period: period_of(filing_date),
            filing_date,
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

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerBalanceReport {
    pub report_id: String,
    pub account_id: String,
    pub report_date: DateTime<Utc>,
    pub opening_balance: f64,
    pub debit_total: f64,
    pub credit_total: f64,
    pub closing_balance: f64,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Synthesize for LedgerBalanceReport {
    fn synthesize(s: &mut Sampler) -> Self {
        let report_date = last_year(s);
        Self {
            report_id: s.code("LBR", 8),
            account_id: s.code("ACC", 6),
            report_date,
            opening_balance: s.amount(-1_000_000.0, 1_000_000.0),
            debit_total: s.amount(0.0, 1_000_000.0),
            credit_total: s.amount(0.0, 1_000_000.0),
            closing_balance: s.amount(-1_000_000.0, 1_000_000.0),
            created_by: s.person(),
            created_date: report_date,
            last_updated: s.plus_days(report_date, 1, 5),
        }
    }
}
