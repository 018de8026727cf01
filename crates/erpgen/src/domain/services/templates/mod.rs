//! Templates - Named-slot text templates and their value dictionary
//!
//! A template is parsed once into literal text and [`Placeholder`] slots.
//! Parsing rejects any slot name outside the dictionary, so rendering a
//! parsed template never fails.

mod builtin;
mod catalog;

pub use catalog::TemplateCatalog;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::Duration;

use super::sampler::{group_thousands, Sampler};
use crate::domain::errors::TemplateError;
use crate::domain::value_objects::{ErpModule, TransactionType};

const CUSTOMERS: &[&str] = &[
    "ABC Ltd",
    "XYZ Corp",
    "PQR Industries",
    "LMN Enterprises",
    "RST Solutions",
];
const VENDORS: &[&str] = &[
    "Supplier A",
    "Supplier B",
    "Supplier C",
    "Supplier D",
    "Supplier E",
];
const BANKS: &[&str] = &[
    "HDFC Bank",
    "ICICI Bank",
    "SBI",
    "Axis Bank",
    "Kotak Mahindra Bank",
];
const PERIODS: &[&str] = &["January 2024", "February 2024", "March 2024"];
const STATUSES: &[&str] = &["Pending", "Processed", "Completed", "On Hold"];

/// Every slot name a template may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Customer,
    Vendor,
    Bank,
    OrderId,
    InvoiceId,
    InvId,
    CreditNoteId,
    ItemId,
    EmployeeId,
    PositionId,
    Period,
    Amount,
    Utilized,
    Status,
    Date,
    Gstr1Date,
    Gstr3bDate,
    Arn,
    EwbId,
    RefId,
    Count,
    Quantity,
    LeaveBalance,
    Days,
    Location1,
    Location2,
    Transaction,
    Module,
}

impl Placeholder {
    pub const ALL: [Placeholder; 28] = [
        Placeholder::Customer,
        Placeholder::Vendor,
        Placeholder::Bank,
        Placeholder::OrderId,
        Placeholder::InvoiceId,
        Placeholder::InvId,
        Placeholder::CreditNoteId,
        Placeholder::ItemId,
        Placeholder::EmployeeId,
        Placeholder::PositionId,
        Placeholder::Period,
        Placeholder::Amount,
        Placeholder::Utilized,
        Placeholder::Status,
        Placeholder::Date,
        Placeholder::Gstr1Date,
        Placeholder::Gstr3bDate,
        Placeholder::Arn,
        Placeholder::EwbId,
        Placeholder::RefId,
        Placeholder::Count,
        Placeholder::Quantity,
        Placeholder::LeaveBalance,
        Placeholder::Days,
        Placeholder::Location1,
        Placeholder::Location2,
        Placeholder::Transaction,
        Placeholder::Module,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Placeholder::Customer => "customer",
            Placeholder::Vendor => "vendor",
            Placeholder::Bank => "bank",
            Placeholder::OrderId => "order_id",
            Placeholder::InvoiceId => "invoice_id",
            Placeholder::InvId => "inv_id",
            Placeholder::CreditNoteId => "credit_note_id",
            Placeholder::ItemId => "item_id",
            Placeholder::EmployeeId => "employee_id",
            Placeholder::PositionId => "position_id",
            Placeholder::Period => "period",
            Placeholder::Amount => "amount",
            Placeholder::Utilized => "utilized",
            Placeholder::Status => "status",
            Placeholder::Date => "date",
            Placeholder::Gstr1Date => "gstr1_date",
            Placeholder::Gstr3bDate => "gstr3b_date",
            Placeholder::Arn => "arn",
            Placeholder::EwbId => "ewb_id",
            Placeholder::RefId => "ref_id",
            Placeholder::Count => "count",
            Placeholder::Quantity => "quantity",
            Placeholder::LeaveBalance => "leave_balance",
            Placeholder::Days => "days",
            Placeholder::Location1 => "location1",
            Placeholder::Location2 => "location2",
            Placeholder::Transaction => "transaction",
            Placeholder::Module => "module",
        }
    }

    /// Draw a fresh value for this slot
    pub fn sample(&self, s: &mut Sampler, module: ErpModule) -> String {
        match self {
            Placeholder::Customer => s.choice_str(CUSTOMERS),
            Placeholder::Vendor => s.choice_str(VENDORS),
            Placeholder::Bank => s.choice_str(BANKS),
            Placeholder::OrderId => format!("SO-2024-{}", s.int(1000, 9999)),
            Placeholder::InvoiceId | Placeholder::InvId => {
                format!("INV-2024-{}", s.int(1000, 9999))
            }
            Placeholder::CreditNoteId => format!("CN-2024-{}", s.int(1000, 9999)),
            Placeholder::ItemId => format!("ITEM-{}", s.int(1000, 9999)),
            Placeholder::EmployeeId => format!("EMP-{}", s.int(1000, 9999)),
            Placeholder::PositionId => format!("POS-{}", s.int(1000, 9999)),
            Placeholder::Period => s.choice_str(PERIODS),
            Placeholder::Amount => group_thousands(s.int(10_000, 1_000_000)),
            Placeholder::Utilized => group_thousands(s.int(5_000, 500_000)),
            Placeholder::Status => s.choice_str(STATUSES),
            Placeholder::Date => {
                let days = s.int(1, 30);
                format_day(s, days)
            }
            Placeholder::Gstr1Date => format_day(s, 10),
            Placeholder::Gstr3bDate => format_day(s, 15),
            Placeholder::Arn => format!("AA240324{}", s.int(1_000_000, 9_999_999)),
            Placeholder::EwbId => format!("EWB{}", s.int(10_000_000, 99_999_999)),
            Placeholder::RefId => format!("REF{}", s.int(100_000, 999_999)),
            Placeholder::Count => s.int(50, 500).to_string(),
            Placeholder::Quantity => s.int(10, 1000).to_string(),
            Placeholder::LeaveBalance => s.int(0, 30).to_string(),
            Placeholder::Days => s.int(20, 30).to_string(),
            Placeholder::Location1 => "Main Store".to_string(),
            Placeholder::Location2 => "Production Store".to_string(),
            Placeholder::Transaction => s.choice(&TransactionType::ALL).to_string(),
            Placeholder::Module => module.to_string(),
        }
    }
}

fn format_day(s: &Sampler, days_ahead: i64) -> String {
    (s.now() + Duration::days(days_ahead))
        .format("%d-%m-%Y")
        .to_string()
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Placeholder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Placeholder::ALL
            .iter()
            .find(|p| p.name() == s)
            .copied()
            .ok_or_else(|| format!("Unknown placeholder: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot(Placeholder),
}

/// A parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `source`, validating every `{slot}` against the dictionary.
    ///
    /// `{{` and `}}` produce literal braces.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let malformed = |reason: &str| TemplateError::Malformed {
            template: source.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = Vec::new();
        let mut text = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    text.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    text.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for n in chars.by_ref() {
                        if n == '}' {
                            closed = true;
                            break;
                        }
                        if n == '{' {
                            return Err(malformed("nested '{' inside placeholder"));
                        }
                        name.push(n);
                    }
                    if !closed {
                        return Err(malformed("unclosed '{'"));
                    }
                    let name = name.trim();
                    if name.is_empty() {
                        return Err(malformed("empty placeholder"));
                    }
                    let slot = name.parse::<Placeholder>().map_err(|_| {
                        TemplateError::UnknownPlaceholder {
                            name: name.to_string(),
                            template: source.to_string(),
                        }
                    })?;
                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    segments.push(Segment::Slot(slot));
                }
                '}' => return Err(malformed("unmatched '}'")),
                _ => text.push(c),
            }
        }
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Slots in order of first appearance, without duplicates
    pub fn placeholders(&self) -> Vec<Placeholder> {
        let mut seen = Vec::new();
        for segment in &self.segments {
            if let Segment::Slot(p) = segment {
                if !seen.contains(p) {
                    seen.push(*p);
                }
            }
        }
        seen
    }

    /// Fill every slot. Each distinct slot is drawn once per render, so a
    /// name repeated within one template gets the same value.
    pub fn render(&self, s: &mut Sampler, module: ErpModule) -> String {
        let mut values: HashMap<Placeholder, String> = HashMap::new();
        let mut out = String::with_capacity(self.source.len() + 16);
        for segment in &self.segments {
            match segment {
                Segment::Text(t) => out.push_str(t),
                Segment::Slot(p) => {
                    let value = values.entry(*p).or_insert_with(|| p.sample(s, module));
                    out.push_str(value);
                }
            }
        }
        out
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sampler() -> Sampler {
        Sampler::seeded(42, Utc.with_ymd_and_hms(2024, 3, 24, 9, 30, 0).unwrap())
    }

    #[test]
    fn test_placeholder_names_round_trip() {
        for p in Placeholder::ALL {
            assert_eq!(p.name().parse::<Placeholder>().unwrap(), p);
        }
        assert!("nonexistent".parse::<Placeholder>().is_err());
    }

    #[test]
    fn test_parse_and_render() {
        let t = Template::parse("What is the status of sales order {order_id}?").unwrap();
        assert_eq!(t.placeholders(), vec![Placeholder::OrderId]);

        let text = t.render(&mut sampler(), ErpModule::Sales);
        assert!(text.starts_with("What is the status of sales order SO-2024-"));
        assert!(text.ends_with('?'));
        assert!(!text.contains('{'));
    }

    #[test]
    fn test_unknown_placeholder_rejected() {
        let err = Template::parse("Hello {nonexistent}").unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnknownPlaceholder {
                name: "nonexistent".to_string(),
                template: "Hello {nonexistent}".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_templates_rejected() {
        for source in ["Open {customer", "Empty {} slot", "Stray } brace", "{a{b}}"] {
            assert!(
                matches!(Template::parse(source), Err(TemplateError::Malformed { .. })),
                "{} should be malformed",
                source
            );
        }
    }

    #[test]
    fn test_escaped_braces_are_literal() {
        let t = Template::parse("Use {{braces}} for {module}").unwrap();
        let text = t.render(&mut sampler(), ErpModule::Finance);
        assert_eq!(text, "Use {braces} for Finance");
    }

    #[test]
    fn test_repeated_slot_gets_one_value() {
        let t = Template::parse("{ref_id}/{ref_id}").unwrap();
        let text = t.render(&mut sampler(), ErpModule::Sales);
        let (a, b) = text.split_once('/').unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_date_slots_follow_clock_anchor() {
        let mut s = sampler();
        assert_eq!(Placeholder::Gstr1Date.sample(&mut s, ErpModule::Gst), "03-04-2024");
        assert_eq!(Placeholder::Gstr3bDate.sample(&mut s, ErpModule::Gst), "08-04-2024");
    }

    #[test]
    fn test_amount_uses_thousands_separators() {
        let mut s = sampler();
        for _ in 0..50 {
            let amount = Placeholder::Amount.sample(&mut s, ErpModule::Sales);
            assert!(amount.contains(','));
            let digits: String = amount.chars().filter(|c| *c != ',').collect();
            let n: i64 = digits.parse().unwrap();
            assert!((10_000..=1_000_000).contains(&n));
        }
    }
}
