//! Record tags - Independent classification draws attached to FAQ metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// FAQ / conversation category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Process,
    Report,
    Configuration,
    Compliance,
    Transaction,
    Analysis,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Process,
        Category::Report,
        Category::Configuration,
        Category::Compliance,
        Category::Transaction,
        Category::Analysis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Process => "Process",
            Category::Report => "Report",
            Category::Configuration => "Configuration",
            Category::Compliance => "Compliance",
            Category::Transaction => "Transaction",
            Category::Analysis => "Analysis",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_tag(&Self::ALL, s, Self::as_str).ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// GST component a question refers to. Only set for the GST domain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum GstType {
    Cgst,
    Sgst,
    Igst,
    Utgst,
}

impl GstType {
    pub const ALL: [GstType; 4] = [GstType::Cgst, GstType::Sgst, GstType::Igst, GstType::Utgst];

    pub fn as_str(&self) -> &'static str {
        match self {
            GstType::Cgst => "CGST",
            GstType::Sgst => "SGST",
            GstType::Igst => "IGST",
            GstType::Utgst => "UTGST",
        }
    }
}

impl fmt::Display for GstType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GstType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_tag(&Self::ALL, s, Self::as_str).ok_or_else(|| format!("Unknown GST type: {}", s))
    }
}

/// Kind of ERP transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Invoice,
    Return,
    Payment,
    #[serde(rename = "Credit Note")]
    CreditNote,
    #[serde(rename = "Debit Note")]
    DebitNote,
    #[serde(rename = "E-way Bill")]
    EwayBill,
}

impl TransactionType {
    pub const ALL: [TransactionType; 6] = [
        TransactionType::Invoice,
        TransactionType::Return,
        TransactionType::Payment,
        TransactionType::CreditNote,
        TransactionType::DebitNote,
        TransactionType::EwayBill,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Invoice => "Invoice",
            TransactionType::Return => "Return",
            TransactionType::Payment => "Payment",
            TransactionType::CreditNote => "Credit Note",
            TransactionType::DebitNote => "Debit Note",
            TransactionType::EwayBill => "E-way Bill",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_tag(&Self::ALL, s, Self::as_str)
            .ok_or_else(|| format!("Unknown transaction type: {}", s))
    }
}

/// Role of the user asking the question
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserRole {
    #[serde(rename = "Sales Manager")]
    SalesManager,
    #[serde(rename = "Purchase Officer")]
    PurchaseOfficer,
    #[serde(rename = "Finance Executive")]
    FinanceExecutive,
    #[serde(rename = "GST Officer")]
    GstOfficer,
    #[serde(rename = "Inventory Manager")]
    InventoryManager,
}

impl UserRole {
    pub const ALL: [UserRole; 5] = [
        UserRole::SalesManager,
        UserRole::PurchaseOfficer,
        UserRole::FinanceExecutive,
        UserRole::GstOfficer,
        UserRole::InventoryManager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SalesManager => "Sales Manager",
            UserRole::PurchaseOfficer => "Purchase Officer",
            UserRole::FinanceExecutive => "Finance Executive",
            UserRole::GstOfficer => "GST Officer",
            UserRole::InventoryManager => "Inventory Manager",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_tag(&Self::ALL, s, Self::as_str).ok_or_else(|| format!("Unknown user role: {}", s))
    }
}

/// Case-insensitive lookup of a tag by its display label.
fn match_tag<T: Copy>(all: &[T], s: &str, label: fn(&T) -> &'static str) -> Option<T> {
    all.iter().copied().find(|t| label(t).eq_ignore_ascii_case(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_word_tags_keep_spaces() {
        assert_eq!(
            serde_json::to_string(&TransactionType::EwayBill).unwrap(),
            "\"E-way Bill\""
        );
        assert_eq!(
            serde_json::to_string(&UserRole::GstOfficer).unwrap(),
            "\"GST Officer\""
        );
        assert_eq!(serde_json::to_string(&GstType::Utgst).unwrap(), "\"UTGST\"");
    }

    #[test]
    fn test_display_matches_serialized_form() {
        for c in Category::ALL {
            assert_eq!(serde_json::to_string(&c).unwrap(), format!("\"{}\"", c));
        }
        for g in GstType::ALL {
            assert_eq!(serde_json::to_string(&g).unwrap(), format!("\"{}\"", g));
        }
        for t in TransactionType::ALL {
            assert_eq!(serde_json::to_string(&t).unwrap(), format!("\"{}\"", t));
        }
        for r in UserRole::ALL {
            assert_eq!(serde_json::to_string(&r).unwrap(), format!("\"{}\"", r));
        }
    }

    #[test]
    fn test_from_str() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>().unwrap(), c);
        }
        for r in UserRole::ALL {
            assert_eq!(r.as_str().parse::<UserRole>().unwrap(), r);
        }
        assert_eq!("igst".parse::<GstType>().unwrap(), GstType::Igst);
        assert_eq!(
            "credit note".parse::<TransactionType>().unwrap(),
            TransactionType::CreditNote
        );
        assert!("VAT".parse::<GstType>().is_err());
        assert!("Manager".parse::<UserRole>().is_err());
    }
}
