//! FAQ - Single question/answer pair

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Category, ErpModule, GstType, TransactionType, UserRole};

/// Classification drawn alongside a generated query.
///
/// `gst_type` is only ever set for the GST module.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryMetadata {
    pub erp_module: ErpModule,
    pub category: Category,
    pub gst_type: Option<GstType>,
    pub transaction_type: TransactionType,
    pub user_role: UserRole,
}

/// FAQ record as written to `faqs.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqRecord {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: Category,
    pub erp_module: ErpModule,
    pub gst_type: Option<GstType>,
    pub transaction_type: TransactionType,
    pub user_role: UserRole,
}

impl FaqRecord {
    pub fn new(id: String, question: String, answer: String, metadata: QueryMetadata) -> Self {
        Self {
            id,
            question,
            answer,
            category: metadata.category,
            erp_module: metadata.erp_module,
            gst_type: metadata.gst_type,
            transaction_type: metadata.transaction_type,
            user_role: metadata.user_role,
        }
    }

    /// `FAQ0001`, `FAQ0002`, ...
    pub fn id_for(index: usize) -> String {
        format!("FAQ{:04}", index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_gst_faq_serializes_null_gst_type() {
        let faq = FaqRecord::new(
            FaqRecord::id_for(1),
            "What is the status of sales order SO-2024-1234?".to_string(),
            "Sales order SO-2024-1234 status: Pending. Expected delivery: 01-04-2024".to_string(),
            QueryMetadata {
                erp_module: ErpModule::Sales,
                category: Category::Process,
                gst_type: None,
                transaction_type: TransactionType::CreditNote,
                user_role: UserRole::SalesManager,
            },
        );

        let json = serde_json::to_value(&faq).unwrap();
        assert_eq!(json["id"], "FAQ0001");
        assert_eq!(json["erp_module"], "Sales");
        assert!(json["gst_type"].is_null());
        assert_eq!(json["transaction_type"], "Credit Note");
        assert_eq!(json["user_role"], "Sales Manager");
    }
}
