//! Query Generator - Template-driven question/answer pairs

use std::sync::Arc;

use tracing::debug;

use super::sampler::Sampler;
use super::templates::TemplateCatalog;
use crate::domain::entities::{FaqRecord, QueryMetadata};
use crate::domain::value_objects::{Category, ErpModule, GstType, TransactionType, UserRole};

/// Picks templates from a validated catalog and fills their slots
#[derive(Debug, Clone)]
pub struct QueryGenerator {
    catalog: Arc<TemplateCatalog>,
}

impl QueryGenerator {
    pub fn new(catalog: Arc<TemplateCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Render a random query for `module` and draw its metadata.
    ///
    /// Metadata fields are independent draws; `gst_type` is only drawn for GST.
    pub fn generate_query(&self, s: &mut Sampler, module: ErpModule) -> (String, QueryMetadata) {
        let template = s.pick(self.catalog.queries_for(module));
        let query = template.render(s, module);

        let metadata = QueryMetadata {
            erp_module: module,
            category: s.choice(&Category::ALL),
            gst_type: (module == ErpModule::Gst).then(|| s.choice(&GstType::ALL)),
            transaction_type: s.choice(&TransactionType::ALL),
            user_role: s.choice(&UserRole::ALL),
        };

        debug!(module = %module, template = template.source(), "Generated query");
        (query, metadata)
    }

    /// Render a random response for the module in `metadata`.
    ///
    /// Slot values are drawn fresh and are not tied to the query's values.
    pub fn generate_response(&self, s: &mut Sampler, metadata: &QueryMetadata) -> String {
        let template = s.pick(self.catalog.responses_for(metadata.erp_module));
        template.render(s, metadata.erp_module)
    }

    /// One complete FAQ record
    pub fn generate_faq(&self, s: &mut Sampler, id: String, module: ErpModule) -> FaqRecord {
        let (question, metadata) = self.generate_query(s, module);
        let answer = self.generate_response(s, &metadata);
        FaqRecord::new(id, question, answer, metadata)
    }

    /// `count` FAQ records with ids `FAQ0001..`, modules drawn uniformly
    pub fn generate_faqs(&self, s: &mut Sampler, count: usize) -> Vec<FaqRecord> {
        (1..=count)
            .map(|i| {
                let module = s.choice(&ErpModule::ALL);
                self.generate_faq(s, FaqRecord::id_for(i), module)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn generator() -> QueryGenerator {
        QueryGenerator::new(Arc::new(TemplateCatalog::builtin().unwrap()))
    }

    fn sampler(seed: u64) -> Sampler {
        Sampler::seeded(seed, Utc.with_ymd_and_hms(2024, 3, 24, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_every_module_renders_without_open_slots() {
        let generator = generator();
        let mut s = sampler(1);
        for module in ErpModule::ALL {
            for _ in 0..500 {
                let (query, metadata) = generator.generate_query(&mut s, module);
                let response = generator.generate_response(&mut s, &metadata);
                assert!(!query.is_empty() && !response.is_empty());
                assert!(!query.contains('{'), "{}", query);
                assert!(!response.contains('{'), "{}", response);
            }
        }
    }

    #[test]
    fn test_gst_type_only_for_gst() {
        let generator = generator();
        let mut s = sampler(2);
        for module in ErpModule::ALL {
            for _ in 0..50 {
                let (_, metadata) = generator.generate_query(&mut s, module);
                assert_eq!(metadata.gst_type.is_some(), module == ErpModule::Gst);
                assert_eq!(metadata.erp_module, module);
            }
        }
    }

    #[test]
    fn test_purchase_uses_fallback_pair() {
        let generator = generator();
        let mut s = sampler(3);
        let (query, metadata) = generator.generate_query(&mut s, ErpModule::Purchase);
        assert!(query.starts_with("How do I process "));
        assert!(query.ends_with(" in Purchase?"));

        let response = generator.generate_response(&mut s, &metadata);
        assert!(response.starts_with("Transaction processed successfully. Reference ID: REF"));
    }

    #[test]
    fn test_generate_faqs_numbers_ids() {
        let generator = generator();
        let faqs = generator.generate_faqs(&mut sampler(4), 3);
        let ids: Vec<_> = faqs.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["FAQ0001", "FAQ0002", "FAQ0003"]);
    }
}
