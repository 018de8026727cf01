//! Template catalog - Per-module query/response pools with a generic fallback

use std::collections::HashMap;
use std::str::FromStr;

use serde::Deserialize;

use super::{builtin, Template};
use crate::domain::errors::{DomainError, TemplateError};
use crate::domain::value_objects::ErpModule;

/// Validated template pools.
///
/// A module without a registered pool resolves to the fallback pair, so every
/// lookup yields at least one template.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    queries: HashMap<ErpModule, Vec<Template>>,
    responses: HashMap<ErpModule, Vec<Template>>,
    fallback_query: Vec<Template>,
    fallback_response: Vec<Template>,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    fallback: Option<FallbackFile>,
    #[serde(default)]
    queries: HashMap<String, Vec<String>>,
    #[serde(default)]
    responses: HashMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct FallbackFile {
    query: Option<String>,
    response: Option<String>,
}

impl TemplateCatalog {
    /// The catalog shipped with the generator
    pub fn builtin() -> Result<Self, TemplateError> {
        let mut catalog = Self::with_fallback(builtin::FALLBACK_QUERY, builtin::FALLBACK_RESPONSE)?;
        for module in ErpModule::ALL {
            catalog.register_queries(module, builtin::queries(module))?;
            catalog.register_responses(module, builtin::responses(module))?;
        }
        Ok(catalog)
    }

    /// Empty catalog that resolves every module to the given fallback pair
    pub fn with_fallback(query: &str, response: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            queries: HashMap::new(),
            responses: HashMap::new(),
            fallback_query: vec![Template::parse(query)?],
            fallback_response: vec![Template::parse(response)?],
        })
    }

    /// Load a catalog from TOML.
    ///
    /// ```toml
    /// [fallback]
    /// query = "How do I process {transaction} in {module}?"
    /// response = "Done. Reference ID: {ref_id}"
    ///
    /// [queries]
    /// Sales = ["What is the status of sales order {order_id}?"]
    ///
    /// [responses]
    /// Sales = ["Sales order {order_id} status: {status}"]
    /// ```
    ///
    /// A missing `[fallback]` key keeps the built-in fallback text. Every
    /// template is validated before the catalog is returned.
    pub fn from_toml_str(content: &str) -> Result<Self, DomainError> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| DomainError::Validation(format!("Invalid template catalog: {}", e)))?;

        let fallback = file.fallback.unwrap_or(FallbackFile {
            query: None,
            response: None,
        });
        let mut catalog = Self::with_fallback(
            fallback.query.as_deref().unwrap_or(builtin::FALLBACK_QUERY),
            fallback
                .response
                .as_deref()
                .unwrap_or(builtin::FALLBACK_RESPONSE),
        )?;

        for (module, templates) in by_module("queries", &file.queries)? {
            catalog.register_queries(module, &templates)?;
        }
        for (module, templates) in by_module("responses", &file.responses)? {
            catalog.register_responses(module, &templates)?;
        }

        Ok(catalog)
    }

    /// Replace the query pool for `module`. An empty slice unregisters it.
    pub fn register_queries(
        &mut self,
        module: ErpModule,
        sources: &[&str],
    ) -> Result<(), TemplateError> {
        let parsed = parse_all(sources)?;
        if parsed.is_empty() {
            self.queries.remove(&module);
        } else {
            self.queries.insert(module, parsed);
        }
        Ok(())
    }

    /// Replace the response pool for `module`. An empty slice unregisters it.
    pub fn register_responses(
        &mut self,
        module: ErpModule,
        sources: &[&str],
    ) -> Result<(), TemplateError> {
        let parsed = parse_all(sources)?;
        if parsed.is_empty() {
            self.responses.remove(&module);
        } else {
            self.responses.insert(module, parsed);
        }
        Ok(())
    }

    pub fn queries_for(&self, module: ErpModule) -> &[Template] {
        self.queries
            .get(&module)
            .map(Vec::as_slice)
            .unwrap_or(&self.fallback_query)
    }

    pub fn responses_for(&self, module: ErpModule) -> &[Template] {
        self.responses
            .get(&module)
            .map(Vec::as_slice)
            .unwrap_or(&self.fallback_response)
    }

    pub fn has_queries(&self, module: ErpModule) -> bool {
        self.queries.contains_key(&module)
    }

    pub fn has_responses(&self, module: ErpModule) -> bool {
        self.responses.contains_key(&module)
    }

    pub fn fallback_query(&self) -> &Template {
        &self.fallback_query[0]
    }

    pub fn fallback_response(&self) -> &Template {
        &self.fallback_response[0]
    }
}

/// Resolve table keys to modules. Two keys naming the same module
/// (`Sales` and `sales`) are rejected.
fn by_module<'a>(
    table: &str,
    pools: &'a HashMap<String, Vec<String>>,
) -> Result<Vec<(ErpModule, Vec<&'a str>)>, DomainError> {
    let mut seen: HashMap<ErpModule, &str> = HashMap::new();
    let mut out = Vec::with_capacity(pools.len());

    for (key, templates) in pools {
        let module = ErpModule::from_str(key).map_err(DomainError::Validation)?;
        if let Some(previous) = seen.insert(module, key) {
            return Err(DomainError::Validation(format!(
                "[{}] lists {} twice ('{}' and '{}')",
                table, module, previous, key
            )));
        }
        out.push((module, templates.iter().map(String::as_str).collect()));
    }

    Ok(out)
}

fn parse_all(sources: &[&str]) -> Result<Vec<Template>, TemplateError> {
    sources.iter().map(|s| Template::parse(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = TemplateCatalog::builtin().unwrap();
        for module in ErpModule::ALL {
            assert!(!catalog.queries_for(module).is_empty());
            assert!(!catalog.responses_for(module).is_empty());
        }
        assert_eq!(catalog.queries_for(ErpModule::Sales).len(), 5);
    }

    #[test]
    fn test_purchase_falls_back() {
        let catalog = TemplateCatalog::builtin().unwrap();
        assert!(!catalog.has_queries(ErpModule::Purchase));
        let queries = catalog.queries_for(ErpModule::Purchase);
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].source(), "How do I process {transaction} in {module}?");
        assert_eq!(
            catalog.responses_for(ErpModule::Purchase)[0].source(),
            "Transaction processed successfully. Reference ID: {ref_id}"
        );
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
[queries]
Purchase = ["Where is the purchase order for {vendor}?"]

[responses]
Purchase = ["Purchase order for {vendor} is {status}"]
"#;
        let catalog = TemplateCatalog::from_toml_str(toml).unwrap();
        assert!(catalog.has_queries(ErpModule::Purchase));
        assert!(!catalog.has_queries(ErpModule::Sales));
        assert_eq!(
            catalog.fallback_query().source(),
            "How do I process {transaction} in {module}?"
        );
    }

    #[test]
    fn test_from_toml_rejects_unknown_placeholder() {
        let toml = r#"
[queries]
Sales = ["Hello {nonexistent}"]
"#;
        let err = TemplateCatalog::from_toml_str(toml).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Template(TemplateError::UnknownPlaceholder { .. })
        ));
    }

    #[test]
    fn test_from_toml_custom_fallback() {
        let toml = r#"
[fallback]
response = "Request for {module} logged as {ref_id}"
"#;
        let catalog = TemplateCatalog::from_toml_str(toml).unwrap();
        assert_eq!(
            catalog.fallback_response().source(),
            "Request for {module} logged as {ref_id}"
        );
        assert_eq!(
            catalog.responses_for(ErpModule::Gst)[0],
            *catalog.fallback_response()
        );
    }

    #[test]
    fn test_from_toml_rejects_module_listed_twice() {
        let toml = r#"
[queries]
Sales = ["What is the status of sales order {order_id}?"]
sales = ["Where is invoice {invoice_id}?"]
"#;
        match TemplateCatalog::from_toml_str(toml) {
            Err(DomainError::Validation(msg)) => assert!(msg.contains("twice")),
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_from_toml_rejects_unknown_module() {
        let toml = r#"
[queries]
Payroll = ["How do I process payroll for {period}?"]
"#;
        assert!(matches!(
            TemplateCatalog::from_toml_str(toml),
            Err(DomainError::Validation(_))
        ));
    }
}
