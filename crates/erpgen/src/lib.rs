//! erpgen Domain Library
//!
//! Synthetic ERP data: typed business records, template-driven FAQ and
//! conversation records, and loading of generated collections into a
//! document store.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure generation logic
//!   - `entities/`: FAQ and conversation records
//!   - `records/`: One typed struct per ERP entity, grouped by business module
//!   - `value_objects/`: Tags (ErpModule, Category, GstType, Dataset, ...)
//!   - `services/`: Sampler, templates, query generator, conversation assembler
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `DocumentStore`: the database the loader seeds
//!
//! - **Application** (`application/`): Use cases
//!   - `DatasetService`: generate collections and write JSON files
//!   - `Loader`: seed a document store from a directory of JSON files
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use erpgen::{ErpModule, QueryGenerator, Sampler, TemplateCatalog};
//!
//! let generator = QueryGenerator::new(Arc::new(TemplateCatalog::builtin()?));
//! let mut sampler = Sampler::from_entropy();
//! let (question, metadata) = generator.generate_query(&mut sampler, ErpModule::Gst);
//! let answer = generator.generate_response(&mut sampler, &metadata);
//! ```

pub mod application;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use application::{
    DatasetService, FileOutcome, FileReport, GenerateOptions, GeneratedCollection, LoadReport,
    Loader,
};
pub use domain::records::{self, CollectionSpec, Synthesize};
pub use domain::services::{
    ConversationAssembler, Placeholder, QueryGenerator, Sampler, Template, TemplateCatalog,
};
pub use domain::{
    Category, ConversationRecord, Dataset, DomainError, ErpModule, FaqRecord, GstType,
    QueryMetadata, TemplateError, TransactionType, Turn, UserRole,
};
pub use ports::{Document, DocumentStore};
