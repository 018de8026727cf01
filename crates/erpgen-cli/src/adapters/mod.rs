//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod mongo;

pub use mongo::MongoDocumentStore;
