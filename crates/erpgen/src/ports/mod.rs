//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems.
//!
//! Implementations of these traits live in the CLI crate (MongoDB) and in
//! tests (in-memory).

mod document_store;

// Re-exports
pub use document_store::{Document, DocumentStore};
