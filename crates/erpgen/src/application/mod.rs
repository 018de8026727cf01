//! Application Layer (Use Cases)
//!
//! Orchestrates generation and loading on top of the domain services and
//! the document store port.

mod dataset_service;
mod loader;

pub use dataset_service::{DatasetService, GenerateOptions, GeneratedCollection};
pub use loader::{FileOutcome, FileReport, LoadReport, Loader};
