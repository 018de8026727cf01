//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.
//! Contains entities, value objects, typed ERP records, domain services, and errors.

pub mod entities;
pub mod errors;
pub mod records;
pub mod services;
pub mod value_objects;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use value_objects::*;
