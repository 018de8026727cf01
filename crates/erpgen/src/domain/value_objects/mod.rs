//! Value Objects
//!
//! Immutable tags attached to generated records.

mod dataset;
mod erp_module;
mod tags;

pub use dataset::*;
pub use erp_module::*;
pub use tags::*;
