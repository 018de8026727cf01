//! Domain Services
//!
//! Generation logic shared by every dataset. All randomness flows through an
//! explicit [`Sampler`].

mod conversation;
mod query_generator;
pub mod sampler;
pub mod templates;

pub use conversation::{ConversationAssembler, MAX_TURNS, MIN_TURNS, TURN_SPACING_MINUTES};
pub use query_generator::QueryGenerator;
pub use sampler::Sampler;
pub use templates::{Placeholder, Template, TemplateCatalog};
