//! Domain Entities
//!
//! Interaction records produced by the template generators.
//! - FaqRecord: One question/answer pair with classification tags
//! - ConversationRecord: Multi-turn dialogue built from independent pairs

mod conversation;
mod faq;

pub use conversation::*;
pub use faq::*;
