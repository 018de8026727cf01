//! Conversation - Multi-turn dialogue

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Category, ErpModule, UserRole};

/// One exchange inside a conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Turn {
    /// 1-based position in the dialogue
    pub turn: u32,
    pub query: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

/// Conversation record as written to `conversations.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationRecord {
    pub id: String,
    pub module: ErpModule,
    pub category: Category,
    pub user_role: UserRole,
    pub dialogue: Vec<Turn>,
}

impl ConversationRecord {
    /// `CONV0001`, `CONV0002`, ...
    pub fn id_for(index: usize) -> String {
        format!("CONV{:04}", index)
    }

    pub fn turn_count(&self) -> usize {
        self.dialogue.len()
    }

    pub fn first_query(&self) -> Option<&str> {
        self.dialogue.first().map(|t| t.query.as_str())
    }
}
