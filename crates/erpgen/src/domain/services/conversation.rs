//! Conversation Assembler - Chains independent pairs into a dialogue

use chrono::Duration;

use super::query_generator::QueryGenerator;
use super::sampler::Sampler;
use crate::domain::entities::{ConversationRecord, Turn};
use crate::domain::value_objects::ErpModule;

pub const MIN_TURNS: u32 = 2;
pub const MAX_TURNS: u32 = 4;
/// Turn `k >= 2` is stamped `k * TURN_SPACING_MINUTES` after the first
pub const TURN_SPACING_MINUTES: i64 = 5;

#[derive(Debug, Clone)]
pub struct ConversationAssembler {
    queries: QueryGenerator,
}

impl ConversationAssembler {
    pub fn new(queries: QueryGenerator) -> Self {
        Self { queries }
    }

    /// Build one conversation for `module`.
    ///
    /// Each turn is an independent query/response draw; category and user
    /// role of the record come from the first turn.
    pub fn generate_conversation(
        &self,
        s: &mut Sampler,
        id: String,
        module: ErpModule,
    ) -> ConversationRecord {
        let turns = s.int(MIN_TURNS, MAX_TURNS);
        let start = s.now();

        let (first_query, first_meta) = self.queries.generate_query(s, module);
        let first_response = self.queries.generate_response(s, &first_meta);

        let mut dialogue = Vec::with_capacity(turns as usize);
        dialogue.push(Turn {
            turn: 1,
            query: first_query,
            response: first_response,
            timestamp: start,
        });

        for turn in 2..=turns {
            let (query, metadata) = self.queries.generate_query(s, module);
            let response = self.queries.generate_response(s, &metadata);
            dialogue.push(Turn {
                turn,
                query,
                response,
                timestamp: start + Duration::minutes(TURN_SPACING_MINUTES * i64::from(turn)),
            });
        }

        ConversationRecord {
            id,
            module,
            category: first_meta.category,
            user_role: first_meta.user_role,
            dialogue,
        }
    }

    /// `count` conversations with ids `CONV0001..`, modules drawn uniformly
    pub fn generate_conversations(&self, s: &mut Sampler, count: usize) -> Vec<ConversationRecord> {
        (1..=count)
            .map(|i| {
                let module = s.choice(&ErpModule::ALL);
                self.generate_conversation(s, ConversationRecord::id_for(i), module)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::TemplateCatalog;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn assembler() -> ConversationAssembler {
        ConversationAssembler::new(QueryGenerator::new(Arc::new(
            TemplateCatalog::builtin().unwrap(),
        )))
    }

    #[test]
    fn test_turns_are_numbered_and_ordered() {
        let anchor = Utc.with_ymd_and_hms(2024, 3, 24, 12, 0, 0).unwrap();
        let mut s = Sampler::seeded(10, anchor);
        let assembler = assembler();

        for module in ErpModule::ALL {
            for _ in 0..100 {
                let conv = assembler.generate_conversation(&mut s, "CONV0001".into(), module);
                let n = conv.turn_count() as u32;
                assert!((MIN_TURNS..=MAX_TURNS).contains(&n));

                for (i, turn) in conv.dialogue.iter().enumerate() {
                    assert_eq!(turn.turn, i as u32 + 1);
                }
                assert!(conv
                    .dialogue
                    .windows(2)
                    .all(|w| w[0].timestamp <= w[1].timestamp));
                assert_eq!(conv.dialogue[0].timestamp, anchor);
            }
        }
    }

    #[test]
    fn test_second_turn_is_ten_minutes_after_first() {
        let anchor = Utc.with_ymd_and_hms(2024, 3, 24, 12, 0, 0).unwrap();
        let mut s = Sampler::seeded(11, anchor);
        let conv = assembler().generate_conversation(&mut s, "CONV0001".into(), ErpModule::Hr);
        assert_eq!(conv.dialogue[1].timestamp, anchor + Duration::minutes(10));
    }
}
