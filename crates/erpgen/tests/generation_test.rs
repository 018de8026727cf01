//! Generation scenarios
//!
//! End-to-end checks over the public API: FAQ and conversation records,
//! JSON output files, reproducibility and PDIR extension.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use erpgen::{
    ConversationAssembler, ConversationRecord, Dataset, DatasetService, ErpModule, FaqRecord,
    GenerateOptions, QueryGenerator, Sampler, TemplateCatalog,
};
use serde_json::Value;

fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 24, 12, 0, 0).unwrap()
}

fn generator() -> QueryGenerator {
    QueryGenerator::new(Arc::new(TemplateCatalog::builtin().unwrap()))
}

#[test]
fn test_ten_sales_faqs() {
    let generator = generator();
    let mut s = Sampler::seeded(10, anchor());

    let faqs: Vec<FaqRecord> = (1..=10)
        .map(|i| generator.generate_faq(&mut s, FaqRecord::id_for(i), ErpModule::Sales))
        .collect();

    assert_eq!(faqs.len(), 10);
    for faq in &faqs {
        assert!(!faq.question.is_empty());
        assert!(!faq.answer.is_empty());

        let json = serde_json::to_value(faq).unwrap();
        assert_eq!(json["erp_module"], "Sales");
        assert!(json["gst_type"].is_null());
    }
    assert_eq!(faqs[9].id, "FAQ0010");
}

#[test]
fn test_gst_conversation_opens_with_a_gst_question() {
    let assembler = ConversationAssembler::new(generator());
    let mut s = Sampler::seeded(11, anchor());

    for i in 1..=50 {
        let conversation =
            assembler.generate_conversation(&mut s, ConversationRecord::id_for(i), ErpModule::Gst);
        let first = conversation.first_query().unwrap();
        assert!(
            ["GST", "GSTR", "ITC", "e-way"].iter().any(|k| first.contains(k)),
            "unexpected opening query: {}",
            first
        );
    }
}

#[test]
fn test_conversation_turns_are_ordered() {
    let assembler = ConversationAssembler::new(generator());
    let mut s = Sampler::seeded(12, anchor());

    for conversation in assembler.generate_conversations(&mut s, 100) {
        let turns = conversation.turn_count();
        assert!((2..=4).contains(&turns));

        let numbers: Vec<u32> = conversation.dialogue.iter().map(|t| t.turn).collect();
        assert_eq!(numbers, (1..=turns as u32).collect::<Vec<_>>());
        assert_eq!(conversation.dialogue[0].timestamp, anchor());
        assert!(conversation
            .dialogue
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp));
    }
}

#[test]
fn test_records_survive_a_json_round_trip() {
    let assembler = ConversationAssembler::new(generator());
    let mut s = Sampler::seeded(13, anchor());

    let faqs = generator().generate_faqs(&mut s, 20);
    let json = serde_json::to_string(&faqs).unwrap();
    assert_eq!(serde_json::from_str::<Vec<FaqRecord>>(&json).unwrap(), faqs);

    let conversations = assembler.generate_conversations(&mut s, 20);
    let json = serde_json::to_string(&conversations).unwrap();
    assert_eq!(
        serde_json::from_str::<Vec<ConversationRecord>>(&json).unwrap(),
        conversations
    );
}

#[test]
fn test_same_seed_same_files() {
    let service = DatasetService::builtin().unwrap();
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    let options = |dir: &std::path::Path| GenerateOptions {
        datasets: vec![Dataset::Gst, Dataset::Interaction],
        scale: 0.05,
        output_dir: dir.to_path_buf(),
        ..Default::default()
    };

    let a = service
        .generate(&mut Sampler::seeded(99, anchor()), &options(first.path()))
        .unwrap();
    let b = service
        .generate(&mut Sampler::seeded(99, anchor()), &options(second.path()))
        .unwrap();
    assert_eq!(a.len(), b.len());

    for collection in &a {
        let left = std::fs::read_to_string(first.path().join(format!("{}.json", collection.name)))
            .unwrap();
        let right =
            std::fs::read_to_string(second.path().join(format!("{}.json", collection.name)))
                .unwrap();
        assert_eq!(left, right, "{} differs", collection.name);
    }
}

#[test]
fn test_generate_writes_one_array_per_collection() {
    let service = DatasetService::builtin().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("nested").join("data");

    let options = GenerateOptions {
        datasets: vec![Dataset::Hr],
        counts: HashMap::from([("employee_records".to_string(), 4)]),
        scale: 0.01,
        output_dir: output_dir.clone(),
    };
    let written = service
        .generate(&mut Sampler::seeded(1, anchor()), &options)
        .unwrap();

    assert_eq!(written.len(), 8);
    for collection in &written {
        assert_eq!(collection.dataset, Dataset::Hr);
        let content = std::fs::read_to_string(&collection.path).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value.as_array().unwrap().len(), collection.records);
    }

    let employees = written
        .iter()
        .find(|c| c.name == "employee_records")
        .unwrap();
    assert_eq!(employees.records, 4);
    assert_eq!(employees.path, output_dir.join("employee_records.json"));
}

#[test]
fn test_currency_values_have_two_decimals() {
    let service = DatasetService::builtin().unwrap();
    let options = GenerateOptions {
        datasets: vec![Dataset::Finance, Dataset::Sales],
        scale: 0.02,
        ..Default::default()
    };
    let built = service
        .build(&mut Sampler::seeded(3, anchor()), &options)
        .unwrap();

    for field in ["total_amount", "amount", "grand_total"] {
        for (_, name, values) in &built {
            for value in values {
                if let Some(n) = value.get(field).and_then(Value::as_f64) {
                    let cents = n * 100.0;
                    assert!(
                        (cents - cents.round()).abs() < 1e-6,
                        "{}.{} = {}",
                        name,
                        field,
                        n
                    );
                }
            }
        }
    }
}

#[test]
fn test_extend_pdir_file() {
    let service = DatasetService::builtin().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let options = GenerateOptions {
        datasets: vec![Dataset::Quality],
        counts: HashMap::from([("pdir_entries".to_string(), 5)]),
        scale: 0.01,
        output_dir: dir.path().to_path_buf(),
    };
    service
        .generate(&mut Sampler::seeded(4, anchor()), &options)
        .unwrap();

    let path = dir.path().join("pdir_entries.json");
    let total = service
        .extend_pdir_file(&mut Sampler::seeded(5, anchor()), &path, 7)
        .unwrap();
    assert_eq!(total, 12);

    let entries: Vec<Value> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let known: Vec<&Value> = entries[..5].iter().map(|e| &e["product_code"]).collect();
    for added in &entries[5..] {
        assert!(known.contains(&&added["product_code"]));
    }
}

#[test]
fn test_extend_pdir_rejects_empty_file() {
    let service = DatasetService::builtin().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pdir_entries.json");
    std::fs::write(&path, "[]").unwrap();

    let err = service
        .extend_pdir_file(&mut Sampler::seeded(6, anchor()), &path, 3)
        .unwrap_err();
    assert!(matches!(err, erpgen::DomainError::Validation(_)));
}
