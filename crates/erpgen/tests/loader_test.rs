//! Loader tests against an in-memory document store

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use erpgen::{Document, DocumentStore, DomainError, FileOutcome, Loader};
use serde_json::json;

/// Records inserts; can be told to fail a collection or the whole connection
#[derive(Default)]
struct MemoryStore {
    collections: Mutex<BTreeMap<String, Vec<Document>>>,
    reject: Option<String>,
    disconnect_on: Option<String>,
    unreachable: bool,
}

impl MemoryStore {
    fn rejecting(collection: &str) -> Self {
        Self {
            reject: Some(collection.to_string()),
            ..Default::default()
        }
    }

    fn disconnecting(collection: &str) -> Self {
        Self {
            disconnect_on: Some(collection.to_string()),
            ..Default::default()
        }
    }

    fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Default::default()
        }
    }

    fn len(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .map_or(0, Vec::len)
    }

    fn check(&self, collection: &str) -> Result<(), DomainError> {
        if self.unreachable {
            return Err(DomainError::Connection("server selection timed out".into()));
        }
        if self.disconnect_on.as_deref() == Some(collection) {
            return Err(DomainError::Connection("connection reset".into()));
        }
        if self.reject.as_deref() == Some(collection) {
            return Err(DomainError::insert(collection, "duplicate key"));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn ping(&self) -> Result<(), DomainError> {
        if self.unreachable {
            return Err(DomainError::Connection("server selection timed out".into()));
        }
        Ok(())
    }

    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> Result<usize, DomainError> {
        self.check(collection)?;
        let n = docs.len();
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .extend(docs);
        Ok(n)
    }

    async fn insert_one(&self, collection: &str, doc: Document) -> Result<String, DomainError> {
        self.check(collection)?;
        let mut collections = self.collections.lock().unwrap();
        let docs = collections.entry(collection.to_string()).or_default();
        docs.push(doc);
        Ok(format!("{}-{}", collection, docs.len()))
    }

    async fn collection_names(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.collections.lock().unwrap().keys().cloned().collect())
    }

    async fn find_one(&self, collection: &str) -> Result<Option<Document>, DomainError> {
        Ok(self
            .collections
            .lock()
            .unwrap()
            .get(collection)
            .and_then(|docs| docs.first().cloned()))
    }
}

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

#[tokio::test]
async fn test_load_dir_outcomes() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a_orders.json", &json!([{"id": 1}, {"id": 2}, {"id": 3}]).to_string());
    write(dir.path(), "b_settings.json", &json!({"currency": "INR"}).to_string());
    write(dir.path(), "c_empty.json", "[]");
    write(dir.path(), "d_broken.json", "[{\"id\": 1,");
    write(dir.path(), "e_after.json", &json!([{"id": 9}]).to_string());
    write(dir.path(), "notes.txt", "not a collection");

    let store = Arc::new(MemoryStore::default());
    let loader = Loader::new(store.clone());
    let report = loader.load_dir(dir.path()).await.unwrap();

    let collections: Vec<&str> = report.files.iter().map(|f| f.collection.as_str()).collect();
    assert_eq!(
        collections,
        vec!["a_orders", "b_settings", "c_empty", "d_broken", "e_after"]
    );

    assert_eq!(report.outcome_of("a_orders"), Some(&FileOutcome::Inserted(3)));
    assert_eq!(report.outcome_of("b_settings"), Some(&FileOutcome::Inserted(1)));
    assert!(matches!(report.outcome_of("c_empty"), Some(FileOutcome::Skipped(_))));
    assert!(matches!(report.outcome_of("d_broken"), Some(FileOutcome::Failed(_))));
    assert_eq!(report.outcome_of("e_after"), Some(&FileOutcome::Inserted(1)));

    assert_eq!(report.inserted(), 5);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.skipped(), 1);
    assert_eq!(store.len("a_orders"), 3);
    assert_eq!(store.len("c_empty"), 0);
}

#[tokio::test]
async fn test_insert_failure_does_not_stop_the_run() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "grn.json", &json!([{"grn_id": "GRN00000001"}]).to_string());
    write(dir.path(), "invoices.json", &json!([{"invoice_id": "INV00000001"}]).to_string());

    let store = Arc::new(MemoryStore::rejecting("grn"));
    let report = Loader::new(store.clone()).load_dir(dir.path()).await.unwrap();

    match report.outcome_of("grn") {
        Some(FileOutcome::Failed(reason)) => assert!(reason.contains("duplicate key")),
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(report.outcome_of("invoices"), Some(&FileOutcome::Inserted(1)));
    assert_eq!(store.len("invoices"), 1);
}

#[tokio::test]
async fn test_non_object_payloads_fail_per_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "numbers.json", "[1, 2, 3]");
    write(dir.path(), "scalar.json", "\"hello\"");

    let store = Arc::new(MemoryStore::default());
    let report = Loader::new(store.clone()).load_dir(dir.path()).await.unwrap();

    assert_eq!(report.failed(), 2);
    assert_eq!(store.len("numbers"), 0);
}

#[tokio::test]
async fn test_ping_failure_is_fatal() {
    let loader = Loader::new(Arc::new(MemoryStore::unreachable()));
    let err = loader.ping().await.unwrap_err();
    assert!(err.is_fatal());
    assert!(matches!(err, DomainError::Connection(_)));
}

#[tokio::test]
async fn test_connection_lost_mid_run_fails_only_that_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a_first.json", &json!([{"id": 1}]).to_string());
    write(dir.path(), "b_second.json", &json!([{"id": 2}, {"id": 3}]).to_string());
    write(dir.path(), "c_third.json", &json!({"id": 4}).to_string());

    let store = Arc::new(MemoryStore::disconnecting("a_first"));
    let report = Loader::new(store.clone()).load_dir(dir.path()).await.unwrap();

    match report.outcome_of("a_first") {
        Some(FileOutcome::Failed(reason)) => assert!(reason.contains("connection reset")),
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(report.outcome_of("b_second"), Some(&FileOutcome::Inserted(2)));
    assert_eq!(report.outcome_of("c_third"), Some(&FileOutcome::Inserted(1)));
    assert_eq!(store.len("a_first"), 0);
    assert_eq!(store.len("b_second"), 2);
    assert_eq!(report.failed(), 1);
}

#[tokio::test]
async fn test_missing_and_empty_directories() {
    let loader = Loader::new(Arc::new(MemoryStore::default()));

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    assert!(matches!(
        loader.load_dir(&missing).await,
        Err(DomainError::Io { .. })
    ));

    let report = loader.load_dir(dir.path()).await.unwrap();
    assert!(report.is_empty());
}

#[tokio::test]
async fn test_inspect_returns_one_sample_per_collection() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "zones.json", &json!([{"zone": "A"}, {"zone": "B"}]).to_string());
    write(dir.path(), "codes.json", &json!({"code": "99"}).to_string());

    let loader = Loader::new(Arc::new(MemoryStore::default()));
    loader.load_dir(dir.path()).await.unwrap();

    let samples = loader.inspect().await.unwrap();
    let names: Vec<&str> = samples.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["codes", "zones"]);
    assert_eq!(samples[1].1.as_ref().unwrap()["zone"], "A");
}
