//! Loader Application Service (Use Case)
//!
//! Seeds a document store from a directory of JSON collection files.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;

use crate::domain::DomainError;
use crate::ports::{Document, DocumentStore};

/// What happened to one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Inserted(usize),
    Skipped(String),
    Failed(String),
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::Inserted(n) => write!(f, "inserted {}", n),
            FileOutcome::Skipped(reason) => write!(f, "skipped ({})", reason),
            FileOutcome::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub collection: String,
    pub outcome: FileOutcome,
}

/// Per-file results of one loading run, in load order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub files: Vec<FileReport>,
}

impl LoadReport {
    pub fn inserted(&self) -> usize {
        self.files
            .iter()
            .map(|f| match f.outcome {
                FileOutcome::Inserted(n) => n,
                _ => 0,
            })
            .sum()
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped(_)))
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn outcome_of(&self, collection: &str) -> Option<&FileOutcome> {
        self.files
            .iter()
            .find(|f| f.collection == collection)
            .map(|f| &f.outcome)
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }
}

/// Application service for seeding a [`DocumentStore`]
pub struct Loader<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> Loader<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Connectivity and credential check
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.store.ping().await
    }

    /// One sample document per collection, sorted by collection name
    pub async fn inspect(&self) -> Result<Vec<(String, Option<Document>)>, DomainError> {
        let mut names = self.store.collection_names().await?;
        names.sort();

        let mut samples = Vec::with_capacity(names.len());
        for name in names {
            let doc = self.store.find_one(&name).await?;
            samples.push((name, doc));
        }

        Ok(samples)
    }

    /// Load every `*.json` file in `dir`, sorted by file name.
    ///
    /// Every per-file problem, including a connection or credential failure
    /// during insertion, is recorded in the report and the next file is
    /// still attempted. Only an unreadable directory fails the call.
    pub async fn load_dir(&self, dir: &Path) -> Result<LoadReport, DomainError> {
        let files = json_files(dir)?;
        let mut report = LoadReport::default();

        if files.is_empty() {
            tracing::warn!("No JSON files found in {}", dir.display());
            return Ok(report);
        }

        for path in files {
            let collection = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            let outcome = self.load_file(&path, &collection).await;

            match &outcome {
                FileOutcome::Inserted(n) => {
                    tracing::info!("Inserted {} documents into '{}'", n, collection)
                }
                FileOutcome::Skipped(reason) => {
                    tracing::warn!("Skipped {}: {}", path.display(), reason)
                }
                FileOutcome::Failed(reason) => {
                    tracing::error!("Failed to load {}: {}", path.display(), reason)
                }
            }

            report.files.push(FileReport {
                path,
                collection,
                outcome,
            });
        }

        Ok(report)
    }

    /// Load one file into `collection`
    pub async fn load_file(&self, path: &Path, collection: &str) -> FileOutcome {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => return FileOutcome::Failed(DomainError::io(path, e).to_string()),
        };

        let value: Value = match serde_json::from_str(&content) {
            Ok(v) => v,
            Err(e) => {
                let err = DomainError::MalformedJson {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                };
                return FileOutcome::Failed(err.to_string());
            }
        };

        let inserted = match value {
            Value::Array(items) if items.is_empty() => {
                return FileOutcome::Skipped("empty array".to_string());
            }
            Value::Array(items) => {
                let docs = match into_documents(items) {
                    Ok(docs) => docs,
                    Err(reason) => return FileOutcome::Failed(reason),
                };
                self.store.insert_many(collection, docs).await
            }
            Value::Object(doc) => self.store.insert_one(collection, doc).await.map(|_| 1),
            other => {
                return FileOutcome::Failed(format!(
                    "expected an array or an object, found {}",
                    kind(&other)
                ));
            }
        };

        match inserted {
            Ok(n) => FileOutcome::Inserted(n),
            Err(e) => FileOutcome::Failed(e.to_string()),
        }
    }
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>, DomainError> {
    let entries = fs::read_dir(dir).map_err(|e| DomainError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| DomainError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

fn into_documents(items: Vec<Value>) -> Result<Vec<Document>, String> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(doc) => Ok(doc),
            other => Err(format!("element {} is {}, not an object", i, kind(&other))),
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_totals() {
        let report = LoadReport {
            files: vec![
                FileReport {
                    path: PathBuf::from("a.json"),
                    collection: "a".into(),
                    outcome: FileOutcome::Inserted(3),
                },
                FileReport {
                    path: PathBuf::from("b.json"),
                    collection: "b".into(),
                    outcome: FileOutcome::Skipped("empty array".into()),
                },
                FileReport {
                    path: PathBuf::from("c.json"),
                    collection: "c".into(),
                    outcome: FileOutcome::Inserted(1),
                },
            ],
        };

        assert_eq!(report.inserted(), 4);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.failed(), 0);
        assert_eq!(report.outcome_of("c"), Some(&FileOutcome::Inserted(1)));
    }

    #[test]
    fn test_into_documents_rejects_scalars() {
        let err = into_documents(vec![serde_json::json!({"a": 1}), serde_json::json!(2)]).unwrap_err();
        assert!(err.contains("element 1"));
    }
}
