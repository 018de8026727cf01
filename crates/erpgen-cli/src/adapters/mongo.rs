//! MongoDB implementation of DocumentStore

use async_trait::async_trait;
use bson::{doc, Bson};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::{Client, Database};

use erpgen::{Document, DocumentStore, DomainError};

/// Server selection gives up after this long instead of hanging on an
/// unreachable host
const SERVER_SELECTION_TIMEOUT_MS: u32 = 5000;

/// Server error codes for bad credentials and missing privileges
const AUTH_ERROR_CODES: &[i32] = &[13, 18];

/// MongoDB implementation of DocumentStore
#[derive(Clone)]
pub struct MongoDocumentStore {
    client: Client,
    db: Database,
}

impl MongoDocumentStore {
    /// Build a client for `uri`. No connection is made until the first
    /// operation; call [`DocumentStore::ping`] to verify it.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, DomainError> {
        let client = Client::with_uri_str(with_timeout(uri))
            .await
            .map_err(|e| DomainError::Connection(format!("Invalid MongoDB URI: {}", e)))?;
        let db = client.database(database);

        Ok(Self { client, db })
    }

    pub fn database_name(&self) -> &str {
        self.db.name()
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    async fn ping(&self) -> Result<(), DomainError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(classify)?;

        tracing::info!("Connected to MongoDB database '{}'", self.db.name());
        Ok(())
    }

    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> Result<usize, DomainError> {
        let docs = docs
            .iter()
            .map(bson::to_document)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::insert(collection, e))?;

        let result = self
            .db
            .collection::<bson::Document>(collection)
            .insert_many(docs)
            .await
            .map_err(|e| insert_error(collection, e))?;

        Ok(result.inserted_ids.len())
    }

    async fn insert_one(&self, collection: &str, doc: Document) -> Result<String, DomainError> {
        let doc = bson::to_document(&doc).map_err(|e| DomainError::insert(collection, e))?;

        let result = self
            .db
            .collection::<bson::Document>(collection)
            .insert_one(doc)
            .await
            .map_err(|e| insert_error(collection, e))?;

        Ok(match result.inserted_id {
            Bson::ObjectId(id) => id.to_hex(),
            other => other.to_string(),
        })
    }

    async fn collection_names(&self) -> Result<Vec<String>, DomainError> {
        self.db.list_collection_names().await.map_err(classify)
    }

    async fn find_one(&self, collection: &str) -> Result<Option<Document>, DomainError> {
        let found = self
            .db
            .collection::<bson::Document>(collection)
            .find_one(doc! {})
            .await
            .map_err(classify)?;

        Ok(found.and_then(|d| match Bson::Document(d).into_relaxed_extjson() {
            serde_json::Value::Object(map) => Some(map),
            _ => None,
        }))
    }
}

/// Append the server selection timeout unless the URI already sets one
fn with_timeout(uri: &str) -> String {
    if uri.contains("serverSelectionTimeoutMS") {
        return uri.to_string();
    }
    let separator = if uri.contains('?') {
        '&'
    } else if uri.trim_end_matches('/').matches('/').count() > 1 {
        '?'
    } else {
        return format!(
            "{}/?serverSelectionTimeoutMS={}",
            uri.trim_end_matches('/'),
            SERVER_SELECTION_TIMEOUT_MS
        );
    };
    format!("{}{}serverSelectionTimeoutMS={}", uri, separator, SERVER_SELECTION_TIMEOUT_MS)
}

/// Connection and credential failures, which abort a whole run
fn fatal(err: &MongoError) -> Option<DomainError> {
    match err.kind.as_ref() {
        ErrorKind::Authentication { message, .. } => {
            Some(DomainError::Authentication(message.clone()))
        }
        ErrorKind::Command(command) if AUTH_ERROR_CODES.contains(&command.code) => {
            Some(DomainError::Authentication(command.message.clone()))
        }
        ErrorKind::ServerSelection { message, .. } => Some(DomainError::Connection(message.clone())),
        ErrorKind::Io(io) => Some(DomainError::Connection(io.to_string())),
        _ => None,
    }
}

fn classify(err: MongoError) -> DomainError {
    fatal(&err).unwrap_or_else(|| DomainError::Connection(err.to_string()))
}

fn insert_error(collection: &str, err: MongoError) -> DomainError {
    fatal(&err).unwrap_or_else(|| DomainError::insert(collection, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_timeout() {
        assert_eq!(
            with_timeout("mongodb://localhost:27017"),
            "mongodb://localhost:27017/?serverSelectionTimeoutMS=5000"
        );
        assert_eq!(
            with_timeout("mongodb://localhost:27017/"),
            "mongodb://localhost:27017/?serverSelectionTimeoutMS=5000"
        );
        assert_eq!(
            with_timeout("mongodb+srv://u:p@cluster0.example.net/?retryWrites=true"),
            "mongodb+srv://u:p@cluster0.example.net/?retryWrites=true&serverSelectionTimeoutMS=5000"
        );
        assert_eq!(
            with_timeout("mongodb://h/db"),
            "mongodb://h/db?serverSelectionTimeoutMS=5000"
        );
        assert_eq!(
            with_timeout("mongodb://h/?serverSelectionTimeoutMS=100"),
            "mongodb://h/?serverSelectionTimeoutMS=100"
        );
    }
}
