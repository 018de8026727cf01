//! Document Store Port
//!
//! Abstract interface for the database the loader seeds.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// One JSON object as it will be stored
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Collection-oriented document database
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Verify connectivity and credentials.
    ///
    /// Fails with [`DomainError::Connection`] or [`DomainError::Authentication`].
    async fn ping(&self) -> Result<(), DomainError>;

    /// Insert documents into `collection`, returning how many were stored
    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> Result<usize, DomainError>;

    /// Insert a single document, returning its id
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<String, DomainError>;

    /// Names of the collections currently in the database
    async fn collection_names(&self) -> Result<Vec<String>, DomainError>;

    /// Any one document of `collection`
    async fn find_one(&self, collection: &str) -> Result<Option<Document>, DomainError>;
}
