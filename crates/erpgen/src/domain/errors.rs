//! Domain Errors
//!
//! Error types for generation, template and loading operations.

use std::path::PathBuf;

use thiserror::Error;

/// Template construction errors.
///
/// Raised while a template is parsed, never while it is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Unknown placeholder '{{{name}}}' in template \"{template}\"")]
    UnknownPlaceholder { name: String, template: String },

    #[error("Malformed template \"{template}\": {reason}")]
    Malformed { template: String, reason: String },
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Invalid JSON in {path:?}: {reason}")]
    MalformedJson { path: PathBuf, reason: String },

    #[error("Insert into '{collection}' failed: {reason}")]
    Insert { collection: String, reason: String },

    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DomainError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn insert<T: AsRef<str>>(collection: T, reason: impl ToString) -> Self {
        Self::Insert {
            collection: collection.as_ref().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Connection and credential failures. Fatal when the initial ping
    /// fails; during insertion they only fail the file being loaded.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Authentication(_))
    }
}
