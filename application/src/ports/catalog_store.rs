//! Catalog storage port
//!
//! One document per question type; a missing document means the pool
//! still has to be generated.

use assess_domain::{QuestionItem, QuestionType};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog I/O error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog document {path}: {message}")]
    Json { path: String, message: String },
}

/// Persisted catalog, one document per question type
pub trait CatalogStore: Send + Sync {
    /// Whether a document for this type has been stored
    fn exists(&self, question_type: QuestionType) -> bool;

    /// Read the stored pool for a type
    fn load(&self, question_type: QuestionType) -> Result<Vec<QuestionItem>, CatalogError>;

    /// Persist the pool for a type, replacing nothing that already exists
    fn save(&self, question_type: QuestionType, items: &[QuestionItem]) -> Result<(), CatalogError>;
}
