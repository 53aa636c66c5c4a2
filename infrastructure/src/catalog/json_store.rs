//! JSON-file catalog store
//!
//! One pretty-printed JSON array per question type, named
//! `<type>.json`, inside a single directory.

use assess_application::ports::catalog_store::{CatalogError, CatalogStore};
use assess_domain::{QuestionItem, QuestionType};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct JsonCatalogStore {
    dir: PathBuf,
}

impl JsonCatalogStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, question_type: QuestionType) -> PathBuf {
        self.dir.join(question_type.catalog_file_name())
    }
}

impl CatalogStore for JsonCatalogStore {
    fn exists(&self, question_type: QuestionType) -> bool {
        self.path_for(question_type).exists()
    }

    fn load(&self, question_type: QuestionType) -> Result<Vec<QuestionItem>, CatalogError> {
        let path = self.path_for(question_type);
        let content = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let items: Vec<QuestionItem> =
            serde_json::from_str(&content).map_err(|e| CatalogError::Json {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        debug!("Loaded {} items from {}", items.len(), path.display());
        Ok(items)
    }

    fn save(&self, question_type: QuestionType, items: &[QuestionItem]) -> Result<(), CatalogError> {
        fs::create_dir_all(&self.dir).map_err(|source| CatalogError::Io {
            path: self.dir.display().to_string(),
            source,
        })?;

        let path = self.path_for(question_type);
        let json = serde_json::to_string_pretty(items).map_err(|e| CatalogError::Json {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        fs::write(&path, json).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}
