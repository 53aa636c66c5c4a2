//! Assessment and catalog configuration from TOML (`[assessment]`, `[catalog]`)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw assessment configuration from TOML
///
/// # Example
///
/// ```toml
/// [assessment]
/// max_questions = 10
/// items_per_type = 100
/// time_limit_minutes = 30
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssessmentConfig {
    /// Questions sampled per session
    pub max_questions: usize,
    /// Items generated per question type when a catalog document is missing
    pub items_per_type: usize,
    /// Advisory overall time limit shown to the subject
    pub time_limit_minutes: u32,
}

impl Default for FileAssessmentConfig {
    fn default() -> Self {
        Self {
            max_questions: 10,
            items_per_type: 100,
            time_limit_minutes: 30,
        }
    }
}

/// Raw catalog location from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Directory holding one `<type>.json` document per question type
    pub dir: PathBuf,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("questions"),
        }
    }
}
