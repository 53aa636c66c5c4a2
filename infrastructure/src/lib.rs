//! Infrastructure layer for creativity-assess
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use catalog::JsonCatalogStore;
pub use config::{
    ConfigError, ConfigLoader, FileAssessmentConfig, FileCatalogConfig, FileConfig,
    FileJudgeModelConfig, FileJudgesConfig, FileOutputConfig,
};
pub use logging::{JsonlResultSink, JsonlScoringLogger};
pub use providers::{JudgeFactory, OpenAiCompatibleJudge};
