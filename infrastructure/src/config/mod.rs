//! Configuration loading for creativity-assess
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ASSESS_*` environment variables
//! 2. Legacy `SILICONFLOW_*` / `MAX_QUESTIONS` environment variables
//! 3. `--config <path>` specified file
//! 4. Project root: `./assess.toml` or `./.assess.toml`
//! 5. Global: `$XDG_CONFIG_HOME/creativity-assess/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigError, FileAssessmentConfig, FileCatalogConfig, FileConfig, FileJudgeModelConfig,
    FileJudgesConfig, FileOutputConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
