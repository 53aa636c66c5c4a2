//! Output configuration from TOML (`[output]` section)

use assess_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// JSONL file receiving one record per completed session
    pub results_file: PathBuf,
    /// Directory for the rotating app log and the judge transcript
    pub log_dir: PathBuf,
    /// Write the judge transcript (`judges.jsonl`)
    pub transcript: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            results_file: PathBuf::from("results/assessments.jsonl"),
            log_dir: PathBuf::from("log"),
            transcript: true,
        }
    }
}

impl FileOutputConfig {
    pub fn transcript_path(&self) -> PathBuf {
        self.log_dir.join("judges.jsonl")
    }
}
