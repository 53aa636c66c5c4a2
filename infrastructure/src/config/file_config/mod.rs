//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod assessment;
mod judges;
mod output;

pub use assessment::{FileAssessmentConfig, FileCatalogConfig};
pub use judges::{FileJudgeModelConfig, FileJudgesConfig};
pub use output::FileOutputConfig;

use assess_application::{AssessmentParams, ScoringParams};
use assess_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration that cannot be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Session size and catalog generation
    pub assessment: FileAssessmentConfig,
    /// Catalog location
    pub catalog: FileCatalogConfig,
    /// Judge endpoint and models
    pub judges: FileJudgesConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.judges.validate();

        if self.assessment.max_questions == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroQuestions,
                "assessment.max_questions cannot be 0",
            ));
        }

        if self.assessment.items_per_type.saturating_mul(4) < self.assessment.max_questions {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::SmallCatalog,
                format!(
                    "assessment.items_per_type ({}) is too small for {} questions; sessions will be shorter",
                    self.assessment.items_per_type, self.assessment.max_questions
                ),
            ));
        }

        issues
    }

    /// Validate, failing on errors and returning the remaining warnings
    pub fn ensure_valid(&self) -> Result<Vec<ConfigIssue>, ConfigError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(|i| i.is_error());
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigError::Invalid(
                errors.into_iter().map(|i| i.message).collect(),
            ))
        }
    }

    pub fn assessment_params(&self) -> AssessmentParams {
        AssessmentParams::default()
            .with_max_questions(self.assessment.max_questions)
            .with_items_per_type(self.assessment.items_per_type)
    }

    pub fn scoring_params(&self) -> ScoringParams {
        ScoringParams::default()
            .with_mode(self.judges.parse_mode().0)
            .with_timeout_seconds(self.judges.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_domain::ScoringMode;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[assessment]
max_questions = 6
items_per_type = 20

[catalog]
dir = "data/questions"

[judges]
base_url = "http://localhost:8000/v1"
timeout_secs = 30
mode = "single"

[judges.a]
model = "judge-a"
temperature = 0.1

[judges.b]
model = "judge-b"
temperature = 0.7

[output]
format = "full"
color = false
transcript = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.assessment.max_questions, 6);
        assert_eq!(config.catalog.dir.to_string_lossy(), "data/questions");
        assert_eq!(config.judges.a.model, "judge-a");
        assert_eq!(config.judges.b.temperature, 0.7);
        assert!(!config.output.color);
        assert!(!config.output.transcript);

        let scoring = config.scoring_params();
        assert_eq!(scoring.mode, ScoringMode::Single);
        assert_eq!(scoring.judge_timeout, Duration::from_secs(30));
        assert_eq!(config.assessment_params().items_per_type, 20);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[judges.b]
model = "other"
temperature = 0.5
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.judges.b.model, "other");
        // Defaults should apply
        assert_eq!(config.judges.a.temperature, 0.0);
        assert_eq!(config.judges.timeout_secs, 15);
        assert_eq!(config.assessment.max_questions, 10);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_huge_items_per_type() {
        let mut config = FileConfig::default();
        config.assessment.items_per_type = usize::MAX;
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.judges.a.model = "  ".to_string();
        config.judges.b.temperature = 3.5;
        config.judges.timeout_secs = 0;
        config.judges.mode = "triple".to_string();
        config.assessment.max_questions = 0;

        let issues = config.validate();
        let codes: Vec<_> = issues.iter().map(|i| i.code).collect();
        assert!(codes.contains(&ConfigIssueCode::EmptyModel));
        assert!(codes.contains(&ConfigIssueCode::TemperatureOutOfRange));
        assert!(codes.contains(&ConfigIssueCode::ZeroTimeout));
        assert!(codes.contains(&ConfigIssueCode::UnknownScoringMode));
        assert!(codes.contains(&ConfigIssueCode::ZeroQuestions));
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 3);
    }

    #[test]
    fn test_ensure_valid_splits_errors_from_warnings() {
        let mut config = FileConfig::default();
        config.judges.mode = "weird".to_string();
        let warnings = config.ensure_valid().unwrap();
        assert_eq!(warnings.len(), 1);

        config.judges.timeout_secs = 0;
        let err = config.ensure_valid().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: judges.timeout_secs cannot be 0"
        );
    }

    #[test]
    fn test_unknown_mode_falls_back_to_dual() {
        let mut config = FileConfig::default();
        config.judges.mode = "weird".to_string();
        assert_eq!(config.scoring_params().mode, ScoringMode::Dual);
    }
}
