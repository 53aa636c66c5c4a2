//! Judge configuration from TOML (`[judges]` section)

use assess_domain::{ConfigIssue, ConfigIssueCode, ScoringMode};
use serde::{Deserialize, Serialize};

/// One judge model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileJudgeModelConfig {
    pub model: String,
    pub temperature: f32,
}

/// Raw judge configuration from TOML
///
/// # Example
///
/// ```toml
/// [judges]
/// base_url = "https://api.siliconflow.cn/v1"
/// api_key_env = "SILICONFLOW_API_KEY"
/// timeout_secs = 15
/// mode = "dual"                 # "dual" or "single"
///
/// [judges.a]
/// model = "Qwen/Qwen2.5-7B-Instruct"
/// temperature = 0.0
///
/// [judges.b]
/// model = "Qwen/Qwen2.5-7B-Instruct"
/// temperature = 0.3
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileJudgesConfig {
    /// Base URL of the OpenAI-compatible endpoint
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Direct API key (not recommended, prefer `api_key_env`)
    pub api_key: Option<String>,
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
    /// Scoring mode: "dual" or "single"
    pub mode: String,
    /// Conservative judge (also the single-mode judge)
    pub a: FileJudgeModelConfig,
    /// Divergent judge
    pub b: FileJudgeModelConfig,
}

impl Default for FileJudgesConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.siliconflow.cn/v1".to_string(),
            api_key_env: "SILICONFLOW_API_KEY".to_string(),
            api_key: None,
            timeout_secs: 15,
            mode: "dual".to_string(),
            a: FileJudgeModelConfig {
                model: "Qwen/Qwen2.5-7B-Instruct".to_string(),
                temperature: 0.0,
            },
            b: FileJudgeModelConfig {
                model: "Qwen/Qwen2.5-7B-Instruct".to_string(),
                temperature: 0.3,
            },
        }
    }
}

impl FileJudgesConfig {
    /// Parse mode string into ScoringMode, returning a warning on failure.
    pub fn parse_mode(&self) -> (ScoringMode, Vec<ConfigIssue>) {
        match self.mode.parse::<ScoringMode>() {
            Ok(mode) => (mode, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::UnknownScoringMode,
                    format!(
                        "judges.mode: unknown value '{}', falling back to 'dual'",
                        self.mode
                    ),
                );
                (ScoringMode::default(), vec![issue])
            }
        }
    }

    /// Resolve the API key: explicit value first, then the named env var.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.is_empty())
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (name, judge) in [("a", &self.a), ("b", &self.b)] {
            if judge.model.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyModel,
                    format!("judges.{}.model cannot be empty", name),
                ));
            }
            if !(0.0..=2.0).contains(&judge.temperature) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::TemperatureOutOfRange,
                    format!(
                        "judges.{}.temperature {} is outside [0, 2]",
                        name, judge.temperature
                    ),
                ));
            }
        }

        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                "judges.timeout_secs cannot be 0",
            ));
        }

        if self.api_key.as_deref().is_some_and(|k| !k.is_empty()) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InlineApiKey,
                format!(
                    "judges.api_key is set in a config file; prefer the {} environment variable",
                    self.api_key_env
                ),
            ));
        }

        issues.extend(self.parse_mode().1);
        issues
    }
}
