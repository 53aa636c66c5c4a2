//! Question item value objects

use super::dimension::CreativityDimension;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default time allowance for a single item, in seconds
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 300;

/// Category of a question item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    DivergentThinking,
    ConvergentThinking,
    CreativeProblemSolving,
    Imagination,
}

impl QuestionType {
    /// All question types, in catalog order.
    pub const ALL: [QuestionType; 4] = [
        QuestionType::DivergentThinking,
        QuestionType::ConvergentThinking,
        QuestionType::CreativeProblemSolving,
        QuestionType::Imagination,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::DivergentThinking => "divergent_thinking",
            QuestionType::ConvergentThinking => "convergent_thinking",
            QuestionType::CreativeProblemSolving => "creative_problem_solving",
            QuestionType::Imagination => "imagination",
        }
    }

    /// Display label shown to subjects
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::DivergentThinking => "发散思维题",
            QuestionType::ConvergentThinking => "聚合思维题",
            QuestionType::CreativeProblemSolving => "创造性问题解决",
            QuestionType::Imagination => "想象力测试",
        }
    }

    /// File name of the catalog document holding this type's pool
    pub fn catalog_file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }

    /// Prefix used when generating item identifiers (e.g. `div_12`)
    pub fn id_prefix(&self) -> &'static str {
        &self.as_str()[..3]
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| format!("unknown question type: {}", s))
    }
}

/// Scoring-weight hints attached to an item.
///
/// These are advisory: reconciliation averages dimensions without weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub fluency_weight: f64,
    pub flexibility_weight: f64,
    pub originality_weight: f64,
    pub elaboration_weight: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            fluency_weight: 0.3,
            flexibility_weight: 0.3,
            originality_weight: 0.2,
            elaboration_weight: 0.2,
        }
    }
}

/// A single catalog entry presented to the subject.
///
/// Immutable once generated; the serialized form is the on-disk catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionItem {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub title: String,
    /// Body text shown to the subject and sent to the judges
    pub content: String,
    /// Time allowance in seconds
    #[serde(default = "default_time_limit")]
    pub time_limit: u32,
    /// Dimensions this item is designed to exercise (1-4)
    #[serde(default)]
    pub dimensions: Vec<CreativityDimension>,
    #[serde(default, rename = "scoring_criteria")]
    pub weights: ScoringWeights,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_timestamp"
    )]
    pub generated_at: Option<DateTime<Utc>>,
}

/// Accept RFC 3339 timestamps and naive ones (read as UTC); anything
/// unreadable is dropped rather than failing the whole catalog document.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|naive| naive.and_utc())
            })
    }))
}

fn default_time_limit() -> u32 {
    DEFAULT_TIME_LIMIT_SECS
}

impl QuestionItem {
    /// Item with default time allowance and weights, targeting no dimension
    pub fn new(
        id: impl Into<String>,
        question_type: QuestionType,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question_type,
            title: title.into(),
            content: content.into(),
            time_limit: DEFAULT_TIME_LIMIT_SECS,
            dimensions: Vec::new(),
            weights: ScoringWeights::default(),
            generated_at: None,
        }
    }

    pub fn with_dimensions(mut self, dimensions: Vec<CreativityDimension>) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Comma-separated labels of the targeted dimensions
    pub fn dimension_labels(&self) -> String {
        self.dimensions
            .iter()
            .map(|d| d.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
