//! Score vector value object

use crate::core::dimension::CreativityDimension;
use serde::{Deserialize, Serialize};

/// Neutral value substituted for any dimension a judge did not supply
pub const DEFAULT_DIMENSION_SCORE: f64 = 7.0;

/// Upper bound of a single dimension score
pub const MAX_DIMENSION_SCORE: f64 = 10.0;

/// Where a score vector's values came from.
///
/// Anything other than [`ScoreSource::Consensus`] or [`ScoreSource::Single`]
/// means at least one judge result was replaced by a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    /// Mean of both judges
    Consensus,
    /// Judge A only (judge B produced nothing usable)
    JudgeA,
    /// Judge B only (judge A produced nothing usable)
    JudgeB,
    /// Single-judge mode
    Single,
    /// No judge produced anything usable; all values are the default
    Fallback,
}

impl ScoreSource {
    /// Whether a fallback replaced at least one judge's result
    pub fn is_degraded(&self) -> bool {
        matches!(
            self,
            ScoreSource::JudgeA | ScoreSource::JudgeB | ScoreSource::Fallback
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreSource::Consensus => "consensus",
            ScoreSource::JudgeA => "judge_a",
            ScoreSource::JudgeB => "judge_b",
            ScoreSource::Single => "single",
            ScoreSource::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scores on all four creativity dimensions, plus commentary.
///
/// There is no partial vector: every dimension always holds a value in
/// `[0, 10]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    pub fluency: f64,
    pub flexibility: f64,
    pub originality: f64,
    pub elaboration: f64,
    #[serde(default)]
    pub comments: String,
    #[serde(default = "default_source")]
    pub source: ScoreSource,
}

fn default_source() -> ScoreSource {
    ScoreSource::Consensus
}

impl ScoreVector {
    /// Build a vector from a per-dimension function; values are clamped.
    pub fn from_fn(mut f: impl FnMut(CreativityDimension) -> f64) -> Self {
        Self {
            fluency: clamp_score(f(CreativityDimension::Fluency)),
            flexibility: clamp_score(f(CreativityDimension::Flexibility)),
            originality: clamp_score(f(CreativityDimension::Originality)),
            elaboration: clamp_score(f(CreativityDimension::Elaboration)),
            comments: String::new(),
            source: ScoreSource::Consensus,
        }
    }

    /// Same value on every dimension
    pub fn uniform(value: f64) -> Self {
        Self::from_fn(|_| value)
    }

    /// The neutral vector used when no judge result is available
    pub fn neutral() -> Self {
        Self::uniform(DEFAULT_DIMENSION_SCORE).with_source(ScoreSource::Fallback)
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = comments.into();
        self
    }

    pub fn with_source(mut self, source: ScoreSource) -> Self {
        self.source = source;
        self
    }

    pub fn get(&self, dimension: CreativityDimension) -> f64 {
        match dimension {
            CreativityDimension::Fluency => self.fluency,
            CreativityDimension::Flexibility => self.flexibility,
            CreativityDimension::Originality => self.originality,
            CreativityDimension::Elaboration => self.elaboration,
        }
    }

    /// Per-dimension arithmetic mean of two vectors (commentary left empty)
    pub fn mean(a: &ScoreVector, b: &ScoreVector) -> ScoreVector {
        Self::from_fn(|d| (a.get(d) + b.get(d)) / 2.0)
    }

    /// Sum of the four dimension values
    pub fn total(&self) -> f64 {
        CreativityDimension::ALL.iter().map(|d| self.get(*d)).sum()
    }

    /// Iterate over `(dimension, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (CreativityDimension, f64)> + '_ {
        CreativityDimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }
}

/// Clamp a raw score into `[0, MAX_DIMENSION_SCORE]`.
///
/// NaN is treated as missing and replaced by the default.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        DEFAULT_DIMENSION_SCORE
    } else {
        value.clamp(0.0, MAX_DIMENSION_SCORE)
    }
}
