//! Final assessment result and its derived values

use crate::core::dimension::CreativityDimension;
use crate::core::error::DomainError;
use crate::scoring::score::{MAX_DIMENSION_SCORE, ScoreVector};
use serde::{Deserialize, Serialize};

/// Qualitative tier derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentLevel {
    #[serde(rename = "优秀")]
    Excellent,
    #[serde(rename = "良好")]
    Good,
    #[serde(rename = "一般")]
    Average,
    #[serde(rename = "需要提升")]
    NeedsImprovement,
}

impl AssessmentLevel {
    /// Overall tier from the total of the four dimension averages (max 40)
    pub fn from_total(total: f64) -> Self {
        if total >= 35.0 {
            AssessmentLevel::Excellent
        } else if total >= 30.0 {
            AssessmentLevel::Good
        } else {
            AssessmentLevel::Average
        }
    }

    /// Per-dimension tier from a percentage of the maximum score
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            AssessmentLevel::Excellent
        } else if percentage >= 80.0 {
            AssessmentLevel::Good
        } else if percentage >= 70.0 {
            AssessmentLevel::Average
        } else {
            AssessmentLevel::NeedsImprovement
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentLevel::Excellent => "优秀",
            AssessmentLevel::Good => "良好",
            AssessmentLevel::Average => "一般",
            AssessmentLevel::NeedsImprovement => "需要提升",
        }
    }
}

impl std::fmt::Display for AssessmentLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Average score on one dimension across the evaluated questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: CreativityDimension,
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub level: AssessmentLevel,
}

impl DimensionScore {
    pub fn new(dimension: CreativityDimension, score: f64) -> Self {
        let percentage = score / MAX_DIMENSION_SCORE * 100.0;
        Self {
            dimension,
            score,
            max_score: MAX_DIMENSION_SCORE,
            percentage,
            level: AssessmentLevel::from_percentage(percentage),
        }
    }
}

/// Outcome of a finished session. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalResult {
    /// One entry per dimension, in canonical order
    pub dimension_scores: Vec<DimensionScore>,
    /// Sum of the four dimension averages (max 40)
    pub total_score: f64,
    pub level: AssessmentLevel,
    /// Number of questions the averages were taken over
    pub evaluated_questions: usize,
    /// Number of evaluations that relied on a fallback
    pub degraded_evaluations: usize,
    pub recommendations: Vec<String>,
}

impl FinalResult {
    /// Average the recorded score vectors dimension-wise.
    ///
    /// The divisor is the number of evaluated questions, not the number
    /// sampled, so an early-ended session is scored only on what was answered.
    pub fn from_scores(scores: &[ScoreVector]) -> Result<Self, DomainError> {
        if scores.is_empty() {
            return Err(DomainError::EmptySession);
        }

        let n = scores.len() as f64;
        let dimension_scores: Vec<DimensionScore> = CreativityDimension::ALL
            .into_iter()
            .map(|d| {
                let sum: f64 = scores.iter().map(|s| s.get(d)).sum();
                DimensionScore::new(d, sum / n)
            })
            .collect();

        let total_score = dimension_scores.iter().map(|s| s.score).sum();
        let recommendations = recommendations_for(&dimension_scores);

        Ok(Self {
            total_score,
            level: AssessmentLevel::from_total(total_score),
            evaluated_questions: scores.len(),
            degraded_evaluations: scores.iter().filter(|s| s.source.is_degraded()).count(),
            recommendations,
            dimension_scores,
        })
    }

    /// Average score on one dimension
    pub fn score(&self, dimension: CreativityDimension) -> f64 {
        self.dimension_scores
            .iter()
            .find(|s| s.dimension == dimension)
            .map(|s| s.score)
            .unwrap_or_default()
    }
}

/// Suggestions for every dimension under 70 %, or a single congratulation.
pub fn recommendations_for(dimension_scores: &[DimensionScore]) -> Vec<String> {
    let mut recommendations: Vec<String> = dimension_scores
        .iter()
        .filter(|s| s.percentage < 70.0)
        .map(|s| {
            let label = s.dimension.label();
            match s.dimension {
                CreativityDimension::Fluency => {
                    format!("建议通过头脑风暴练习提高{}，多进行发散思维训练", label)
                }
                CreativityDimension::Flexibility => {
                    format!("建议尝试从不同角度思考问题，提高{}", label)
                }
                CreativityDimension::Originality => {
                    format!("建议培养创新思维，敢于提出独特想法，提高{}", label)
                }
                CreativityDimension::Elaboration => {
                    format!("建议在思考时更加深入细致，提高{}", label)
                }
            }
        })
        .collect();

    if recommendations.is_empty() {
        recommendations.push("恭喜！您的创造力水平表现优秀，继续保持！".to_string());
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score::ScoreSource;

    #[test]
    fn test_three_questions_average_to_seven() {
        let scores = vec![
            ScoreVector::uniform(8.0),
            ScoreVector::uniform(6.0),
            ScoreVector::uniform(7.0),
        ];
        let result = FinalResult::from_scores(&scores).unwrap();

        for d in CreativityDimension::ALL {
            assert_eq!(result.score(d), 7.0);
        }
        assert_eq!(result.total_score, 28.0);
        assert_eq!(result.level, AssessmentLevel::Average);
        assert_eq!(result.level.as_str(), "一般");
        assert_eq!(result.evaluated_questions, 3);
    }

    #[test]
    fn test_empty_scores_rejected() {
        assert_eq!(FinalResult::from_scores(&[]), Err(DomainError::EmptySession));
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(AssessmentLevel::from_total(35.0), AssessmentLevel::Excellent);
        assert_eq!(AssessmentLevel::from_total(34.9), AssessmentLevel::Good);
        assert_eq!(AssessmentLevel::from_total(30.0), AssessmentLevel::Good);
        assert_eq!(AssessmentLevel::from_total(29.99), AssessmentLevel::Average);
        assert_eq!(AssessmentLevel::from_total(0.0), AssessmentLevel::Average);
    }

    #[test]
    fn test_dimension_percentage_and_level() {
        let s = DimensionScore::new(CreativityDimension::Originality, 8.5);
        assert_eq!(s.percentage, 85.0);
        assert_eq!(s.level, AssessmentLevel::Good);
        assert_eq!(
            DimensionScore::new(CreativityDimension::Fluency, 6.0).level,
            AssessmentLevel::NeedsImprovement
        );
    }

    #[test]
    fn test_recommendations() {
        let low = FinalResult::from_scores(&[ScoreVector::from_fn(|d| match d {
            CreativityDimension::Fluency => 5.0,
            CreativityDimension::Elaboration => 6.0,
            _ => 9.0,
        })])
        .unwrap();
        assert_eq!(low.recommendations.len(), 2);
        assert!(low.recommendations[0].contains("流畅性"));
        assert!(low.recommendations[1].contains("精细性"));

        let high = FinalResult::from_scores(&[ScoreVector::uniform(9.5)]).unwrap();
        assert_eq!(high.recommendations.len(), 1);
        assert!(high.recommendations[0].starts_with("恭喜"));
        assert_eq!(high.level, AssessmentLevel::Excellent);
    }

    #[test]
    fn test_degraded_evaluations_counted() {
        let scores = vec![
            ScoreVector::neutral(),
            ScoreVector::uniform(8.0).with_source(ScoreSource::JudgeB),
            ScoreVector::uniform(8.0),
        ];
        let result = FinalResult::from_scores(&scores).unwrap();
        assert_eq!(result.degraded_evaluations, 2);
    }

    #[test]
    fn test_level_serializes_as_label() {
        let json = serde_json::to_string(&AssessmentLevel::Good).unwrap();
        assert_eq!(json, "\"良好\"");
    }
}
