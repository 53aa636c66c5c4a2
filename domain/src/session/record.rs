//! Completed-session record handed to the result sink

use super::entities::{SessionState, SessionStatus, Subject};
use super::result::FinalResult;
use crate::core::question::QuestionType;
use crate::scoring::score::ScoreVector;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Evaluation of one answered question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionEvaluation {
    pub question_id: String,
    pub question_type: QuestionType,
    /// Length of the response in characters
    pub answer_length: usize,
    pub elapsed_secs: u64,
    pub scores: ScoreVector,
}

/// Everything the external store receives when a session completes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub session_id: String,
    pub subject: Subject,
    pub status: SessionStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub total_questions: usize,
    pub evaluations: Vec<QuestionEvaluation>,
    pub result: FinalResult,
}

impl AssessmentRecord {
    pub fn from_session(session: &SessionState, result: FinalResult) -> Self {
        let evaluations = session
            .answers
            .iter()
            .zip(session.scores.iter())
            .map(|(answer, scores)| QuestionEvaluation {
                question_id: answer.item.id.clone(),
                question_type: answer.item.question_type,
                answer_length: answer.response.chars().count(),
                elapsed_secs: answer.elapsed_secs,
                scores: scores.clone(),
            })
            .collect();

        Self {
            session_id: session.session_id.clone(),
            subject: session.subject.clone(),
            status: session.status,
            started_at: session.started_at,
            completed_at: session.completed_at,
            total_questions: session.total_questions(),
            evaluations,
            result,
        }
    }
}
