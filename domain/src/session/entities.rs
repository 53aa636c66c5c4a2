//! Session entities

use crate::core::error::DomainError;
use crate::core::question::QuestionItem;
use crate::scoring::score::ScoreVector;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The person being assessed
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
}

impl Subject {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn anonymous() -> Self {
        Self::new("anonymous", "匿名")
    }
}

/// A question together with the response given to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub item: QuestionItem,
    pub response: String,
    pub answered_at: DateTime<Utc>,
    /// Seconds spent between presentation and submission
    pub elapsed_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
    Abandoned,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::InProgress => "in_progress",
            SessionStatus::Completed => "completed",
            SessionStatus::Abandoned => "abandoned",
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mutable state of one assessment session.
///
/// `scores.len() <= answers.len() <= items.len()` holds after every
/// operation; the methods below refuse anything that would break it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub session_id: String,
    pub subject: Subject,
    pub items: Vec<QuestionItem>,
    /// Index of the next question to present
    pub position: usize,
    pub answers: Vec<AnsweredQuestion>,
    pub scores: Vec<ScoreVector>,
    pub status: SessionStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl SessionState {
    pub fn new(subject: Subject) -> Self {
        let now = Utc::now();
        Self {
            session_id: now.format("session_%Y%m%d_%H%M%S").to_string(),
            subject,
            items: Vec::new(),
            position: 0,
            answers: Vec::new(),
            scores: Vec::new(),
            status: SessionStatus::InProgress,
            started_at: now,
            completed_at: None,
        }
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    fn ensure_open(&self) -> Result<(), DomainError> {
        if self.status != SessionStatus::InProgress {
            return Err(DomainError::SessionClosed);
        }
        Ok(())
    }

    /// Record the sampled set. Replaces any previous sample only while
    /// nothing has been answered yet.
    pub fn record_questions(&mut self, items: Vec<QuestionItem>) -> Result<(), DomainError> {
        self.ensure_open()?;
        if !self.answers.is_empty() {
            return Err(DomainError::InvalidTransition {
                phase: format!("answered {}", self.answers.len()),
                action: "replace the question set",
            });
        }
        self.items = items;
        self.position = 0;
        Ok(())
    }

    pub fn current_question(&self) -> Option<&QuestionItem> {
        self.items.get(self.position)
    }

    pub fn total_questions(&self) -> usize {
        self.items.len()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn has_more_questions(&self) -> bool {
        self.position < self.items.len()
    }

    /// Attach a response to the current question
    pub fn record_answer(
        &mut self,
        response: impl Into<String>,
        elapsed_secs: u64,
    ) -> Result<&AnsweredQuestion, DomainError> {
        self.ensure_open()?;
        if self.answers.len() > self.scores.len() {
            return Err(DomainError::InvalidTransition {
                phase: format!("scoring question {}", self.position),
                action: "submit another answer",
            });
        }
        let item = self
            .current_question()
            .cloned()
            .ok_or_else(|| DomainError::InvalidTransition {
                phase: "no question pending".to_string(),
                action: "submit an answer",
            })?;

        self.answers.push(AnsweredQuestion {
            item,
            response: response.into(),
            answered_at: Utc::now(),
            elapsed_secs,
        });
        let last = self.answers.len() - 1;
        Ok(&self.answers[last])
    }

    /// Attach the score of the most recent answer and move on
    pub fn record_score(&mut self, score: ScoreVector) -> Result<(), DomainError> {
        self.ensure_open()?;
        if self.scores.len() >= self.answers.len() {
            return Err(DomainError::InvalidTransition {
                phase: "no answer awaiting a score".to_string(),
                action: "record a score",
            });
        }
        self.scores.push(score);
        self.position += 1;
        Ok(())
    }

    pub fn complete(&mut self) -> Result<(), DomainError> {
        self.ensure_open()?;
        if self.scores.is_empty() {
            return Err(DomainError::EmptySession);
        }
        self.status = SessionStatus::Completed;
        self.completed_at = Some(Utc::now());
        Ok(())
    }

    pub fn abandon(&mut self) {
        if self.status == SessionStatus::InProgress {
            self.status = SessionStatus::Abandoned;
            self.completed_at = Some(Utc::now());
        }
    }
}
