//! Workflow phase of an assessment session

use serde::{Deserialize, Serialize};

/// Where the assessment workflow currently is.
///
/// ```text
/// Initializing ─► QuestionsGenerated ─► Presenting(0) ─► AwaitingAnswer(0) ─► Scoring(0)
///                                            ▲                                     │
///                                            └──── Presenting(i+1) ◄── i+1 < n ────┤
///                                                                                  ▼
///                                                    Completed ◄── Finalizing ◄── i+1 = n
/// ```
///
/// There is no error phase: scoring failures degrade to default scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "index", rename_all = "snake_case")]
pub enum WorkflowPhase {
    Initializing,
    QuestionsGenerated,
    Presenting(usize),
    AwaitingAnswer(usize),
    Scoring(usize),
    Finalizing,
    Completed,
    Abandoned,
}

impl WorkflowPhase {
    /// Phase following the scoring of question `index` out of `total`
    pub fn after_scoring(index: usize, total: usize) -> Self {
        if index + 1 < total {
            WorkflowPhase::Presenting(index + 1)
        } else {
            WorkflowPhase::Finalizing
        }
    }

    /// Phase following question generation
    pub fn after_generation(total: usize) -> Self {
        if total == 0 {
            WorkflowPhase::Finalizing
        } else {
            WorkflowPhase::QuestionsGenerated
        }
    }

    /// Index of the question this phase refers to, if any
    pub fn question_index(&self) -> Option<usize> {
        match self {
            WorkflowPhase::Presenting(i)
            | WorkflowPhase::AwaitingAnswer(i)
            | WorkflowPhase::Scoring(i) => Some(*i),
            WorkflowPhase::QuestionsGenerated => Some(0),
            _ => None,
        }
    }

    /// Whether the session has reached a terminal phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowPhase::Completed | WorkflowPhase::Abandoned)
    }
}

impl std::fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowPhase::Initializing => write!(f, "Initializing"),
            WorkflowPhase::QuestionsGenerated => write!(f, "QuestionsGenerated"),
            WorkflowPhase::Presenting(i) => write!(f, "Presenting({})", i),
            WorkflowPhase::AwaitingAnswer(i) => write!(f, "AwaitingAnswer({})", i),
            WorkflowPhase::Scoring(i) => write!(f, "Scoring({})", i),
            WorkflowPhase::Finalizing => write!(f, "Finalizing"),
            WorkflowPhase::Completed => write!(f, "Completed"),
            WorkflowPhase::Abandoned => write!(f, "Abandoned"),
        }
    }
}
