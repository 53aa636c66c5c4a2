//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Cannot finalize a session with no answered questions")]
    EmptySession,

    #[error("Invalid workflow transition: cannot {action} while {phase}")]
    InvalidTransition { phase: String, action: &'static str },

    #[error("Invalid question count: {0}")]
    InvalidQuestionCount(usize),

    #[error("Session is no longer in progress")]
    SessionClosed,
}

impl DomainError {
    /// Check if this error is the empty-session finalize rejection
    pub fn is_empty_session(&self) -> bool {
        matches!(self, DomainError::EmptySession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session_display() {
        assert_eq!(
            DomainError::EmptySession.to_string(),
            "Cannot finalize a session with no answered questions"
        );
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = DomainError::InvalidTransition {
            phase: "Initializing".to_string(),
            action: "submit an answer",
        };
        assert_eq!(
            err.to_string(),
            "Invalid workflow transition: cannot submit an answer while Initializing"
        );
        assert!(!err.is_empty_session());
    }
}
