//! Session domain
//!
//! State of one assessment run, from the sampled question set to the
//! final result and the record handed to the result sink.

pub mod entities;
pub mod phase;
pub mod record;
pub mod result;

pub use entities::{AnsweredQuestion, SessionState, SessionStatus, Subject};
pub use phase::WorkflowPhase;
pub use record::{AssessmentRecord, QuestionEvaluation};
pub use result::{AssessmentLevel, DimensionScore, FinalResult, recommendations_for};
