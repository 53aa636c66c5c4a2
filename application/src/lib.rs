//! Application layer for creativity-assess
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AssessmentParams, ScoringParams};
pub use ports::{
    answer_collector::{AnswerCollector, CollectedAnswer},
    catalog_store::{CatalogError, CatalogStore},
    judge::{Judge, JudgeError},
    progress::{NoProgress, ScoringProgress},
    result_sink::{NoResultSink, ResultSink, SinkError},
    scoring_logger::{NoScoringLogger, ScoringEvent, ScoringLogger},
};
pub use use_cases::question_bank::QuestionBank;
pub use use_cases::run_assessment::{AssessmentError, AssessmentOutcome, AssessmentWorkflow};
pub use use_cases::score_answer::ScoreAnswerUseCase;
