//! Domain layer for creativity-assess
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! A catalog holds one pool of [`QuestionItem`]s per [`QuestionType`].
//! Pools are generated from templates once and sampled in a balanced way:
//! every type contributes before the remainder is drawn from the union.
//!
//! ## Dual-judge scoring
//!
//! Each answer is scored on four [`CreativityDimension`]s by two judges with
//! different role framing. Their raw replies are parsed defensively into
//! [`JudgeOutcome`]s and reconciled into a single [`ScoreVector`]; a judge
//! that fails never fails the scoring, it only degrades the [`ScoreSource`].

pub mod bank;
pub mod config;
pub mod core;
pub mod prompt;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use bank::{Catalog, ItemTemplate, generate_pool, sample_balanced};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, ScoringMode, Severity};
pub use core::{
    dimension::CreativityDimension,
    error::DomainError,
    question::{DEFAULT_TIME_LIMIT_SECS, QuestionItem, QuestionType, ScoringWeights},
};
pub use prompt::PromptTemplate;
pub use scoring::{
    JudgeOutcome, JudgeSlot, ParseError, ScoreSource, ScoreVector, parse_judge_response,
    reconcile, resolve_single,
};
pub use session::{
    AnsweredQuestion, AssessmentLevel, AssessmentRecord, DimensionScore, FinalResult,
    QuestionEvaluation, SessionState, SessionStatus, Subject, WorkflowPhase,
};
