//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod question_bank;
pub mod run_assessment;
pub mod score_answer;
