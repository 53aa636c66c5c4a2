//! Answer collection port
//!
//! The presentation layer shows each question and hands back what the
//! subject did with it.

use assess_domain::{FinalResult, QuestionItem, ScoreVector};
use async_trait::async_trait;
use std::time::Duration;

/// What the subject did with a presented question
#[derive(Debug, Clone, PartialEq)]
pub enum CollectedAnswer {
    /// A response, with the time taken to write it
    Answer { text: String, elapsed: Duration },
    /// Stop here and finalize with what has been answered
    EndSession,
    /// Leave without a result
    Abandon,
}

#[async_trait]
pub trait AnswerCollector: Send + Sync {
    /// Present question `index` (0-based) of `total` and wait for the subject
    async fn collect(&self, index: usize, total: usize, item: &QuestionItem) -> CollectedAnswer;

    /// Show the score of the answer just given
    fn show_score(&self, _index: usize, _scores: &ScoreVector) {}

    /// Tell the subject a request was refused (e.g. ending with no answers)
    fn notify(&self, _message: &str) {}

    /// Show the final result
    fn show_result(&self, _result: &FinalResult) {}
}
