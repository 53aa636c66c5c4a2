//! Progress notification port
//!
//! Defines the interface for reporting progress while judges score an answer.

use assess_domain::{JudgeSlot, ScoreSource};

/// Callback for progress updates during scoring
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait ScoringProgress: Send + Sync {
    /// Called when scoring starts, with the number of judges invoked
    fn on_scoring_start(&self, judges: usize);

    /// Called when one judge has answered (or failed)
    fn on_judge_complete(&self, slot: JudgeSlot, success: bool);

    /// Called once the reconciled vector is available
    fn on_scoring_complete(&self, _source: ScoreSource) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ScoringProgress for NoProgress {
    fn on_scoring_start(&self, _judges: usize) {}
    fn on_judge_complete(&self, _slot: JudgeSlot, _success: bool) {}
}
