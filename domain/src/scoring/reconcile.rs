//! Reconciliation of two judge outcomes into one score vector.
//!
//! | Judge A | Judge B | Result |
//! |---------|---------|--------|
//! | parsed  | parsed  | per-dimension mean, `A: … \| B: …` |
//! | parsed  | absent  | A's vector, `A: …` |
//! | absent  | parsed  | B's vector, `B: …` |
//! | absent  | absent  | neutral `{7, 7, 7, 7}`, fallback note |
//!
//! "Absent" covers both call failures and unparseable output.

use super::outcome::{JudgeOutcome, JudgeSlot};
use super::score::{ScoreSource, ScoreVector};

/// Commentary attached when neither judge produced usable scores
pub const DUAL_FALLBACK_COMMENT: &str = "自动评分（双评委均失败）";

/// Commentary attached when the single judge produced no usable scores
pub const SINGLE_FALLBACK_COMMENT: &str = "自动评分";

/// Combine the outcomes of judges A and B.
///
/// Always returns a complete vector; judge failures only show up in
/// `source` and `comments`.
pub fn reconcile(a: &JudgeOutcome, b: &JudgeOutcome) -> ScoreVector {
    match (a.scores(), b.scores()) {
        (None, None) => ScoreVector::neutral().with_comments(DUAL_FALLBACK_COMMENT),
        (Some(a), None) => single_judge(JudgeSlot::A, a),
        (None, Some(b)) => single_judge(JudgeSlot::B, b),
        (Some(a), Some(b)) => ScoreVector::mean(a, b)
            .with_comments(format!(
                "{}: {} | {}: {}",
                JudgeSlot::A.tag(),
                a.comments,
                JudgeSlot::B.tag(),
                b.comments
            ))
            .with_source(ScoreSource::Consensus),
    }
}

/// Turn the outcome of the only configured judge into a score vector
pub fn resolve_single(outcome: &JudgeOutcome) -> ScoreVector {
    match outcome.scores() {
        Some(scores) => scores.clone().with_source(ScoreSource::Single),
        None => ScoreVector::neutral().with_comments(SINGLE_FALLBACK_COMMENT),
    }
}

fn single_judge(slot: JudgeSlot, scores: &ScoreVector) -> ScoreVector {
    let source = match slot {
        JudgeSlot::A => ScoreSource::JudgeA,
        JudgeSlot::B => ScoreSource::JudgeB,
    };
    scores
        .clone()
        .with_comments(format!("{}: {}", slot.tag(), scores.comments))
        .with_source(source)
}
