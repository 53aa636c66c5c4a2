//! Judge identity and per-judge outcome types

use super::parsing::{ParseError, parse_judge_response};
use super::score::ScoreVector;
use serde::{Deserialize, Serialize};

/// Which of the two judges produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JudgeSlot {
    A,
    B,
}

impl JudgeSlot {
    pub const BOTH: [JudgeSlot; 2] = [JudgeSlot::A, JudgeSlot::B];

    /// Short tag used in commentary (`"A"` / `"B"`)
    pub fn tag(&self) -> &'static str {
        match self {
            JudgeSlot::A => "A",
            JudgeSlot::B => "B",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            JudgeSlot::A => 0,
            JudgeSlot::B => 1,
        }
    }

    /// Role framing placed in front of the rubric for this judge.
    ///
    /// A reads conservatively and pays attention to detail; B rewards
    /// divergent, varied expression.
    pub fn role_hint(&self) -> &'static str {
        match self {
            JudgeSlot::A => "严谨的评分者，偏保守且注重细节",
            JudgeSlot::B => "发散的评分者，鼓励创造性表达与多样性",
        }
    }
}

impl std::fmt::Display for JudgeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Judge{}", self.tag())
    }
}

/// Result of asking one judge to score one answer
#[derive(Debug, Clone, PartialEq)]
pub enum JudgeOutcome {
    /// The judge answered and its output yielded scores
    Parsed(ScoreVector),
    /// The judge answered but nothing usable could be extracted
    Unparseable { raw: String, error: ParseError },
    /// The call itself failed (transport error, non-2xx, timeout)
    CallFailed { reason: String },
}

impl JudgeOutcome {
    /// Classify a raw judge response
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match parse_judge_response(&raw) {
            Ok(scores) => JudgeOutcome::Parsed(scores),
            Err(error) => JudgeOutcome::Unparseable { raw, error },
        }
    }

    pub fn call_failed(reason: impl Into<String>) -> Self {
        JudgeOutcome::CallFailed {
            reason: reason.into(),
        }
    }

    /// The parsed scores, if any
    pub fn scores(&self) -> Option<&ScoreVector> {
        match self {
            JudgeOutcome::Parsed(scores) => Some(scores),
            _ => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, JudgeOutcome::Parsed(_))
    }

    /// Short description for logs and progress output
    pub fn describe(&self) -> String {
        match self {
            JudgeOutcome::Parsed(_) => "parsed".to_string(),
            JudgeOutcome::Unparseable { error, .. } => format!("unparseable: {}", error),
            JudgeOutcome::CallFailed { reason } => format!("call failed: {}", reason),
        }
    }
}
