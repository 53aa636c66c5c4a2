//! Scoring domain
//!
//! Everything between a judge's raw text and the per-question score vector:
//!
//! ```text
//! raw text ──► parsing ──► JudgeOutcome ─┐
//!                                        ├─► reconcile ──► ScoreVector
//! raw text ──► parsing ──► JudgeOutcome ─┘
//! ```
//!
//! Failures never escape this module as errors: a judge that fails or
//! answers with garbage is represented as an absent outcome, and
//! reconciliation substitutes the neutral default.

pub mod outcome;
pub mod parsing;
pub mod reconcile;
pub mod score;

pub use outcome::{JudgeOutcome, JudgeSlot};
pub use parsing::{ParseError, extract_json_object, parse_judge_response, strip_code_fence};
pub use reconcile::{reconcile, resolve_single};
pub use score::{DEFAULT_DIMENSION_SCORE, MAX_DIMENSION_SCORE, ScoreSource, ScoreVector};
