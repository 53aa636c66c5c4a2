//! Port for the structured judge transcript.
//!
//! Defines the [`ScoringLogger`] trait for recording what each judge was
//! asked, what it replied and how the reply was interpreted.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! scoring transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured scoring event for logging.
pub struct ScoringEvent {
    /// Event type identifier (e.g., "judge_prompt", "judge_response", "score_reconciled").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ScoringEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging scoring events to a structured log.
///
/// The `log` method is synchronous and non-fallible: a transcript that
/// cannot be written never interrupts scoring.
pub trait ScoringLogger: Send + Sync {
    fn log(&self, event: ScoringEvent);
}

/// No-op implementation for tests and when the transcript is disabled.
pub struct NoScoringLogger;

impl ScoringLogger for NoScoringLogger {
    fn log(&self, _event: ScoringEvent) {}
}
