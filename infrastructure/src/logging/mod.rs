//! Logging infrastructure: judge transcript and result delivery.
//!
//! Provides [`JsonlScoringLogger`] (the
//! [`ScoringLogger`](assess_application::ScoringLogger) port) and
//! [`JsonlResultSink`] (the [`ResultSink`](assess_application::ResultSink) port).

mod jsonl_logger;
mod jsonl_sink;

pub use jsonl_logger::JsonlScoringLogger;
pub use jsonl_sink::JsonlResultSink;
