//! Result sink port
//!
//! Receives one record per completed session. Delivery is attempted once.

use assess_domain::AssessmentRecord;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Result sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Result serialization failed: {0}")]
    Serialize(String),
}

/// External store for completed assessments
pub trait ResultSink: Send + Sync {
    fn deliver(&self, record: &AssessmentRecord) -> Result<(), SinkError>;
}

/// Sink that discards records (tests, dry runs)
pub struct NoResultSink;

impl ResultSink for NoResultSink {
    fn deliver(&self, _record: &AssessmentRecord) -> Result<(), SinkError> {
        Ok(())
    }
}
