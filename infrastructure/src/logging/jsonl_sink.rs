//! JSONL result sink.
//!
//! Appends one [`AssessmentRecord`] per line. The file is opened per
//! delivery, so concurrent runs on the same file interleave whole lines.

use super::jsonl_logger::open_append;
use assess_application::ports::result_sink::{ResultSink, SinkError};
use assess_domain::AssessmentRecord;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct JsonlResultSink {
    path: PathBuf,
}

impl JsonlResultSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultSink for JsonlResultSink {
    fn deliver(&self, record: &AssessmentRecord) -> Result<(), SinkError> {
        let line =
            serde_json::to_string(record).map_err(|e| SinkError::Serialize(e.to_string()))?;

        let mut file = open_append(&self.path, "results").ok_or_else(|| {
            SinkError::Io(std::io::Error::other(format!(
                "cannot open {}",
                self.path.display()
            )))
        })?;
        writeln!(file, "{}", line)?;

        info!(
            "Result for {} written to {}",
            record.session_id,
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_domain::{
        FinalResult, QuestionItem, QuestionType, ScoreVector, SessionState, Subject,
    };

    fn record(id: &str) -> AssessmentRecord {
        let mut session = SessionState::new(Subject::new("7", "赵六")).with_session_id(id);
        session
            .record_questions(vec![QuestionItem::new(
                "cre_1",
                QuestionType::CreativeProblemSolving,
                "t",
                "c",
            )])
            .unwrap();
        session.record_answer("方案", 60).unwrap();
        session.record_score(ScoreVector::uniform(9.0)).unwrap();
        session.complete().unwrap();
        let result = FinalResult::from_scores(&session.scores).unwrap();
        AssessmentRecord::from_session(&session, result)
    }

    #[test]
    fn test_appends_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonlResultSink::new(dir.path().join("results").join("assessments.jsonl"));

        sink.deliver(&record("session_a")).unwrap();
        sink.deliver(&record("session_b")).unwrap();

        let content = std::fs::read_to_string(sink.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let second: AssessmentRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.session_id, "session_b");
        assert_eq!(second.result.total_score, 36.0);
    }
}
