//! JSONL file writer for scoring events.
//!
//! Each judge exchange and each reconciled score is appended to
//! `judges.jsonl` as one JSON object per line.

use assess_application::ports::scoring_logger::{ScoringEvent, ScoringLogger};
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Appending judge transcript, flushed after every event and on drop
pub struct JsonlScoringLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlScoringLogger {
    /// Create a logger appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        let file = open_append(path, "judge transcript")?;

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Open `path` for appending, creating parent directories; logs and
/// returns `None` on failure.
pub(super) fn open_append(path: &Path, what: &str) -> Option<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        warn!(
            "Could not create {} directory {}: {}",
            what,
            parent.display(),
            e
        );
        return None;
    }

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(f) => Some(f),
        Err(e) => {
            warn!("Could not open {} file {}: {}", what, path.display(), e);
            None
        }
    }
}

/// One transcript line: the payload's fields plus `type` and `timestamp`.
///
/// A payload that is not an object is nested under `data`.
fn transcript_line(event: ScoringEvent) -> serde_json::Result<String> {
    let mut record = match event.payload {
        Value::Object(map) => map,
        other => Map::from_iter([("data".to_string(), other)]),
    };
    record.insert("type".to_string(), Value::from(event.event_type));
    record.insert(
        "timestamp".to_string(),
        Value::from(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    serde_json::to_string(&record)
}

impl ScoringLogger for JsonlScoringLogger {
    fn log(&self, event: ScoringEvent) {
        let line = match transcript_line(event) {
            Ok(line) => line,
            Err(e) => {
                warn!("Dropping unserializable transcript event: {}", e);
                return;
            }
        };

        let Ok(mut writer) = self.writer.lock() else {
            return;
        };
        if writeln!(writer, "{}", line)
            .and_then(|_| writer.flush())
            .is_err()
        {
            warn!("Failed to append to {}", self.path.display());
        }
    }
}

impl Drop for JsonlScoringLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
