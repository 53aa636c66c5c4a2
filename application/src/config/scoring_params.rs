//! Scoring parameters: judge fan-out control.

use assess_domain::ScoringMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Controls how an answer is scored.
///
/// Each judge call gets its own `judge_timeout`; there are no retries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringParams {
    pub mode: ScoringMode,
    pub judge_timeout: Duration,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            mode: ScoringMode::Dual,
            judge_timeout: Duration::from_secs(15),
        }
    }
}

impl ScoringParams {
    pub fn with_mode(mut self, mode: ScoringMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.judge_timeout = timeout;
        self
    }

    pub fn with_timeout_seconds(self, seconds: u64) -> Self {
        self.with_timeout(Duration::from_secs(seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ScoringParams::default();
        assert_eq!(params.mode, ScoringMode::Dual);
        assert_eq!(params.judge_timeout, Duration::from_secs(15));
    }
}
