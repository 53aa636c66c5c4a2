//! Scoring mode value object

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of judges consulted per answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Two judges invoked concurrently and reconciled
    #[default]
    Dual,
    /// One judge, no role framing
    Single,
}

impl ScoringMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMode::Dual => "dual",
            ScoringMode::Single => "single",
        }
    }
}

impl std::fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dual" | "double" => Ok(ScoringMode::Dual),
            "single" | "solo" => Ok(ScoringMode::Single),
            other => Err(format!("unknown scoring mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("dual".parse::<ScoringMode>().unwrap(), ScoringMode::Dual);
        assert_eq!(" Single ".parse::<ScoringMode>().unwrap(), ScoringMode::Single);
        assert!("triple".parse::<ScoringMode>().is_err());
    }
}
