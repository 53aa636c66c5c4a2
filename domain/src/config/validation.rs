//! Structured configuration issues.
//!
//! Loaders collect these instead of failing on the first problem so the
//! CLI can print every warning and refuse to start only on errors.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A judge has no model name.
    EmptyModel,
    /// Temperature outside `[0, 2]`.
    TemperatureOutOfRange,
    /// Judge timeout of zero seconds.
    ZeroTimeout,
    /// Zero questions per session.
    ZeroQuestions,
    /// Fewer catalog items per type than questions per session.
    SmallCatalog,
    /// `judges.mode` is neither `dual` nor `single`.
    UnknownScoringMode,
    /// API key written into the config file.
    InlineApiKey,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", tag, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let issue = ConfigIssue::warning(ConfigIssueCode::ZeroQuestions, "no questions");
        assert_eq!(issue.to_string(), "warning: no questions");
        assert!(!issue.is_error());
        assert!(ConfigIssue::error(ConfigIssueCode::EmptyModel, "x").is_error());
    }
}
