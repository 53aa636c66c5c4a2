//! Output format value object

use serde::{Deserialize, Serialize};

/// How a final result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Per-dimension table, per-question scores and recommendations
    Full,
    /// Level, total and recommendations only (default)
    #[default]
    Summary,
    /// JSON output
    Json,
}
