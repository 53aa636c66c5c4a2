//! Presentation layer for creativity-assess
//!
//! This crate contains CLI definitions, the console answer collector,
//! output formatters and progress reporters.

pub mod cli;
pub mod interactive;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use interactive::collector::ConsoleAnswerCollector;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressMode, ProgressReporter, SimpleProgress};
