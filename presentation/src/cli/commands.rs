//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for assessment results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Dimension table, per-question scores and recommendations
    Full,
    /// Level, total and recommendations only
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for assess_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => assess_domain::OutputFormat::Full,
            OutputFormat::Summary => assess_domain::OutputFormat::Summary,
            OutputFormat::Json => assess_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for creativity-assess
#[derive(Parser, Debug)]
#[command(name = "creativity-assess")]
#[command(author, version, about = "Creativity assessment scored by two LLM judges")]
#[command(long_about = r#"
creativity-assess runs an interactive creativity assessment.

A balanced set of questions is drawn from the catalog (divergent thinking,
convergent thinking, creative problem solving, imagination). Each answer is
scored on fluency, flexibility, originality and elaboration by two judges
whose scores are averaged; a judge that fails falls back silently.

While answering:
  finish an answer with an empty line
  :end     finish early and get a result for what was answered
  :quit    leave without a result

Configuration is merged from (lowest to highest priority):
1. Built-in defaults
2. ~/.config/creativity-assess/config.toml   Global config
3. ./assess.toml or ./.assess.toml           Project-level config
4. --config <path>                           Explicit config file
5. SILICONFLOW_BASE_URL, SILICONFLOW_MODEL_CHAT_A/B, MAX_QUESTIONS
6. ASSESS_* variables (e.g. ASSESS_JUDGES__A__MODEL)

Example:
  creativity-assess --name 张三 --student-id s001
  creativity-assess --questions 4 --single-judge
  creativity-assess --score "列举砖头的用途" --answer "建房、压纸、当锤子"
  creativity-assess --init-catalog
"#)]
pub struct Cli {
    /// Number of questions in the session (overrides config)
    #[arg(short = 'n', long, value_name = "N")]
    pub questions: Option<usize>,

    /// Subject name recorded with the result
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Subject identifier recorded with the result
    #[arg(long, value_name = "ID")]
    pub student_id: Option<String>,

    /// Score with judge A only
    #[arg(long)]
    pub single_judge: bool,

    /// Score one answer to this question and exit
    #[arg(long, value_name = "QUESTION", requires = "answer")]
    pub score: Option<String>,

    /// Answer to score (used with --score)
    #[arg(long, value_name = "TEXT", requires = "score")]
    pub answer: Option<String>,

    /// Generate missing catalog documents, report pool sizes and exit
    #[arg(long, conflicts_with = "score")]
    pub init_catalog: bool,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_interactive_defaults() {
        let cli = Cli::try_parse_from(["creativity-assess"]).unwrap();
        assert_eq!(cli.questions, None);
        assert!(cli.output.is_none());
        assert!(!cli.single_judge);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_score_requires_answer() {
        assert!(Cli::try_parse_from(["creativity-assess", "--score", "q"]).is_err());

        let cli =
            Cli::try_parse_from(["creativity-assess", "--score", "q", "--answer", "a"]).unwrap();
        assert_eq!(cli.score.as_deref(), Some("q"));
        assert_eq!(cli.answer.as_deref(), Some("a"));
    }

    #[test]
    fn test_output_and_verbosity() {
        let cli = Cli::try_parse_from(["creativity-assess", "-o", "json", "-vv", "-n", "4"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.questions, Some(4));
        assert_eq!(
            assess_domain::OutputFormat::from(OutputFormat::Json),
            assess_domain::OutputFormat::Json
        );
    }
}
