//! CLI entrypoint for creativity-assess
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use assess_application::{AssessmentOutcome, AssessmentWorkflow, QuestionBank, ScoreAnswerUseCase};
use assess_domain::{OutputFormat, ScoringMode, Subject};
use assess_infrastructure::{
    ConfigError, ConfigLoader, FileConfig, JsonCatalogStore, JsonlResultSink, JsonlScoringLogger,
    JudgeFactory,
};
use assess_presentation::{Cli, ConsoleAnswerCollector, ConsoleFormatter, ProgressMode};
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(ConfigError::from)?
    };
    apply_cli_overrides(&cli, &mut config);

    let _log_guard = init_logging(cli.verbose, &config.output.log_dir);
    info!("Starting creativity-assess");

    for issue in config.ensure_valid()? {
        warn!("{}", issue);
    }

    if !config.output.color {
        colored::control::set_override(false);
    }
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let store = Arc::new(JsonCatalogStore::new(config.catalog.dir.clone()));
    let bank = Arc::new(QuestionBank::new(store, config.assessment.items_per_type));

    if cli.init_catalog {
        let generated = bank.ensure_catalog()?;
        println!("{}", ConsoleFormatter::format_catalog(bank.catalog(), &generated));
        return Ok(());
    }

    let (judge_a, judge_b) = JudgeFactory::build_pair(&config.judges)?;
    let mut scorer = ScoreAnswerUseCase::new(judge_a, judge_b, config.scoring_params());
    if config.output.transcript
        && let Some(logger) = JsonlScoringLogger::new(config.output.transcript_path())
    {
        scorer = scorer.with_logger(Arc::new(logger));
    }
    let scorer = Arc::new(scorer);

    let progress = ProgressMode::select(cli.quiet, std::io::stdout().is_terminal()).reporter();

    // One-shot scoring
    if let (Some(question), Some(answer)) = (&cli.score, &cli.answer) {
        let scores = scorer
            .execute_with_progress(question, answer, progress.as_ref())
            .await;
        println!("{}", ConsoleFormatter::format_score_result(&scores, format));
        return Ok(());
    }

    let subject = match (cli.student_id.clone(), cli.name.clone()) {
        (None, None) => Subject::anonymous(),
        (id, name) => Subject::new(
            id.unwrap_or_else(|| "anonymous".to_string()),
            name.unwrap_or_default(),
        ),
    };

    let sink = Arc::new(JsonlResultSink::new(config.output.results_file.clone()));
    let mut workflow = AssessmentWorkflow::new(
        bank,
        scorer,
        sink,
        config.assessment_params(),
        subject,
    );

    if !cli.quiet {
        print_banner(&config);
    }

    let collector = ConsoleAnswerCollector::stdin().with_scores(format != OutputFormat::Json);
    let outcome = match workflow.run(&collector, progress.as_ref()).await {
        Ok(outcome) => outcome,
        Err(e) if e.is_empty_session() => bail!(
            "No questions could be drawn from {}; run with --init-catalog first",
            config.catalog.dir.display()
        ),
        Err(e) => return Err(e.into()),
    };

    match outcome {
        AssessmentOutcome::Completed(record) => {
            println!("{}", ConsoleFormatter::format(&record, format));
        }
        AssessmentOutcome::Abandoned { answered } => {
            println!("测评已退出（已回答 {} 题），未生成结果", answered);
        }
    }

    Ok(())
}

fn apply_cli_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(questions) = cli.questions {
        config.assessment.max_questions = questions;
    }
    if cli.single_judge {
        config.judges.mode = ScoringMode::Single.to_string();
    }
}

/// Console output filtered by `-v`; a daily-rotated `app.log` under
/// `log_dir` always receives at least `info`.
fn init_logging(verbose: u8, log_dir: &Path) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(level));

    let (file, guard) = if std::fs::create_dir_all(log_dir).is_ok() {
        let appender = tracing_appender::rolling::daily(log_dir, "app.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let file_level = if verbose >= 2 { level } else { "info" };
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(EnvFilter::new(file_level));
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry().with(console).with(file).init();
    guard
}

fn print_banner(config: &FileConfig) {
    println!();
    println!("+============================================================+");
    println!("|              创造力测评 - Creativity Assessment             |");
    println!("+============================================================+");
    println!();
    println!(
        "共 {} 题，建议总用时 {} 分钟",
        config.assessment.max_questions, config.assessment.time_limit_minutes
    );
    println!(
        "Judges: {} / {} ({})",
        config.judges.a.model,
        config.judges.b.model,
        config.judges.parse_mode().0
    );
}
