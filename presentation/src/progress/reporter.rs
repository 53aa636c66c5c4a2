//! Progress reporting while the judges score an answer

use assess_application::ports::progress::{NoProgress, ScoringProgress};
use assess_domain::{JudgeSlot, ScoreSource};
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports judge fan-out with an indicatif spinner bar
pub struct ProgressReporter {
    multi: MultiProgress,
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bar: Mutex::new(None),
        }
    }

    fn scoring_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:20.cyan/blue}] {pos}/{len} {msg}")
            .map(|style| style.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }

    fn source_message(source: ScoreSource) -> String {
        match source {
            ScoreSource::Consensus | ScoreSource::Single => "评分完成".green().to_string(),
            ScoreSource::JudgeA | ScoreSource::JudgeB => {
                format!("评分完成 ({})", source).yellow().to_string()
            }
            ScoreSource::Fallback => "评分失败，使用默认分".red().to_string(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringProgress for ProgressReporter {
    fn on_scoring_start(&self, judges: usize) {
        let pb = self.multi.add(ProgressBar::new(judges as u64));
        pb.set_style(Self::scoring_style());
        pb.set_prefix("评分中");
        pb.set_message("waiting for judges...");
        pb.enable_steady_tick(Duration::from_millis(120));

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_judge_complete(&self, slot: JudgeSlot, success: bool) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let status = if success {
                format!("{} {}", "v".green(), slot)
            } else {
                format!("{} {}", "x".red(), slot)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_scoring_complete(&self, source: ScoreSource) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(Self::source_message(source));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ScoringProgress for SimpleProgress {
    fn on_scoring_start(&self, judges: usize) {
        println!("{} {} ({} judges)", "->".cyan(), "评分中".bold(), judges);
    }

    fn on_judge_complete(&self, slot: JudgeSlot, success: bool) {
        if success {
            println!("  {} {}", "v".green(), slot);
        } else {
            println!("  {} {} (failed)", "x".red(), slot);
        }
    }

    fn on_scoring_complete(&self, source: ScoreSource) {
        println!("  {}", ProgressReporter::source_message(source));
    }
}

/// How scoring progress is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    Hidden,
    Bar,
    Plain,
}

impl ProgressMode {
    /// `--quiet` hides progress; a non-terminal stdout gets plain lines
    pub fn select(quiet: bool, is_terminal: bool) -> Self {
        match (quiet, is_terminal) {
            (true, _) => ProgressMode::Hidden,
            (false, true) => ProgressMode::Bar,
            (false, false) => ProgressMode::Plain,
        }
    }

    pub fn reporter(self) -> Box<dyn ScoringProgress> {
        match self {
            ProgressMode::Hidden => Box::new(NoProgress),
            ProgressMode::Bar => Box::new(ProgressReporter::new()),
            ProgressMode::Plain => Box::new(SimpleProgress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_lifecycle_clears_bar() {
        let reporter = ProgressReporter::new();
        reporter.on_scoring_start(2);
        reporter.on_judge_complete(JudgeSlot::A, true);
        reporter.on_judge_complete(JudgeSlot::B, false);
        assert!(reporter.bar.lock().unwrap().is_some());

        reporter.on_scoring_complete(ScoreSource::JudgeA);
        assert!(reporter.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_complete_without_start_is_ignored() {
        let reporter = ProgressReporter::new();
        reporter.on_judge_complete(JudgeSlot::A, true);
        reporter.on_scoring_complete(ScoreSource::Consensus);
        assert!(reporter.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_mode_selection() {
        assert_eq!(ProgressMode::select(true, true), ProgressMode::Hidden);
        assert_eq!(ProgressMode::select(true, false), ProgressMode::Hidden);
        assert_eq!(ProgressMode::select(false, true), ProgressMode::Bar);
        assert_eq!(ProgressMode::select(false, false), ProgressMode::Plain);
    }

    #[test]
    fn test_plain_reporter_runs_full_lifecycle() {
        let reporter = ProgressMode::Plain.reporter();
        reporter.on_scoring_start(2);
        reporter.on_judge_complete(JudgeSlot::A, true);
        reporter.on_judge_complete(JudgeSlot::B, false);
        reporter.on_scoring_complete(ScoreSource::JudgeA);
    }

    #[test]
    fn test_source_message_flags_fallback() {
        colored::control::set_override(false);
        assert_eq!(ProgressReporter::source_message(ScoreSource::Consensus), "评分完成");
        assert_eq!(
            ProgressReporter::source_message(ScoreSource::JudgeB),
            "评分完成 (judge_b)"
        );
        assert!(ProgressReporter::source_message(ScoreSource::Fallback).contains("默认分"));
    }
}
