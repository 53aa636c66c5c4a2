//! Console output formatter for assessment results

use assess_domain::{
    AssessmentLevel, AssessmentRecord, Catalog, FinalResult, OutputFormat, QuestionItem,
    QuestionType, ScoreVector,
};
use colored::{ColoredString, Colorize};

/// Formats questions, scores and results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a finished assessment in the requested format
    pub fn format(record: &AssessmentRecord, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format_full(record),
            OutputFormat::Summary => Self::format_summary(&record.result),
            OutputFormat::Json => Self::format_json(record),
        }
    }

    /// Dimension table, per-question scores and recommendations
    pub fn format_full(record: &AssessmentRecord) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("创造力测评报告"));
        output.push('\n');

        output.push_str(&format!(
            "{} {} ({})\n",
            "Subject:".cyan().bold(),
            record.subject.name,
            record.subject.id
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Session:".cyan().bold(),
            record.session_id
        ));
        output.push_str(&format!(
            "{} {}/{}\n",
            "Evaluated:".cyan().bold(),
            record.result.evaluated_questions,
            record.total_questions
        ));

        output.push_str(&Self::section_header("Dimensions"));
        for score in &record.result.dimension_scores {
            output.push_str(&format!(
                "  {:<6} {:>5.1}/{:<4} {:>5.1}%  {}\n",
                score.dimension.label(),
                score.score,
                score.max_score,
                score.percentage,
                Self::level(score.level)
            ));
        }

        output.push_str(&Self::section_header("Questions"));
        for (i, evaluation) in record.evaluations.iter().enumerate() {
            let line = format!(
                "{:>2}. {:<8} {:>5.1}/40  ({} 字, {}s)",
                i + 1,
                evaluation.question_id,
                evaluation.scores.total(),
                evaluation.answer_length,
                evaluation.elapsed_secs
            );
            if evaluation.scores.source.is_degraded() {
                output.push_str(&format!(
                    "  {} {}\n",
                    line,
                    format!("[{}]", evaluation.scores.source).yellow()
                ));
            } else {
                output.push_str(&format!("  {}\n", line));
            }
        }

        output.push_str(&Self::section_header("Result"));
        output.push_str(&Self::result_body(&record.result));

        output.push_str(&Self::footer());
        output
    }

    /// Level, total and recommendations only
    pub fn format_summary(result: &FinalResult) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== 测评结果 ===".cyan().bold()));
        output.push_str(&Self::result_body(result));
        output
    }

    /// Format as JSON
    pub fn format_json(record: &AssessmentRecord) -> String {
        serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string())
    }

    fn result_body(result: &FinalResult) -> String {
        let mut output = format!(
            "{} {:.1}/40  {}\n",
            "Total:".bold(),
            result.total_score,
            Self::level(result.level)
        );

        if result.degraded_evaluations > 0 {
            output.push_str(&format!(
                "{}\n",
                format!(
                    "{} of {} evaluations used fallback scores",
                    result.degraded_evaluations, result.evaluated_questions
                )
                .yellow()
            ));
        }

        output.push_str(&format!("\n{}\n", "Recommendations:".green().bold()));
        for recommendation in &result.recommendations {
            output.push_str(&format!("  * {}\n", recommendation));
        }
        output
    }

    /// Question prompt shown before collecting an answer
    pub fn format_question(index: usize, total: usize, item: &QuestionItem) -> String {
        let mut output = format!(
            "\n{} {}\n",
            format!("── 第 {}/{} 题 · {} ──", index + 1, total, item.question_type.label())
                .yellow()
                .bold(),
            item.title.bold()
        );
        output.push_str(&format!("{}\n", item.content));

        if !item.dimensions.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                "考查维度:".dimmed(),
                item.dimension_labels()
            ));
        }
        output.push_str(&format!(
            "{}\n",
            format!(
                "建议用时 {} 分钟，空行提交，:end 提前结束，:quit 退出",
                item.time_limit.div_ceil(60)
            )
            .dimmed()
        ));
        output
    }

    /// One reconciled score vector
    pub fn format_scores(scores: &ScoreVector) -> String {
        let mut output = String::new();
        for (dimension, value) in scores.iter() {
            output.push_str(&format!("  {:<6} {:>4.1}\n", dimension.label(), value));
        }
        output.push_str(&format!("  {} {:.1}/40", "总分".bold(), scores.total()));
        if scores.source.is_degraded() {
            output.push_str(&format!(" {}", format!("[{}]", scores.source).yellow()));
        }
        output.push('\n');

        if !scores.comments.is_empty() {
            output.push_str(&format!("  {} {}\n", "评语:".dimmed(), scores.comments));
        }
        output
    }

    /// A standalone score (one-shot scoring) in the requested format
    pub fn format_score_result(scores: &ScoreVector, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(scores).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Full | OutputFormat::Summary => Self::format_scores(scores),
        }
    }

    /// Pool sizes after catalog preparation
    pub fn format_catalog(catalog: &Catalog, generated: &[QuestionType]) -> String {
        let mut output = Self::section_header("Catalog");
        for question_type in QuestionType::ALL {
            let marker = if generated.contains(&question_type) {
                " (generated)".green().to_string()
            } else {
                String::new()
            };
            output.push_str(&format!(
                "  {:<12} {:>4}{}\n",
                question_type.label(),
                catalog.pool(question_type).len(),
                marker
            ));
        }
        output.push_str(&format!(
            "  {} {}\n",
            "Total:".bold(),
            catalog.total_items()
        ));
        output
    }

    fn level(level: AssessmentLevel) -> ColoredString {
        match level {
            AssessmentLevel::Excellent => level.as_str().green().bold(),
            AssessmentLevel::Good => level.as_str().cyan().bold(),
            AssessmentLevel::Average => level.as_str().yellow().bold(),
            AssessmentLevel::NeedsImprovement => level.as_str().red().bold(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_domain::{ScoreSource, SessionState, Subject};

    fn record(scores: Vec<ScoreVector>) -> AssessmentRecord {
        let mut session = SessionState::new(Subject::new("s001", "张三"));
        let items = (0..scores.len())
            .map(|i| {
                QuestionItem::new(
                    format!("div_{}", i),
                    QuestionType::DivergentThinking,
                    "发散思维题",
                    "请列举砖头的用途",
                )
            })
            .collect();
        session.record_questions(items).unwrap();
        for score in &scores {
            session.record_answer("建房子", 30).unwrap();
            session.record_score(score.clone()).unwrap();
        }
        session.complete().unwrap();
        let result = FinalResult::from_scores(&session.scores).unwrap();
        AssessmentRecord::from_session(&session, result)
    }

    #[test]
    fn test_summary_shows_level_and_recommendations() {
        colored::control::set_override(false);
        let record = record(vec![ScoreVector::uniform(9.5)]);

        let output = ConsoleFormatter::format(&record, OutputFormat::Summary);
        assert!(output.contains("38.0/40"));
        assert!(output.contains("优秀"));
        assert!(output.contains("恭喜"));
        assert!(!output.contains("fallback"));
    }

    #[test]
    fn test_full_marks_degraded_questions() {
        colored::control::set_override(false);
        let record = record(vec![
            ScoreVector::uniform(8.0).with_source(ScoreSource::Consensus),
            ScoreVector::neutral().with_source(ScoreSource::Fallback),
        ]);

        let output = ConsoleFormatter::format_full(&record);
        assert!(output.contains("张三 (s001)"));
        assert!(output.contains("div_1"));
        assert!(output.contains("[fallback]"));
        assert!(output.contains("1 of 2 evaluations used fallback scores"));
    }

    #[test]
    fn test_json_is_the_record() {
        let record = record(vec![ScoreVector::uniform(6.0)]);

        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&record)).unwrap();
        assert_eq!(json["session_id"], record.session_id.as_str());
        assert_eq!(json["result"]["evaluated_questions"], 1);
    }

    #[test]
    fn test_scores_show_comments() {
        colored::control::set_override(false);
        let scores = ScoreVector::uniform(7.5).with_comments("想法新颖");

        let output = ConsoleFormatter::format_scores(&scores);
        assert!(output.contains("流畅性"));
        assert!(output.contains("30.0/40"));
        assert!(output.contains("想法新颖"));
    }

    #[test]
    fn test_score_result_as_json_keeps_source() {
        let scores = ScoreVector::neutral();

        let json: serde_json::Value = serde_json::from_str(&ConsoleFormatter::format_score_result(
            &scores,
            OutputFormat::Json,
        ))
        .unwrap();
        assert_eq!(json["fluency"], 7.0);
        assert_eq!(json["source"], "fallback");
    }

    #[test]
    fn test_question_prompt() {
        colored::control::set_override(false);
        let item = QuestionItem::new("ima_2", QuestionType::Imagination, "想象力测试 2", "描述未来城市");

        let output = ConsoleFormatter::format_question(1, 5, &item);
        assert!(output.contains("第 2/5 题"));
        assert!(output.contains("描述未来城市"));
        assert!(output.contains("建议用时 5 分钟"));
    }
}
