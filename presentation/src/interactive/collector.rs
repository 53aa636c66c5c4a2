//! Console answer collector
//!
//! Reads multi-line answers from a line source (stdin in the binary).
//! An empty line submits the answer; `:end` and `:quit` on a line of their
//! own end the session early or abandon it.

use crate::output::console::ConsoleFormatter;
use assess_application::ports::answer_collector::{AnswerCollector, CollectedAnswer};
use assess_domain::{FinalResult, QuestionItem, ScoreVector};
use async_trait::async_trait;
use colored::Colorize;
use std::io::Write;
use std::time::Instant;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

const END_COMMAND: &str = ":end";
const QUIT_COMMAND: &str = ":quit";

/// Collects answers line by line and echoes scores to stdout
pub struct ConsoleAnswerCollector<R> {
    lines: Mutex<Lines<R>>,
    show_scores: bool,
}

impl ConsoleAnswerCollector<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin + Send> ConsoleAnswerCollector<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: Mutex::new(reader.lines()),
            show_scores: true,
        }
    }

    /// Whether each answer's score is printed right after scoring
    pub fn with_scores(mut self, show: bool) -> Self {
        self.show_scores = show;
        self
    }

    /// Read until an empty line ends a non-empty answer.
    ///
    /// Blank lines before any text are skipped. End of input submits what
    /// was typed so far, or abandons when nothing was.
    async fn read_answer(&self) -> CollectedAnswer {
        let started = Instant::now();
        let mut lines = self.lines.lock().await;
        let mut buffer: Vec<String> = Vec::new();

        loop {
            Self::prompt(buffer.is_empty());
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) | Err(_) => break,
            };
            let trimmed = line.trim();

            if buffer.is_empty() {
                match trimmed {
                    "" => continue,
                    END_COMMAND => return CollectedAnswer::EndSession,
                    QUIT_COMMAND => return CollectedAnswer::Abandon,
                    _ => {}
                }
            } else if trimmed.is_empty() {
                break;
            }
            buffer.push(line.trim_end().to_string());
        }

        if buffer.is_empty() {
            return CollectedAnswer::Abandon;
        }
        CollectedAnswer::Answer {
            text: buffer.join("\n"),
            elapsed: started.elapsed(),
        }
    }

    fn prompt(first: bool) {
        let marker = if first { ">>> " } else { "... " };
        print!("{}", marker.green());
        let _ = std::io::stdout().flush();
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> AnswerCollector for ConsoleAnswerCollector<R> {
    async fn collect(&self, index: usize, total: usize, item: &QuestionItem) -> CollectedAnswer {
        print!("{}", ConsoleFormatter::format_question(index, total, item));
        self.read_answer().await
    }

    fn show_score(&self, _index: usize, scores: &ScoreVector) {
        if self.show_scores {
            println!("{}", ConsoleFormatter::format_scores(scores));
        }
    }

    fn notify(&self, message: &str) {
        println!("{}", message.yellow());
    }

    fn show_result(&self, result: &FinalResult) {
        println!("\n{}", "测评完成！".green().bold());
        println!(
            "{} {:.1}/40 ({})",
            "总分:".bold(),
            result.total_score,
            result.level
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_domain::QuestionType;

    fn collector(input: &'static str) -> ConsoleAnswerCollector<BufReader<&'static [u8]>> {
        ConsoleAnswerCollector::new(BufReader::new(input.as_bytes()))
    }

    fn item() -> QuestionItem {
        QuestionItem::new("div_1", QuestionType::DivergentThinking, "发散思维题 1", "列举用途")
    }

    #[tokio::test]
    async fn test_multi_line_answer_ends_at_empty_line() {
        let c = collector("\n建房子\n当锤子\n\n下一题\n");

        match c.collect(0, 2, &item()).await {
            CollectedAnswer::Answer { text, .. } => assert_eq!(text, "建房子\n当锤子"),
            other => panic!("unexpected {:?}", other),
        }
        match c.collect(1, 2, &item()).await {
            CollectedAnswer::Answer { text, .. } => assert_eq!(text, "下一题"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_commands() {
        let c = collector(":end\n  :quit  \n");
        assert_eq!(c.collect(0, 1, &item()).await, CollectedAnswer::EndSession);
        assert_eq!(c.collect(0, 1, &item()).await, CollectedAnswer::Abandon);
    }

    #[tokio::test]
    async fn test_command_inside_answer_is_text() {
        let c = collector("第一行\n:end\n\n");
        match c.collect(0, 1, &item()).await {
            CollectedAnswer::Answer { text, .. } => assert_eq!(text, "第一行\n:end"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_end_of_input() {
        let c = collector("没有空行结尾");
        match c.collect(0, 1, &item()).await {
            CollectedAnswer::Answer { text, .. } => assert_eq!(text, "没有空行结尾"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(c.collect(0, 1, &item()).await, CollectedAnswer::Abandon);
    }
}
