//! Score Answer use case
//!
//! Builds the judge prompts, fans the calls out, and reconciles whatever
//! comes back into a single score vector.

use crate::config::ScoringParams;
use crate::ports::judge::{Judge, JudgeError};
use crate::ports::progress::{NoProgress, ScoringProgress};
use crate::ports::scoring_logger::{NoScoringLogger, ScoringEvent, ScoringLogger};
use assess_domain::{
    JudgeOutcome, JudgeSlot, PromptTemplate, ScoreVector, ScoringMode, reconcile, resolve_single,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Use case for scoring one answer.
///
/// Never fails: judge errors, timeouts and garbage output all end up as
/// default values flagged in [`ScoreVector::source`].
pub struct ScoreAnswerUseCase {
    judge_a: Arc<dyn Judge>,
    judge_b: Arc<dyn Judge>,
    params: ScoringParams,
    logger: Arc<dyn ScoringLogger>,
}

impl ScoreAnswerUseCase {
    pub fn new(judge_a: Arc<dyn Judge>, judge_b: Arc<dyn Judge>, params: ScoringParams) -> Self {
        Self {
            judge_a,
            judge_b,
            params,
            logger: Arc::new(NoScoringLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ScoringLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn mode(&self) -> ScoringMode {
        self.params.mode
    }

    /// Score with default (no-op) progress
    pub async fn execute(&self, question: &str, answer: &str) -> ScoreVector {
        self.execute_with_progress(question, answer, &NoProgress).await
    }

    /// Score according to the configured mode, reporting progress
    pub async fn execute_with_progress(
        &self,
        question: &str,
        answer: &str,
        progress: &dyn ScoringProgress,
    ) -> ScoreVector {
        let scores = match self.params.mode {
            ScoringMode::Dual => self.score_dual(question, answer, progress).await,
            ScoringMode::Single => self.score_single(question, answer, progress).await,
        };

        self.logger.log(ScoringEvent::new(
            "score_reconciled",
            json!({
                "mode": self.params.mode.as_str(),
                "source": scores.source.as_str(),
                "scores": &scores,
            }),
        ));
        progress.on_scoring_complete(scores.source);
        scores
    }

    /// Invoke both judges concurrently and reconcile their outcomes.
    ///
    /// Both calls are awaited before reconciling, even if one fails fast.
    pub async fn score_dual(
        &self,
        question: &str,
        answer: &str,
        progress: &dyn ScoringProgress,
    ) -> ScoreVector {
        info!("Scoring answer with two judges");
        progress.on_scoring_start(JudgeSlot::BOTH.len());

        let mut join_set = JoinSet::new();

        for slot in JudgeSlot::BOTH {
            let judge = Arc::clone(self.judge_for(slot));
            let prompt = PromptTemplate::for_judge(slot, question, answer);
            let timeout = self.params.judge_timeout;
            self.log_prompt(slot, judge.name(), &prompt);

            join_set.spawn(async move {
                let outcome = Self::invoke_judge(judge.as_ref(), &prompt, timeout).await;
                (slot, outcome)
            });
        }

        let mut outcomes: [Option<JudgeOutcome>; 2] = [None, None];

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((slot, outcome)) => {
                    if outcome.is_parsed() {
                        debug!("{} produced scores", slot);
                    } else {
                        warn!("{} gave no usable scores: {}", slot, outcome.describe());
                    }
                    progress.on_judge_complete(slot, outcome.is_parsed());
                    self.log_outcome(slot, &outcome);
                    outcomes[slot.index()] = Some(outcome);
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                }
            }
        }

        let [a, b] = outcomes.map(|o| o.unwrap_or_else(|| JudgeOutcome::call_failed("task aborted")));
        reconcile(&a, &b)
    }

    /// Single-judge mode: judge A without role framing
    pub async fn score_single(
        &self,
        question: &str,
        answer: &str,
        progress: &dyn ScoringProgress,
    ) -> ScoreVector {
        info!("Scoring answer with a single judge");
        progress.on_scoring_start(1);

        let prompt = PromptTemplate::single(question, answer);
        self.log_prompt(JudgeSlot::A, self.judge_a.name(), &prompt);

        let outcome =
            Self::invoke_judge(self.judge_a.as_ref(), &prompt, self.params.judge_timeout).await;
        if !outcome.is_parsed() {
            warn!("Judge gave no usable scores: {}", outcome.describe());
        }
        progress.on_judge_complete(JudgeSlot::A, outcome.is_parsed());
        self.log_outcome(JudgeSlot::A, &outcome);

        resolve_single(&outcome)
    }

    fn judge_for(&self, slot: JudgeSlot) -> &Arc<dyn Judge> {
        match slot {
            JudgeSlot::A => &self.judge_a,
            JudgeSlot::B => &self.judge_b,
        }
    }

    /// One attempt under the timeout; every failure becomes an outcome
    async fn invoke_judge(judge: &dyn Judge, prompt: &str, timeout: Duration) -> JudgeOutcome {
        match tokio::time::timeout(timeout, judge.invoke(prompt)).await {
            Ok(Ok(raw)) => JudgeOutcome::from_raw(raw),
            Ok(Err(e)) => JudgeOutcome::call_failed(e.to_string()),
            Err(_) => JudgeOutcome::call_failed(JudgeError::Timeout.to_string()),
        }
    }

    fn log_prompt(&self, slot: JudgeSlot, judge: &str, prompt: &str) {
        self.logger.log(ScoringEvent::new(
            "judge_prompt",
            json!({
                "slot": slot.tag(),
                "judge": judge,
                "prompt": prompt,
            }),
        ));
    }

    fn log_outcome(&self, slot: JudgeSlot, outcome: &JudgeOutcome) {
        let payload = match outcome {
            JudgeOutcome::Parsed(scores) => json!({
                "slot": slot.tag(),
                "status": "parsed",
                "scores": scores,
            }),
            JudgeOutcome::Unparseable { raw, error } => json!({
                "slot": slot.tag(),
                "status": "unparseable",
                "error": error.to_string(),
                "raw": raw,
            }),
            JudgeOutcome::CallFailed { reason } => json!({
                "slot": slot.tag(),
                "status": "call_failed",
                "error": reason,
            }),
        };
        self.logger.log(ScoringEvent::new("judge_response", payload));
    }
}
