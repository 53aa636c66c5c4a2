//! Run Assessment use case
//!
//! Drives one session through its phases:
//! initialize → sample questions → (present → collect → score)* → finalize.

use super::question_bank::QuestionBank;
use super::score_answer::ScoreAnswerUseCase;
use crate::config::AssessmentParams;
use crate::ports::answer_collector::{AnswerCollector, CollectedAnswer};
use crate::ports::catalog_store::{CatalogError, CatalogStore};
use crate::ports::progress::{NoProgress, ScoringProgress};
use crate::ports::result_sink::ResultSink;
use assess_domain::{
    AssessmentRecord, DomainError, FinalResult, QuestionItem, ScoreVector, SessionState, Subject,
    WorkflowPhase,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during an assessment
#[derive(Error, Debug)]
pub enum AssessmentError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AssessmentError {
    pub fn is_empty_session(&self) -> bool {
        matches!(self, AssessmentError::Domain(e) if e.is_empty_session())
    }
}

/// How an interactive run ended
#[derive(Debug)]
pub enum AssessmentOutcome {
    Completed(AssessmentRecord),
    Abandoned { answered: usize },
}

/// Session state machine for one subject.
///
/// Owns its [`SessionState`]; the catalog and scorer are shared.
pub struct AssessmentWorkflow<S: CatalogStore + 'static> {
    bank: Arc<QuestionBank<S>>,
    scorer: Arc<ScoreAnswerUseCase>,
    sink: Arc<dyn ResultSink>,
    params: AssessmentParams,
    session: SessionState,
    phase: WorkflowPhase,
}

impl<S: CatalogStore + 'static> AssessmentWorkflow<S> {
    pub fn new(
        bank: Arc<QuestionBank<S>>,
        scorer: Arc<ScoreAnswerUseCase>,
        sink: Arc<dyn ResultSink>,
        params: AssessmentParams,
        subject: Subject,
    ) -> Self {
        Self {
            bank,
            scorer,
            sink,
            params,
            session: SessionState::new(subject),
            phase: WorkflowPhase::Initializing,
        }
    }

    pub fn phase(&self) -> WorkflowPhase {
        self.phase
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    fn invalid(&self, action: &'static str) -> DomainError {
        DomainError::InvalidTransition {
            phase: self.phase.to_string(),
            action,
        }
    }

    /// Ensure the catalog, sample `count` items and record them as the
    /// session's question set.
    ///
    /// Returns fewer items than requested when the catalog is smaller.
    pub fn create_questions(&mut self, count: usize) -> Result<&[QuestionItem], AssessmentError> {
        if !matches!(
            self.phase,
            WorkflowPhase::Initializing | WorkflowPhase::QuestionsGenerated
        ) {
            return Err(self.invalid("generate questions").into());
        }
        if count == 0 {
            return Err(DomainError::InvalidQuestionCount(count).into());
        }

        let items = self.bank.sample(count)?;
        info!(
            "Session {}: {} questions sampled",
            self.session.session_id,
            items.len()
        );
        self.session.record_questions(items)?;
        self.phase = WorkflowPhase::after_generation(self.session.total_questions());
        Ok(&self.session.items)
    }

    /// Score a response to a question body, independent of session position
    pub async fn score_answer(&self, question: &str, answer: &str) -> ScoreVector {
        self.scorer.execute(question, answer).await
    }

    /// Hand out the current question and start waiting for its answer.
    ///
    /// Calling again while waiting returns the same question.
    pub fn present(&mut self) -> Result<&QuestionItem, DomainError> {
        let index = match self.phase {
            WorkflowPhase::QuestionsGenerated => 0,
            WorkflowPhase::Presenting(i) | WorkflowPhase::AwaitingAnswer(i) => i,
            _ => return Err(self.invalid("present a question")),
        };
        self.phase = WorkflowPhase::AwaitingAnswer(index);
        debug!("Presenting question {}", index);
        self.session
            .current_question()
            .ok_or_else(|| DomainError::InvalidTransition {
                phase: format!("AwaitingAnswer({})", index),
                action: "present a question",
            })
    }

    /// Record the answer to the presented question and score it
    pub async fn submit_answer(
        &mut self,
        response: &str,
        elapsed: Duration,
    ) -> Result<ScoreVector, AssessmentError> {
        self.submit_answer_with_progress(response, elapsed, &NoProgress)
            .await
    }

    pub async fn submit_answer_with_progress(
        &mut self,
        response: &str,
        elapsed: Duration,
        progress: &dyn ScoringProgress,
    ) -> Result<ScoreVector, AssessmentError> {
        let WorkflowPhase::AwaitingAnswer(index) = self.phase else {
            return Err(self.invalid("submit an answer").into());
        };

        let question = self
            .session
            .record_answer(response, elapsed.as_secs())?
            .item
            .content
            .clone();
        self.phase = WorkflowPhase::Scoring(index);

        let scores = self
            .scorer
            .execute_with_progress(&question, response, progress)
            .await;
        self.session.record_score(scores.clone())?;
        self.phase = WorkflowPhase::after_scoring(index, self.session.total_questions());
        Ok(scores)
    }

    /// Finalize with what has been answered so far and deliver the record.
    ///
    /// Rejected while nothing has been scored; the session stays open.
    pub fn finish(&mut self) -> Result<AssessmentRecord, AssessmentError> {
        if self.phase.is_terminal() || matches!(self.phase, WorkflowPhase::Scoring(_)) {
            return Err(self.invalid("finalize").into());
        }

        let result = FinalResult::from_scores(&self.session.scores)?;
        self.phase = WorkflowPhase::Finalizing;
        self.session.complete()?;

        let record = AssessmentRecord::from_session(&self.session, result);
        if let Err(e) = self.sink.deliver(&record) {
            warn!("Failed to deliver result for {}: {}", record.session_id, e);
        }
        self.phase = WorkflowPhase::Completed;

        info!(
            "Session {} completed: total {:.1} ({})",
            record.session_id, record.result.total_score, record.result.level
        );
        Ok(record)
    }

    pub fn abandon(&mut self) {
        info!(
            "Session {} abandoned after {} answers",
            self.session.session_id,
            self.session.answered_count()
        );
        self.session.abandon();
        self.phase = WorkflowPhase::Abandoned;
    }

    /// Run the whole session through an answer collector.
    pub async fn run(
        &mut self,
        collector: &dyn AnswerCollector,
        progress: &dyn ScoringProgress,
    ) -> Result<AssessmentOutcome, AssessmentError> {
        if self.phase == WorkflowPhase::Initializing {
            self.create_questions(self.params.max_questions)?;
        }

        let total = self.session.total_questions();

        while let Some(index) = self.phase.question_index() {
            let item = self.present()?.clone();

            match collector.collect(index, total, &item).await {
                CollectedAnswer::Answer { text, elapsed } => {
                    let scores = self
                        .submit_answer_with_progress(&text, elapsed, progress)
                        .await?;
                    collector.show_score(index, &scores);
                }
                CollectedAnswer::EndSession => {
                    if self.session.scores.is_empty() {
                        collector.notify("至少需要回答一道题才能结束测评");
                        continue;
                    }
                    info!("Session ended early at question {}", index);
                    break;
                }
                CollectedAnswer::Abandon => {
                    self.abandon();
                    return Ok(AssessmentOutcome::Abandoned {
                        answered: self.session.answered_count(),
                    });
                }
            }
        }

        let record = self.finish()?;
        collector.show_result(&record.result);
        Ok(AssessmentOutcome::Completed(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringParams;
    use crate::ports::result_sink::SinkError;
    use crate::use_cases::question_bank::tests::MemoryCatalogStore;
    use crate::use_cases::score_answer::tests::{Scripted, ScriptedJudge};
    use assess_domain::{AssessmentLevel, QuestionType, ScoreSource, SessionStatus};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    const EIGHT: &str = r#"{"fluency": 8, "flexibility": 8, "originality": 8, "elaboration": 8, "comments": "好"}"#;

    #[derive(Default)]
    struct RecordingSink {
        records: Mutex<Vec<AssessmentRecord>>,
        fail: bool,
    }

    impl ResultSink for RecordingSink {
        fn deliver(&self, record: &AssessmentRecord) -> Result<(), SinkError> {
            if self.fail {
                return Err(SinkError::Serialize("disk full".to_string()));
            }
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    struct ScriptedCollector {
        actions: Mutex<VecDeque<CollectedAnswer>>,
        notices: Mutex<Vec<String>>,
        shown: Mutex<Vec<usize>>,
    }

    impl ScriptedCollector {
        fn new(actions: Vec<CollectedAnswer>) -> Self {
            Self {
                actions: Mutex::new(actions.into()),
                notices: Mutex::new(Vec::new()),
                shown: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AnswerCollector for ScriptedCollector {
        async fn collect(&self, index: usize, _total: usize, _item: &QuestionItem) -> CollectedAnswer {
            self.shown.lock().unwrap().push(index);
            self.actions
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(CollectedAnswer::Abandon)
        }

        fn notify(&self, message: &str) {
            self.notices.lock().unwrap().push(message.to_string());
        }
    }

    fn answer(text: &str) -> CollectedAnswer {
        CollectedAnswer::Answer {
            text: text.to_string(),
            elapsed: Duration::from_secs(20),
        }
    }

    fn workflow_with(
        store: MemoryCatalogStore,
        judge_a: ScriptedJudge,
        judge_b: ScriptedJudge,
        sink: Arc<dyn ResultSink>,
        max_questions: usize,
    ) -> AssessmentWorkflow<MemoryCatalogStore> {
        let bank = Arc::new(QuestionBank::new(Arc::new(store), 5));
        let scorer = Arc::new(ScoreAnswerUseCase::new(
            Arc::new(judge_a),
            Arc::new(judge_b),
            ScoringParams::default().with_timeout(Duration::from_millis(200)),
        ));
        AssessmentWorkflow::new(
            bank,
            scorer,
            sink,
            AssessmentParams::default().with_max_questions(max_questions),
            Subject::new("s-1", "王五"),
        )
    }

    fn workflow(max_questions: usize, sink: Arc<dyn ResultSink>) -> AssessmentWorkflow<MemoryCatalogStore> {
        workflow_with(
            MemoryCatalogStore::default(),
            ScriptedJudge::always("a", EIGHT),
            ScriptedJudge::always("b", EIGHT),
            sink,
            max_questions,
        )
    }

    #[tokio::test]
    async fn test_full_run_completes_and_delivers() {
        let sink = Arc::new(RecordingSink::default());
        let mut wf = workflow(3, sink.clone());
        let collector =
            ScriptedCollector::new(vec![answer("一"), answer("二"), answer("三")]);

        let outcome = wf.run(&collector, &NoProgress).await.unwrap();
        let AssessmentOutcome::Completed(record) = outcome else {
            panic!("expected completion");
        };

        assert_eq!(record.evaluations.len(), 3);
        assert_eq!(record.result.total_score, 32.0);
        assert_eq!(record.result.level, AssessmentLevel::Good);
        assert_eq!(wf.phase(), WorkflowPhase::Completed);
        assert_eq!(wf.session().status, SessionStatus::Completed);
        assert_eq!(sink.records.lock().unwrap().len(), 1);
        assert_eq!(*collector.shown.lock().unwrap(), vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_phase_sequence() {
        let mut wf = workflow(2, Arc::new(RecordingSink::default()));
        assert_eq!(wf.phase(), WorkflowPhase::Initializing);

        wf.create_questions(2).unwrap();
        assert_eq!(wf.phase(), WorkflowPhase::QuestionsGenerated);

        wf.present().unwrap();
        assert_eq!(wf.phase(), WorkflowPhase::AwaitingAnswer(0));
        wf.submit_answer("答", Duration::from_secs(5)).await.unwrap();
        assert_eq!(wf.phase(), WorkflowPhase::Presenting(1));

        wf.present().unwrap();
        wf.submit_answer("答", Duration::from_secs(5)).await.unwrap();
        assert_eq!(wf.phase(), WorkflowPhase::Finalizing);

        wf.finish().unwrap();
        assert_eq!(wf.phase(), WorkflowPhase::Completed);
    }

    #[tokio::test]
    async fn test_early_end_averages_over_answered_only() {
        let a = ScriptedJudge::new(
            "a",
            vec![Scripted::Reply(EIGHT.to_string()), Scripted::Reply(EIGHT.replace('8', "6"))],
        );
        let b = ScriptedJudge::new(
            "b",
            vec![Scripted::Reply(EIGHT.to_string()), Scripted::Reply(EIGHT.replace('8', "6"))],
        );
        let sink = Arc::new(RecordingSink::default());
        let mut wf = workflow_with(MemoryCatalogStore::default(), a, b, sink, 5);
        let collector = ScriptedCollector::new(vec![
            answer("一"),
            answer("二"),
            CollectedAnswer::EndSession,
        ]);

        let AssessmentOutcome::Completed(record) = wf.run(&collector, &NoProgress).await.unwrap()
        else {
            panic!("expected completion");
        };
        assert_eq!(record.total_questions, 5);
        assert_eq!(record.result.evaluated_questions, 2);
        assert_eq!(record.result.total_score, 28.0);
    }

    #[tokio::test]
    async fn test_end_with_no_answers_is_refused() {
        let mut wf = workflow(2, Arc::new(RecordingSink::default()));
        let collector = ScriptedCollector::new(vec![
            CollectedAnswer::EndSession,
            answer("好的"),
            CollectedAnswer::EndSession,
        ]);

        let outcome = wf.run(&collector, &NoProgress).await.unwrap();
        assert!(matches!(outcome, AssessmentOutcome::Completed(_)));
        assert_eq!(collector.notices.lock().unwrap().len(), 1);
        assert_eq!(*collector.shown.lock().unwrap(), vec![0, 0, 1]);
    }

    #[tokio::test]
    async fn test_finish_without_answers_is_rejected() {
        let mut wf = workflow(2, Arc::new(RecordingSink::default()));
        wf.create_questions(2).unwrap();

        let err = wf.finish().unwrap_err();
        assert!(err.is_empty_session());
        assert_eq!(wf.phase(), WorkflowPhase::QuestionsGenerated);
        assert_eq!(wf.session().status, SessionStatus::InProgress);
    }

    #[tokio::test]
    async fn test_abandon() {
        let sink = Arc::new(RecordingSink::default());
        let mut wf = workflow(3, sink.clone());
        let collector = ScriptedCollector::new(vec![answer("一"), CollectedAnswer::Abandon]);

        let outcome = wf.run(&collector, &NoProgress).await.unwrap();
        assert!(matches!(outcome, AssessmentOutcome::Abandoned { answered: 1 }));
        assert_eq!(wf.session().status, SessionStatus::Abandoned);
        assert!(sink.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_catalog_cannot_complete() {
        let store = MemoryCatalogStore::default();
        let store = QuestionType::ALL
            .into_iter()
            .fold(store, |s, t| s.with_doc(t, Vec::new()));
        let mut wf = workflow_with(
            store,
            ScriptedJudge::always("a", EIGHT),
            ScriptedJudge::always("b", EIGHT),
            Arc::new(RecordingSink::default()),
            4,
        );

        let items = wf.create_questions(4).unwrap();
        assert!(items.is_empty());
        assert_eq!(wf.phase(), WorkflowPhase::Finalizing);

        let collector = ScriptedCollector::new(Vec::new());
        let err = wf.run(&collector, &NoProgress).await.unwrap_err();
        assert!(err.is_empty_session());
    }

    #[tokio::test]
    async fn test_submit_out_of_phase_is_rejected() {
        let mut wf = workflow(2, Arc::new(RecordingSink::default()));
        let err = wf.submit_answer("x", Duration::ZERO).await.unwrap_err();
        assert!(matches!(
            err,
            AssessmentError::Domain(DomainError::InvalidTransition { .. })
        ));
        assert!(matches!(
            wf.create_questions(0),
            Err(AssessmentError::Domain(DomainError::InvalidQuestionCount(0)))
        ));
    }

    #[tokio::test]
    async fn test_score_answer_is_position_independent() {
        let wf = workflow_with(
            MemoryCatalogStore::default(),
            ScriptedJudge::new("a", vec![Scripted::Fail("down".to_string())]),
            ScriptedJudge::new("b", vec![Scripted::Hang]),
            Arc::new(RecordingSink::default()),
            2,
        );
        let scores = wf.score_answer("列举砖头的用途", "盖房子").await;
        assert_eq!(scores.source, ScoreSource::Fallback);
        assert_eq!(scores.total(), 28.0);
        assert_eq!(wf.phase(), WorkflowPhase::Initializing);
    }

    #[tokio::test]
    async fn test_sink_failure_does_not_fail_finish() {
        let sink = Arc::new(RecordingSink {
            fail: true,
            ..Default::default()
        });
        let mut wf = workflow(1, sink);
        let collector = ScriptedCollector::new(vec![answer("一")]);

        let outcome = wf.run(&collector, &NoProgress).await.unwrap();
        assert!(matches!(outcome, AssessmentOutcome::Completed(_)));
    }
}
