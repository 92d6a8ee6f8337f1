//! Debate session state machine
//!
//! A single in-memory session owns the live stage, transcript, verdict,
//! round presentation state, and the archive of finished debates. Stages:
//!
//! ```text
//! form -> debate -> judging -> verdict -> (reset) -> form
//!                      |
//!                      +--> debate  (judgment failure, transcript kept)
//! ```
//!
//! Concurrency: the session is driven by one logical caller; every
//! operation takes `&mut self`, so two turn sequences or judgments can
//! never be in flight at once. In-flight requests are not cancellable;
//! completions are guarded by an operation sequence number so a result
//! that arrives after the session moved on is discarded rather than
//! applied (see [`DebateSession::finish_judging`]).

use crate::ports::debate_gateway::DebateGateway;
use crate::ports::progress::DebateProgress;
use crate::use_cases::run_judgment::{RunJudgmentError, RunJudgmentUseCase};
use crate::use_cases::run_round::{RunRoundError, RunRoundUseCase};
use council_domain::{
    rounds_of, AgentId, DebateHistory, Dilemma, HistoryEntry, HistoryId, RoundsView, Transcript,
    Verdict, ViewMode,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// The live session stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Awaiting a dilemma
    Form,
    /// Transcript accumulating turns
    Debate,
    /// Judgment request in flight
    Judging,
    /// Verdict stored, session finished
    Verdict,
}

/// Tab selection when viewing an archived entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryTab {
    Debate,
    Verdict,
}

/// Errors surfaced by session operations
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Operation not allowed in stage {0:?}")]
    WrongStage(Stage),

    #[error("No active transcript")]
    NoTranscript,

    #[error("History entry not found: {0}")]
    HistoryEntryNotFound(HistoryId),

    #[error(transparent)]
    Round(#[from] RunRoundError),

    #[error("Judgment failed: {0}")]
    Judgment(#[from] RunJudgmentError),
}

/// Handle for one in-flight judgment attempt
///
/// Carries the operation sequence number captured when the attempt began;
/// a completion whose ticket no longer matches the session is stale and
/// gets discarded.
#[derive(Debug)]
pub struct OpTicket {
    seq: u64,
}

/// One in-memory debate session plus its archive
pub struct DebateSession<G: DebateGateway + 'static> {
    round_use_case: RunRoundUseCase<G>,
    judgment_use_case: RunJudgmentUseCase<G>,
    panel: Vec<AgentId>,
    stage: Stage,
    transcript: Option<Transcript>,
    verdict: Option<Verdict>,
    rounds_view: RoundsView,
    history: DebateHistory,
    selected_history: Option<HistoryId>,
    history_tab: HistoryTab,
    archive_rounds: RoundsView,
    /// Bumped on every stage-changing operation; stale guard
    op_seq: u64,
    /// Per-process sequence for history ids within the same clock tick
    history_seq: u64,
}

impl<G: DebateGateway + 'static> DebateSession<G> {
    pub fn new(gateway: Arc<G>, panel: Vec<AgentId>) -> Self {
        Self {
            round_use_case: RunRoundUseCase::new(Arc::clone(&gateway)),
            judgment_use_case: RunJudgmentUseCase::new(gateway),
            panel,
            stage: Stage::Form,
            transcript: None,
            verdict: None,
            rounds_view: RoundsView::new(ViewMode::Live),
            history: DebateHistory::new(),
            selected_history: None,
            history_tab: HistoryTab::Debate,
            archive_rounds: RoundsView::new(ViewMode::Archive),
            op_seq: 0,
            history_seq: 0,
        }
    }

    // ==================== Accessors ====================

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn panel(&self) -> &[AgentId] {
        &self.panel
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_ref()
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    pub fn history(&self) -> &DebateHistory {
        &self.history
    }

    pub fn rounds_view(&self) -> &RoundsView {
        &self.rounds_view
    }

    /// Number of rounds derived from the live transcript
    pub fn round_count(&self) -> usize {
        match &self.transcript {
            Some(t) => rounds_of(t.turns(), self.panel.len()).len(),
            None => 0,
        }
    }

    /// Toggle an earlier round of the live transcript
    pub fn toggle_round(&mut self, index: usize) {
        let count = self.round_count();
        self.rounds_view.toggle(index, count);
    }

    // ==================== Debate flow ====================

    /// Start a debate: run the opening round over the panel
    pub async fn start_debate(
        &mut self,
        dilemma: Dilemma,
        progress: &dyn DebateProgress,
    ) -> Result<(), SessionError> {
        if self.stage != Stage::Form {
            return Err(SessionError::WrongStage(self.stage));
        }

        info!("Starting debate: {}", dilemma.title());
        self.op_seq += 1;
        self.stage = Stage::Debate;
        self.rounds_view = RoundsView::new(ViewMode::Live);

        let transcript = self
            .round_use_case
            .opening(&dilemma, &self.panel, progress)
            .await?;
        self.transcript = Some(transcript);
        Ok(())
    }

    /// Run one more round over the existing transcript
    pub async fn continue_debate(
        &mut self,
        progress: &dyn DebateProgress,
    ) -> Result<(), SessionError> {
        if self.stage != Stage::Debate {
            return Err(SessionError::WrongStage(self.stage));
        }
        let Some(transcript) = self.transcript.as_mut() else {
            return Err(SessionError::NoTranscript);
        };

        self.round_use_case
            .continuation(transcript, &self.panel, progress)
            .await?;
        Ok(())
    }

    // ==================== Judgment ====================

    /// Enter the judging stage and obtain a completion ticket
    pub fn begin_judging(&mut self) -> Result<OpTicket, SessionError> {
        if self.stage != Stage::Debate {
            return Err(SessionError::WrongStage(self.stage));
        }
        if self.transcript.is_none() {
            return Err(SessionError::NoTranscript);
        }

        self.op_seq += 1;
        self.stage = Stage::Judging;
        Ok(OpTicket { seq: self.op_seq })
    }

    /// Apply the outcome of a judgment attempt
    ///
    /// A stale ticket (the session has since reset or moved on) discards
    /// the outcome without touching any state. A failure rolls the stage
    /// back to debate with the transcript untouched and is surfaced to
    /// the caller; no automatic retry happens.
    pub fn finish_judging(
        &mut self,
        ticket: OpTicket,
        outcome: Result<Verdict, RunJudgmentError>,
    ) -> Result<(), SessionError> {
        if ticket.seq != self.op_seq {
            debug!("Discarding stale judgment completion");
            return Ok(());
        }

        match outcome {
            Ok(verdict) => {
                info!("Verdict stored");
                self.verdict = Some(verdict);
                self.stage = Stage::Verdict;
                Ok(())
            }
            Err(e) => {
                self.stage = Stage::Debate;
                Err(SessionError::Judgment(e))
            }
        }
    }

    /// Request the judge's verdict over the full transcript
    pub async fn judge(&mut self, progress: &dyn DebateProgress) -> Result<(), SessionError> {
        let ticket = self.begin_judging()?;
        let Some(transcript) = self.transcript.as_ref() else {
            return Err(SessionError::NoTranscript);
        };

        let outcome = self.judgment_use_case.execute(transcript, progress).await;
        self.finish_judging(ticket, outcome)
    }

    // ==================== Reset & archive ====================

    /// Reset the session back to the form stage
    ///
    /// If both a transcript and a verdict are present the finished debate
    /// is archived first (most-recent-first); an abandoned debate leaves
    /// no trace. Returns the id of the archived entry, if one was created.
    pub fn reset(&mut self, now_millis: i64, date: impl Into<String>) -> Option<HistoryId> {
        self.op_seq += 1;

        let archived = match (self.transcript.take(), self.verdict.take()) {
            (Some(transcript), Some(verdict)) => {
                self.history_seq += 1;
                let id = HistoryId::new(now_millis, self.history_seq);
                info!("Archiving session {}", id);
                self.history
                    .archive(HistoryEntry::new(id.clone(), date, transcript, verdict));
                Some(id)
            }
            _ => None,
        };

        self.stage = Stage::Form;
        self.rounds_view = RoundsView::new(ViewMode::Live);
        self.selected_history = None;
        self.history_tab = HistoryTab::Debate;
        archived
    }

    // ==================== History browsing ====================

    /// Select an archived entry for read-only viewing
    ///
    /// Independent of the main stage; the live session is unaffected.
    pub fn open_history(&mut self, id: &HistoryId) -> Result<(), SessionError> {
        if self.history.get(id).is_none() {
            return Err(SessionError::HistoryEntryNotFound(id.clone()));
        }
        self.selected_history = Some(id.clone());
        self.history_tab = HistoryTab::Debate;
        self.archive_rounds = RoundsView::new(ViewMode::Archive);
        Ok(())
    }

    pub fn close_history(&mut self) {
        self.selected_history = None;
    }

    pub fn selected_entry(&self) -> Option<&HistoryEntry> {
        self.selected_history.as_ref().and_then(|id| self.history.get(id))
    }

    pub fn history_tab(&self) -> HistoryTab {
        self.history_tab
    }

    pub fn set_history_tab(&mut self, tab: HistoryTab) {
        self.history_tab = tab;
    }

    pub fn archive_rounds_view(&self) -> &RoundsView {
        &self.archive_rounds
    }

    /// Toggle a round of the currently viewed archived entry
    pub fn toggle_archive_round(&mut self, index: usize) {
        let count = self
            .selected_entry()
            .map(|e| rounds_of(e.transcript.turns(), self.panel.len()).len())
            .unwrap_or(0);
        self.archive_rounds.toggle(index, count);
    }

    /// Remove an archived entry; absent ids are a no-op
    pub fn delete_history(&mut self, id: &HistoryId) {
        self.history.delete(id);
        if self.selected_history.as_ref() == Some(id) {
            self.selected_history = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::debate_gateway::GatewayError;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use council_domain::{Recommendation, Turn};

    /// Gateway that answers for whichever agent is queried and returns a
    /// full batch on continuation; judge outcome is configurable.
    struct ScriptedGateway {
        judge_ok: bool,
        failing_agent: Option<&'static str>,
    }

    impl ScriptedGateway {
        fn happy() -> Self {
            Self {
                judge_ok: true,
                failing_agent: None,
            }
        }

        fn judge_down() -> Self {
            Self {
                judge_ok: false,
                failing_agent: None,
            }
        }
    }

    #[async_trait]
    impl DebateGateway for ScriptedGateway {
        async fn opening_turn(
            &self,
            agent: &AgentId,
            _dilemma: &Dilemma,
        ) -> Result<Turn, GatewayError> {
            if self.failing_agent == Some(agent.as_str()) {
                return Err(GatewayError::RequestFailed("down".to_string()));
            }
            Ok(Turn::new(agent.clone(), "A", format!("{agent} opening")))
        }

        async fn continuation(&self, _transcript: &Transcript) -> Result<Vec<Turn>, GatewayError> {
            Ok(["Deon", "Conse", "Virtue"]
                .into_iter()
                .map(|a| Turn::new(a, "B", format!("{a} rebuttal")))
                .collect())
        }

        async fn judge(&self, _transcript: &Transcript) -> Result<Verdict, GatewayError> {
            if self.judge_ok {
                Ok(Verdict::new(Recommendation::A, 88, "A is defensible"))
            } else {
                Err(GatewayError::RequestFailed("judge down".to_string()))
            }
        }
    }

    fn dilemma() -> Dilemma {
        Dilemma::new("Test", "A1", "B1", "C").unwrap()
    }

    fn panel() -> Vec<AgentId> {
        vec!["Deon".into(), "Conse".into(), "Virtue".into()]
    }

    fn session(gateway: ScriptedGateway) -> DebateSession<ScriptedGateway> {
        DebateSession::new(Arc::new(gateway), panel())
    }

    #[tokio::test]
    async fn test_opening_round_flow() {
        let mut s = session(ScriptedGateway::happy());
        assert_eq!(s.stage(), Stage::Form);

        s.start_debate(dilemma(), &NoProgress).await.unwrap();
        assert_eq!(s.stage(), Stage::Debate);

        let transcript = s.transcript().unwrap();
        let agents: Vec<&str> = transcript.turns().iter().map(|t| t.agent.as_str()).collect();
        assert_eq!(agents, ["Deon", "Conse", "Virtue"]);
        assert_eq!(s.round_count(), 1);

        let rounds = rounds_of(transcript.turns(), 3);
        assert_eq!(rounds[0].label(), "Opening Arguments");
    }

    #[tokio::test]
    async fn test_continuation_adds_labeled_round_and_updates_view() {
        let mut s = session(ScriptedGateway::happy());
        s.start_debate(dilemma(), &NoProgress).await.unwrap();
        s.continue_debate(&NoProgress).await.unwrap();

        assert_eq!(s.round_count(), 2);
        let transcript = s.transcript().unwrap();
        let rounds = rounds_of(transcript.turns(), 3);
        assert_eq!(rounds[1].label(), "Round 1");
        assert_eq!(rounds[1].turns.len(), 3);

        // Latest round forced open, opening round demoted to toggleable/collapsed
        assert!(s.rounds_view().is_expanded(1, 2));
        assert!(!s.rounds_view().is_expanded(0, 2));
        assert!(s.rounds_view().is_toggleable(0, 2));
    }

    #[tokio::test]
    async fn test_judgment_success() {
        let mut s = session(ScriptedGateway::happy());
        s.start_debate(dilemma(), &NoProgress).await.unwrap();

        s.judge(&NoProgress).await.unwrap();
        assert_eq!(s.stage(), Stage::Verdict);
        assert_eq!(
            s.verdict().unwrap().final_recommendation,
            Recommendation::A
        );
    }

    #[tokio::test]
    async fn test_judgment_failure_rolls_back_to_debate() {
        let mut s = session(ScriptedGateway::judge_down());
        s.start_debate(dilemma(), &NoProgress).await.unwrap();
        let turns_before = s.transcript().unwrap().len();

        let result = s.judge(&NoProgress).await;
        assert!(matches!(result, Err(SessionError::Judgment(_))));
        assert_eq!(s.stage(), Stage::Debate);
        assert!(s.verdict().is_none());
        assert_eq!(s.transcript().unwrap().len(), turns_before);
    }

    #[tokio::test]
    async fn test_stale_judgment_completion_discarded() {
        let mut s = session(ScriptedGateway::happy());
        s.start_debate(dilemma(), &NoProgress).await.unwrap();

        let ticket = s.begin_judging().unwrap();
        assert_eq!(s.stage(), Stage::Judging);

        // The session moves on before the completion lands
        s.reset(1_000, "2026-08-27");
        assert_eq!(s.stage(), Stage::Form);

        let late = Ok(Verdict::new(Recommendation::B, 99, "too late"));
        s.finish_judging(ticket, late).unwrap();
        assert_eq!(s.stage(), Stage::Form);
        assert!(s.verdict().is_none());
    }

    #[tokio::test]
    async fn test_reset_archives_finished_session() {
        let mut s = session(ScriptedGateway::happy());
        s.start_debate(dilemma(), &NoProgress).await.unwrap();
        s.judge(&NoProgress).await.unwrap();

        let id = s.reset(1_000, "2026-08-27").unwrap();
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history().entries()[0].id, id);
        assert_eq!(s.stage(), Stage::Form);
        assert!(s.transcript().is_none());
        assert!(s.verdict().is_none());

        // A second finished session lands at index 0 with a distinct id
        s.start_debate(dilemma(), &NoProgress).await.unwrap();
        s.judge(&NoProgress).await.unwrap();
        let id2 = s.reset(1_000, "2026-08-27").unwrap();
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.history().entries()[0].id, id2);
        assert_ne!(id, id2);
    }

    #[tokio::test]
    async fn test_reset_without_verdict_archives_nothing() {
        let mut s = session(ScriptedGateway::happy());
        s.start_debate(dilemma(), &NoProgress).await.unwrap();

        assert!(s.reset(1_000, "2026-08-27").is_none());
        assert!(s.history().is_empty());
        assert_eq!(s.stage(), Stage::Form);
    }

    #[tokio::test]
    async fn test_guarded_transitions() {
        let mut s = session(ScriptedGateway::happy());

        // No continuation or judgment from the form stage
        assert!(matches!(
            s.continue_debate(&NoProgress).await,
            Err(SessionError::WrongStage(Stage::Form))
        ));
        assert!(matches!(
            s.begin_judging(),
            Err(SessionError::WrongStage(Stage::Form))
        ));

        // No second start once debating
        s.start_debate(dilemma(), &NoProgress).await.unwrap();
        assert!(matches!(
            s.start_debate(dilemma(), &NoProgress).await,
            Err(SessionError::WrongStage(Stage::Debate))
        ));
    }

    #[tokio::test]
    async fn test_history_view_is_read_only_and_independent() {
        let mut s = session(ScriptedGateway::happy());
        s.start_debate(dilemma(), &NoProgress).await.unwrap();
        s.judge(&NoProgress).await.unwrap();
        let id = s.reset(1_000, "2026-08-27").unwrap();

        // Live session proceeds while an entry is being viewed
        s.open_history(&id).unwrap();
        assert_eq!(s.history_tab(), HistoryTab::Debate);
        assert_eq!(s.stage(), Stage::Form);

        let entry = s.selected_entry().unwrap();
        assert_eq!(entry.transcript.len(), 3);

        // Archived rounds all start collapsed and every one is toggleable
        assert!(!s.archive_rounds_view().is_expanded(0, 1));
        assert!(s.archive_rounds_view().is_toggleable(0, 1));
        s.toggle_archive_round(0);
        assert!(s.archive_rounds_view().is_expanded(0, 1));

        s.set_history_tab(HistoryTab::Verdict);
        assert_eq!(s.history_tab(), HistoryTab::Verdict);
    }

    #[tokio::test]
    async fn test_delete_history() {
        let mut s = session(ScriptedGateway::happy());
        s.start_debate(dilemma(), &NoProgress).await.unwrap();
        s.judge(&NoProgress).await.unwrap();
        let id = s.reset(1_000, "2026-08-27").unwrap();

        s.open_history(&id).unwrap();
        s.delete_history(&id);
        assert!(s.history().is_empty());
        assert!(s.selected_entry().is_none());

        // Deleting an absent id is a no-op
        s.delete_history(&id);
        assert!(s.history().is_empty());
    }

    #[tokio::test]
    async fn test_partial_opening_round() {
        let mut s = session(ScriptedGateway {
            judge_ok: true,
            failing_agent: Some("Conse"),
        });
        s.start_debate(dilemma(), &NoProgress).await.unwrap();

        let transcript = s.transcript().unwrap();
        let agents: Vec<&str> = transcript.turns().iter().map(|t| t.agent.as_str()).collect();
        assert_eq!(agents, ["Deon", "Virtue"]);

        let rounds = rounds_of(transcript.turns(), 3);
        assert_eq!(rounds.len(), 1);
        assert!(!rounds[0].is_complete());
    }
}
