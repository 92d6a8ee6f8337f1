//! Run Round use case
//!
//! Drives one debate round: the opening round issues one request per agent
//! and records the single turn each returns; continuation rounds issue one
//! combined request per agent and merge exactly the matching turn out of
//! the returned batch.
//!
//! Requests are strictly sequential - request *i+1* is not sent until
//! request *i* has settled. A single agent's failure never aborts the
//! remaining sequence; its turn is simply omitted from the round.

use crate::ports::debate_gateway::DebateGateway;
use crate::ports::progress::DebateProgress;
use council_domain::{AgentId, Dilemma, Transcript};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while running a round
#[derive(Error, Debug)]
pub enum RunRoundError {
    #[error("No agents on the panel")]
    EmptyPanel,
}

/// Use case for running opening and continuation rounds
pub struct RunRoundUseCase<G: DebateGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: DebateGateway + 'static> RunRoundUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Run the opening round for a dilemma
    ///
    /// Each agent is queried in panel order; each successful turn is
    /// appended and published through `progress` so observers see turns
    /// arrive one at a time.
    pub async fn opening(
        &self,
        dilemma: &Dilemma,
        panel: &[AgentId],
        progress: &dyn DebateProgress,
    ) -> Result<Transcript, RunRoundError> {
        if panel.is_empty() {
            return Err(RunRoundError::EmptyPanel);
        }

        info!("Opening round: {} agents", panel.len());
        let mut transcript = Transcript::new(dilemma.clone());

        for agent in panel {
            progress.on_agent_thinking(agent);

            match self.gateway.opening_turn(agent, dilemma).await {
                Ok(turn) => {
                    info!("Agent {} spoke", agent);
                    transcript.record(turn);
                    if let Some(last) = transcript.last_turn() {
                        progress.on_turn_recorded(last, &transcript);
                    }
                }
                Err(e) => {
                    warn!("Agent {} failed: {}", agent, e);
                    progress.on_agent_failed(agent);
                }
            }
        }

        progress.on_panel_complete();
        Ok(transcript)
    }

    /// Run one continuation round, appending new turns to `transcript`
    ///
    /// Every request carries the entire transcript including the turns
    /// already appended in this round, so each agent sees what the agents
    /// before it said in the same round. The service replies with a batch
    /// that may hold turns for several agents; only the turn whose agent
    /// matches the one just queried is appended - extras are ignored.
    /// Returns the number of turns appended.
    pub async fn continuation(
        &self,
        transcript: &mut Transcript,
        panel: &[AgentId],
        progress: &dyn DebateProgress,
    ) -> Result<usize, RunRoundError> {
        if panel.is_empty() {
            return Err(RunRoundError::EmptyPanel);
        }

        info!("Continuation round: {} agents", panel.len());
        let mut appended = 0;

        for agent in panel {
            progress.on_agent_thinking(agent);

            match self.gateway.continuation(transcript).await {
                Ok(batch) => {
                    match batch.into_iter().find(|t| &t.agent == agent) {
                        Some(turn) => {
                            info!("Agent {} responded in continuation", agent);
                            transcript.record(turn);
                            appended += 1;
                            if let Some(last) = transcript.last_turn() {
                                progress.on_turn_recorded(last, transcript);
                            }
                        }
                        None => {
                            warn!("Continuation batch had no turn for {}", agent);
                            progress.on_agent_failed(agent);
                        }
                    }
                }
                Err(e) => {
                    warn!("Agent {} continuation failed: {}", agent, e);
                    progress.on_agent_failed(agent);
                }
            }
        }

        progress.on_panel_complete();
        Ok(appended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::debate_gateway::GatewayError;
    use async_trait::async_trait;
    use council_domain::{Turn, Verdict};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    fn dilemma() -> Dilemma {
        Dilemma::new("Test", "A1", "B1", "C").unwrap()
    }

    fn panel() -> Vec<AgentId> {
        vec!["Deon".into(), "Conse".into(), "Virtue".into()]
    }

    /// Gateway scripted with per-call outcomes; records transcript sizes
    /// seen by continuation calls.
    struct MockGateway {
        opening: Mutex<VecDeque<Result<Turn, GatewayError>>>,
        continuation: Mutex<VecDeque<Result<Vec<Turn>, GatewayError>>>,
        seen_lens: Mutex<Vec<usize>>,
    }

    impl MockGateway {
        fn with_openings(outcomes: Vec<Result<Turn, GatewayError>>) -> Self {
            Self {
                opening: Mutex::new(VecDeque::from(outcomes)),
                continuation: Mutex::new(VecDeque::new()),
                seen_lens: Mutex::new(Vec::new()),
            }
        }

        fn with_continuations(outcomes: Vec<Result<Vec<Turn>, GatewayError>>) -> Self {
            Self {
                opening: Mutex::new(VecDeque::new()),
                continuation: Mutex::new(VecDeque::from(outcomes)),
                seen_lens: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl DebateGateway for MockGateway {
        async fn opening_turn(
            &self,
            _agent: &AgentId,
            _dilemma: &Dilemma,
        ) -> Result<Turn, GatewayError> {
            self.opening
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("script exhausted".to_string())))
        }

        async fn continuation(&self, transcript: &Transcript) -> Result<Vec<Turn>, GatewayError> {
            self.seen_lens.lock().unwrap().push(transcript.len());
            self.continuation
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("script exhausted".to_string())))
        }

        async fn judge(&self, _transcript: &Transcript) -> Result<Verdict, GatewayError> {
            Err(GatewayError::Other("not under test".to_string()))
        }
    }

    fn turn(agent: &str) -> Turn {
        Turn::new(agent, "A", format!("{agent} argues"))
    }

    #[tokio::test]
    async fn test_opening_yields_turns_in_panel_order() {
        let gateway = Arc::new(MockGateway::with_openings(vec![
            Ok(turn("Deon")),
            Ok(turn("Conse")),
            Ok(turn("Virtue")),
        ]));
        let use_case = RunRoundUseCase::new(gateway);

        let transcript = use_case
            .opening(&dilemma(), &panel(), &crate::ports::progress::NoProgress)
            .await
            .unwrap();

        let agents: Vec<&str> = transcript.turns().iter().map(|t| t.agent.as_str()).collect();
        assert_eq!(agents, ["Deon", "Conse", "Virtue"]);
    }

    #[tokio::test]
    async fn test_opening_continues_past_failure() {
        let gateway = Arc::new(MockGateway::with_openings(vec![
            Ok(turn("Deon")),
            Err(GatewayError::RequestFailed("boom".to_string())),
            Ok(turn("Virtue")),
        ]));
        let use_case = RunRoundUseCase::new(gateway);

        let transcript = use_case
            .opening(&dilemma(), &panel(), &crate::ports::progress::NoProgress)
            .await
            .unwrap();

        let agents: Vec<&str> = transcript.turns().iter().map(|t| t.agent.as_str()).collect();
        assert_eq!(agents, ["Deon", "Virtue"]);
    }

    #[tokio::test]
    async fn test_opening_empty_panel() {
        let gateway = Arc::new(MockGateway::with_openings(vec![]));
        let use_case = RunRoundUseCase::new(gateway);

        let result = use_case
            .opening(&dilemma(), &[], &crate::ports::progress::NoProgress)
            .await;
        assert!(matches!(result, Err(RunRoundError::EmptyPanel)));
    }

    #[tokio::test]
    async fn test_continuation_filters_batch_by_agent() {
        // Every batch carries all three agents; only the queried one lands
        let full_batch = || Ok(vec![turn("Deon"), turn("Conse"), turn("Virtue")]);
        let gateway = Arc::new(MockGateway::with_continuations(vec![
            full_batch(),
            full_batch(),
            full_batch(),
        ]));
        let use_case = RunRoundUseCase::new(gateway);

        let mut transcript = Transcript::new(dilemma());
        for agent in ["Deon", "Conse", "Virtue"] {
            transcript.record(turn(agent));
        }

        let appended = use_case
            .continuation(&mut transcript, &panel(), &crate::ports::progress::NoProgress)
            .await
            .unwrap();

        assert_eq!(appended, 3);
        assert_eq!(transcript.len(), 6);
        let new_round: Vec<&str> = transcript.turns()[3..]
            .iter()
            .map(|t| t.agent.as_str())
            .collect();
        assert_eq!(new_round, ["Deon", "Conse", "Virtue"]);
    }

    #[tokio::test]
    async fn test_continuation_requests_carry_new_round_turns() {
        let full_batch = || Ok(vec![turn("Deon"), turn("Conse"), turn("Virtue")]);
        let gateway = Arc::new(MockGateway::with_continuations(vec![
            full_batch(),
            full_batch(),
            full_batch(),
        ]));
        let use_case = RunRoundUseCase::new(Arc::clone(&gateway));

        let mut transcript = Transcript::new(dilemma());
        for agent in ["Deon", "Conse", "Virtue"] {
            transcript.record(turn(agent));
        }

        use_case
            .continuation(&mut transcript, &panel(), &crate::ports::progress::NoProgress)
            .await
            .unwrap();

        // Each later agent saw the earlier agents' new-round turns
        assert_eq!(*gateway.seen_lens.lock().unwrap(), vec![3, 4, 5]);
    }

    #[tokio::test]
    async fn test_continuation_skips_agent_missing_from_batch() {
        let gateway = Arc::new(MockGateway::with_continuations(vec![
            Ok(vec![turn("Deon")]),
            // Batch with no turn for Conse
            Ok(vec![turn("Deon"), turn("Virtue")]),
            Ok(vec![turn("Virtue")]),
        ]));
        let use_case = RunRoundUseCase::new(gateway);

        let mut transcript = Transcript::new(dilemma());
        for agent in ["Deon", "Conse", "Virtue"] {
            transcript.record(turn(agent));
        }

        let appended = use_case
            .continuation(&mut transcript, &panel(), &crate::ports::progress::NoProgress)
            .await
            .unwrap();

        assert_eq!(appended, 2);
        let new_round: Vec<&str> = transcript.turns()[3..]
            .iter()
            .map(|t| t.agent.as_str())
            .collect();
        assert_eq!(new_round, ["Deon", "Virtue"]);
    }

    #[tokio::test]
    async fn test_continuation_failure_leaves_partial_round() {
        let gateway = Arc::new(MockGateway::with_continuations(vec![
            Ok(vec![turn("Deon")]),
            Err(GatewayError::ConnectionError("down".to_string())),
            Ok(vec![turn("Virtue")]),
        ]));
        let use_case = RunRoundUseCase::new(gateway);

        let mut transcript = Transcript::new(dilemma());
        for agent in ["Deon", "Conse", "Virtue"] {
            transcript.record(turn(agent));
        }

        let appended = use_case
            .continuation(&mut transcript, &panel(), &crate::ports::progress::NoProgress)
            .await
            .unwrap();

        assert_eq!(appended, 2);
        assert_eq!(transcript.len(), 5);
    }
}
