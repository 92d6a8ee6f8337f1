//! Debate gateway port
//!
//! Defines the interface for communicating with the agent-reasoning and
//! judging service. Implementations (adapters) live in the infrastructure
//! layer.

use async_trait::async_trait;
use council_domain::{AgentId, Dilemma, Transcript, Turn, Verdict};
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway to the debate collaborator service
///
/// Three calls, matching the service's contract:
/// - an opening turn is one request per agent returning a single turn;
/// - a continuation carries the whole transcript (including the new round's
///   turns appended so far) and returns a *batch* of turns that the caller
///   filters by agent;
/// - a judgment carries the full transcript and returns the verdict.
#[async_trait]
pub trait DebateGateway: Send + Sync {
    /// Ask one agent for its opening-round turn on a dilemma
    async fn opening_turn(&self, agent: &AgentId, dilemma: &Dilemma)
        -> Result<Turn, GatewayError>;

    /// Ask for a continuation over the transcript so far
    ///
    /// The response batch may contain turns for several agents; callers
    /// must select the one matching the agent they queried for.
    async fn continuation(&self, transcript: &Transcript) -> Result<Vec<Turn>, GatewayError>;

    /// Ask the judge for a verdict over the full transcript
    async fn judge(&self, transcript: &Transcript) -> Result<Verdict, GatewayError>;
}
