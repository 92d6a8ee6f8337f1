//! Progress notification port
//!
//! Defines the interface for reporting debate progress while a turn
//! sequence or judgment is in flight.

use council_domain::{AgentId, Transcript, Turn};

/// Callback for progress updates during debate execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console spinner, web UI, etc.)
pub trait DebateProgress: Send + Sync {
    /// An agent's request is about to be issued
    fn on_agent_thinking(&self, agent: &AgentId);

    /// An agent's turn was recorded; `transcript` is the snapshot including it
    fn on_turn_recorded(&self, turn: &Turn, transcript: &Transcript);

    /// An agent's request failed; its turn is omitted and the sequence continues
    fn on_agent_failed(&self, agent: &AgentId);

    /// Every agent in the sequence has been attempted
    fn on_panel_complete(&self);

    /// The judge's request is about to be issued
    fn on_judge_thinking(&self) {}

    /// The judge's request has settled, successfully or not
    fn on_judge_complete(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DebateProgress for NoProgress {
    fn on_agent_thinking(&self, _agent: &AgentId) {}
    fn on_turn_recorded(&self, _turn: &Turn, _transcript: &Transcript) {}
    fn on_agent_failed(&self, _agent: &AgentId) {}
    fn on_panel_complete(&self) {}
}
