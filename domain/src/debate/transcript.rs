//! Transcript entities - the ordered record of a debate
//!
//! A [`Turn`] is one agent's contribution; a [`Transcript`] is the dilemma
//! plus every turn in the order it was issued. Insertion order is the only
//! encoding of round and within-round position, so turns must be appended
//! strictly in agent-issue order.

use crate::agent::panel::AgentId;
use crate::debate::dilemma::Dilemma;
use serde::{Deserialize, Serialize};

/// One agent's contribution to a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The agent who spoke
    pub agent: AgentId,
    /// The agent's declared position (e.g. which option it favors)
    pub stance: String,
    /// The argument text
    pub argument: String,
}

impl Turn {
    pub fn new(
        agent: impl Into<AgentId>,
        stance: impl Into<String>,
        argument: impl Into<String>,
    ) -> Self {
        Self {
            agent: agent.into(),
            stance: stance.into(),
            argument: argument.into(),
        }
    }
}

/// The full ordered record of a debate session (Entity)
///
/// Owned exclusively by the active session; archived snapshots are clones
/// and must never be mutated by further live-session activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    dilemma: Dilemma,
    turns: Vec<Turn>,
}

impl Transcript {
    /// Start an empty transcript for a dilemma
    pub fn new(dilemma: Dilemma) -> Self {
        Self {
            dilemma,
            turns: Vec::new(),
        }
    }

    pub fn dilemma(&self) -> &Dilemma {
        &self.dilemma
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Append a turn at the end of the record
    pub fn record(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// The most recently recorded turn, if any
    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }
}
