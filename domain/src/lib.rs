//! Domain layer for dilemma-council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Debate
//!
//! A debate pits a fixed, ordered panel of reasoning agents against an
//! ethical dilemma with two options. Agents speak strictly one at a time;
//! the ordered turn sequence is the transcript, and rounds are derived
//! windows over it (one turn per panel member).
//!
//! ## Verdict & History
//!
//! A judge produces a single immutable verdict over the full transcript.
//! Finished sessions (transcript + verdict) are archived as history
//! entries when the session resets.

pub mod agent;
pub mod core;
pub mod debate;
pub mod history;

// Re-export commonly used types
pub use agent::{
    builder::{BuilderStep, DraftForm, FormIssue},
    custom::{AgentDraft, CustomAgentProfile, EnhancementResult},
    panel::{default_panel, AgentId, AgentProfile},
};
pub use crate::core::error::DomainError;
pub use debate::{
    dilemma::Dilemma,
    rounds::{rounds_of, Round, RoundsView, ViewMode},
    transcript::{Transcript, Turn},
    verdict::{Recommendation, Verdict},
};
pub use history::{DebateHistory, HistoryEntry, HistoryId};
