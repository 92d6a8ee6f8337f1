//! Custom agent value objects
//!
//! Profiles created through the agent builder. Read-only to the
//! debate orchestration core.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A user-created agent profile, as returned by the creation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomAgentProfile {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub description: String,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub rating_count: u32,
}

/// The payload sent to the creation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDraft {
    pub name: String,
    pub avatar: String,
    /// Either the enhanced prompt or the user's raw description
    pub description: String,
}

/// Result of the description-enhancement service
///
/// Ephemeral, scoped to one builder run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancementResult {
    pub enhanced_prompt: String,
    /// Per-criterion quality scores (0-10)
    pub analysis_scores: BTreeMap<String, f64>,
    pub improvements_made: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl EnhancementResult {
    /// Mean of the analysis scores, if any were returned
    pub fn overall_score(&self) -> Option<f64> {
        if self.analysis_scores.is_empty() {
            return None;
        }
        let sum: f64 = self.analysis_scores.values().sum();
        Some(sum / self.analysis_scores.len() as f64)
    }
}
