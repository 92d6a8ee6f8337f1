//! Agent identifiers and the default debate panel

use serde::{Deserialize, Serialize};

/// Identifier of a reasoning agent (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase form, as used in per-agent endpoint paths
    pub fn to_lowercase(&self) -> String {
        self.0.to_lowercase()
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        AgentId::new(s)
    }
}

impl From<String> for AgentId {
    fn from(s: String) -> Self {
        AgentId::new(s)
    }
}

/// Static profile of a default panel member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentProfile {
    pub id: AgentId,
    /// Display role, e.g. "Deontologist"
    pub role: String,
    /// Single-character display symbol
    pub symbol: char,
}

impl AgentProfile {
    pub fn new(id: impl Into<AgentId>, role: impl Into<String>, symbol: char) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            symbol,
        }
    }
}

/// The default three-member panel, in speaking order
pub fn default_panel() -> Vec<AgentProfile> {
    vec![
        AgentProfile::new("Deon", "Deontologist", '⚖'),
        AgentProfile::new("Conse", "Consequentialist", '◆'),
        AgentProfile::new("Virtue", "Virtue Ethicist", '✦'),
    ]
}
