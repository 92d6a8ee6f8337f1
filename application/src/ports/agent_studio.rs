//! Agent studio port
//!
//! Interface to the description-enhancement and agent-creation services
//! used by the agent builder.

use async_trait::async_trait;
use council_domain::{AgentDraft, CustomAgentProfile, EnhancementResult};
use thiserror::Error;

/// Errors that can occur during studio operations
#[derive(Error, Debug)]
pub enum StudioError {
    #[error("Enhancement failed: {0}")]
    EnhancementFailed(String),

    #[error("Creation failed: {0}")]
    CreationFailed(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Gateway to the agent enhancement and creation services
#[async_trait]
pub trait AgentStudio: Send + Sync {
    /// Enhance a raw personality description into a debate-ready prompt
    async fn enhance(&self, description: &str) -> Result<EnhancementResult, StudioError>;

    /// Create a custom agent from a finished draft
    async fn create_agent(&self, draft: &AgentDraft) -> Result<CustomAgentProfile, StudioError>;
}
