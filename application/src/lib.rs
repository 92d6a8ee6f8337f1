//! Application layer for dilemma-council
//!
//! This crate contains use cases, port definitions, and the debate session
//! state machine. It depends only on the domain layer.

pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    agent_studio::{AgentStudio, StudioError},
    debate_gateway::{DebateGateway, GatewayError},
    progress::{DebateProgress, NoProgress},
};
pub use session::{DebateSession, HistoryTab, OpTicket, SessionError, Stage};
pub use use_cases::build_agent::{AgentBuilder, BuildAgentError};
pub use use_cases::run_judgment::{RunJudgmentError, RunJudgmentUseCase};
pub use use_cases::run_round::{RunRoundError, RunRoundUseCase};
