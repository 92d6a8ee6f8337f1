//! Port definitions - interfaces implemented by the infrastructure and
//! presentation layers

pub mod agent_studio;
pub mod debate_gateway;
pub mod progress;
