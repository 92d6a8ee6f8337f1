//! Application use cases

pub mod build_agent;
pub mod run_judgment;
pub mod run_round;
