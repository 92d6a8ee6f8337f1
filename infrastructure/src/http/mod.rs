//! HTTP adapters for the debate service

pub mod gateway;
pub mod protocol;

pub use gateway::{HttpCouncilService, DEFAULT_BASE_URL};
