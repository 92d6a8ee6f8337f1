//! Infrastructure layer for dilemma-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FilePanelConfig, FileServiceConfig};
pub use http::{HttpCouncilService, DEFAULT_BASE_URL};
