//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FilePanelConfig, FileServiceConfig};
pub use loader::ConfigLoader;
