//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use crate::http::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Debate service connection settings
    pub service: FileServiceConfig,
    /// Panel composition
    pub panel: FilePanelConfig,
}

/// `[service]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// Base URL of the debate service
    pub base_url: String,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// `[panel]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePanelConfig {
    /// Agent names queried in order each round
    pub agents: Vec<String>,
}

impl Default for FilePanelConfig {
    fn default() -> Self {
        Self {
            agents: vec![
                "Deon".to_string(),
                "Conse".to_string(),
                "Virtue".to_string(),
            ],
        }
    }
}
