//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for dilemma-council
#[derive(Parser, Debug)]
#[command(name = "dilemma-council")]
#[command(author, version, about = "AI Ethics Panel - agents debate moral dilemmas")]
#[command(long_about = r#"
Dilemma Council runs a panel of AI ethics agents against a moral dilemma.

The session has three stages:
1. Debate: each agent argues for option A or B, one turn per round
2. Judgment: a judge weighs the full transcript and issues a verdict
3. Archive: finished debates are kept for review in the session history

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./council.toml      Project-level config
3. ~/.config/dilemma-council/config.toml   Global config

Example:
  dilemma-council
  dilemma-council --base-url http://10.0.0.5:8000
  dilemma-council -vv --no-config
"#)]
pub struct Cli {
    /// Base URL of the debate service (overrides config)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
