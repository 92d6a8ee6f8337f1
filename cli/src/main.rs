//! CLI entrypoint for Dilemma Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use council_domain::AgentId;
use council_infrastructure::{ConfigLoader, HttpCouncilService};
use council_presentation::{Cli, CouncilRepl};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Dilemma Council");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    let base_url = cli.base_url.unwrap_or(config.service.base_url);
    let panel: Vec<AgentId> = config
        .panel
        .agents
        .iter()
        .map(|name| AgentId::new(name.as_str()))
        .collect();

    // === Dependency Injection ===
    // One HTTP service covers both the debate and agent-studio ports
    let service = Arc::new(HttpCouncilService::new(base_url));
    info!("Debate service at {}", service.base_url());

    let mut repl = CouncilRepl::new(service, panel).with_progress(!cli.quiet);
    repl.run().await?;

    Ok(())
}
