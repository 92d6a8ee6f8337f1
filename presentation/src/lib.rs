//! Presentation layer for dilemma-council
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive debate REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::CouncilRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{SimpleProgress, ThinkingReporter};
