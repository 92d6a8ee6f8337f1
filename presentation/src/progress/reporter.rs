//! Progress reporting for debate execution

use colored::Colorize;
use council_application::ports::progress::DebateProgress;
use council_domain::{AgentId, Transcript, Turn};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports debate progress with a per-agent spinner
pub struct ThinkingReporter {
    current: Mutex<Option<ProgressBar>>,
}

impl ThinkingReporter {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn finish_current(&self, message: String) {
        if let Ok(mut guard) = self.current.lock() {
            if let Some(pb) = guard.take() {
                pb.finish_with_message(message);
            }
        }
    }

    fn clear_current(&self) {
        if let Ok(mut guard) = self.current.lock() {
            if let Some(pb) = guard.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl Default for ThinkingReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DebateProgress for ThinkingReporter {
    fn on_agent_thinking(&self, agent: &AgentId) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("{} is thinking...", agent));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.current.lock() {
            *guard = Some(pb);
        }
    }

    fn on_turn_recorded(&self, turn: &Turn, _transcript: &Transcript) {
        self.finish_current(format!(
            "{} {} argues for option {}",
            "v".green(),
            turn.agent.to_string().bold(),
            turn.stance
        ));
    }

    fn on_agent_failed(&self, agent: &AgentId) {
        self.finish_current(format!(
            "{} {} did not respond (skipped)",
            "x".red(),
            agent.to_string().bold()
        ));
    }

    fn on_panel_complete(&self) {
        self.clear_current();
    }

    fn on_judge_thinking(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("The judge is deliberating...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.current.lock() {
            *guard = Some(pb);
        }
    }

    fn on_judge_complete(&self) {
        self.clear_current();
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl DebateProgress for SimpleProgress {
    fn on_agent_thinking(&self, agent: &AgentId) {
        println!("{} {} is thinking...", "->".cyan(), agent);
    }

    fn on_turn_recorded(&self, turn: &Turn, _transcript: &Transcript) {
        println!("  {} {} (option {})", "v".green(), turn.agent, turn.stance);
    }

    fn on_agent_failed(&self, agent: &AgentId) {
        println!("  {} {} (failed)", "x".red(), agent);
    }

    fn on_panel_complete(&self) {
        println!();
    }

    fn on_judge_thinking(&self) {
        println!("{} The judge is deliberating...", "->".cyan());
    }

    fn on_judge_complete(&self) {
        println!();
    }
}
