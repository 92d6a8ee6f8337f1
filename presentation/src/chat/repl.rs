//! REPL (Read-Eval-Print Loop) for interactive debate sessions

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{SimpleProgress, ThinkingReporter};
use colored::Colorize;
use council_application::ports::agent_studio::AgentStudio;
use council_application::ports::debate_gateway::DebateGateway;
use council_application::ports::progress::DebateProgress;
use council_application::session::{DebateSession, HistoryTab, SessionError, Stage};
use council_application::use_cases::build_agent::{AgentBuilder, BuildAgentError};
use council_domain::{AgentId, BuilderStep, Dilemma, HistoryId};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// Interactive debate REPL
pub struct CouncilRepl<S>
where
    S: DebateGateway + AgentStudio + 'static,
{
    service: Arc<S>,
    session: DebateSession<S>,
    show_progress: bool,
}

impl<S> CouncilRepl<S>
where
    S: DebateGateway + AgentStudio + 'static,
{
    pub fn new(service: Arc<S>, panel: Vec<AgentId>) -> Self {
        let session = DebateSession::new(Arc::clone(&service), panel);
        Self {
            service,
            session,
            show_progress: true,
        }
    }

    /// Set whether to show progress spinners
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    fn progress(&self) -> Box<dyn DebateProgress> {
        if self.show_progress {
            Box::new(ThinkingReporter::new())
        } else {
            Box::new(SimpleProgress)
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("dilemma-council").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim().to_string();

                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(&line);

                    if self.handle_command(&line, &mut rl).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Dilemma Council - Ethics Panel       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Panel: {}",
            self.session
                .panel()
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
        println!("Commands:");
        println!("  /new       - Pose a new dilemma to the panel");
        println!("  /continue  - Run another debate round");
        println!("  /judge     - Ask the judge for a verdict");
        println!("  /reset     - Archive and start over");
        println!("  /agent     - Create a custom agent");
        println!("  /help      - Show all commands");
        println!("  /quit      - Exit");
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Session:");
        println!("  /new            - Pose a new dilemma to the panel");
        println!("  /continue       - Run another debate round");
        println!("  /judge          - Ask the judge for a verdict");
        println!("  /reset          - Archive the finished debate and start over");
        println!("  /show           - Re-render the current transcript or verdict");
        println!("  /toggle <n>     - Expand or collapse round n");
        println!();
        println!("Archive:");
        println!("  /history        - List archived debates");
        println!("  /view <id>      - Open an archived debate");
        println!("  /tab <debate|verdict> - Switch tabs inside an archived view");
        println!("  /back           - Close the archived view");
        println!("  /delete <id>    - Delete an archived debate");
        println!();
        println!("Agents:");
        println!("  /agent          - Create a custom agent (4-step flow)");
        println!();
        println!("  /help, /quit");
        println!();
    }

    /// Handle one input line. Returns true if the REPL should exit.
    async fn handle_command(&mut self, line: &str, rl: &mut DefaultEditor) -> bool {
        let mut parts = line.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or_default();
        let arg = parts.next().unwrap_or("").trim();

        match command {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                return true;
            }
            "/help" | "/h" | "/?" => self.print_help(),
            "/new" => self.cmd_new(rl).await,
            "/continue" => self.cmd_continue().await,
            "/judge" => self.cmd_judge().await,
            "/reset" => self.cmd_reset(),
            "/show" => self.render_session(),
            "/toggle" => self.cmd_toggle(arg),
            "/history" => {
                print!(
                    "{}",
                    ConsoleFormatter::format_history_list(self.session.history().entries())
                );
            }
            "/view" => self.cmd_view(arg),
            "/tab" => self.cmd_tab(arg),
            "/back" => {
                self.session.close_history();
                println!("Closed archived view.");
            }
            "/delete" => {
                self.session.delete_history(&HistoryId::from(arg));
                println!("Deleted (if it existed).");
            }
            "/agent" => self.cmd_agent(rl).await,
            _ => {
                println!("Unknown command: {}", command);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn cmd_new(&mut self, rl: &mut DefaultEditor) {
        if self.session.stage() != Stage::Form {
            println!("A debate is already in progress. Use /reset first.");
            return;
        }

        let Some(title) = prompt(rl, "Title: ") else { return };
        let Some(option_a) = prompt(rl, "Option A: ") else { return };
        let Some(option_b) = prompt(rl, "Option B: ") else { return };
        let Some(constraints) = prompt(rl, "Constraints/Context: ") else { return };

        let dilemma = match Dilemma::new(title, option_a, option_b, constraints) {
            Ok(d) => d,
            Err(e) => {
                println!("{} {}", "Invalid dilemma:".red(), e);
                return;
            }
        };

        println!();
        let progress = self.progress();
        if let Err(e) = self.session.start_debate(dilemma, progress.as_ref()).await {
            self.report_error(e);
            return;
        }
        self.render_session();
    }

    async fn cmd_continue(&mut self) {
        let progress = self.progress();
        if let Err(e) = self.session.continue_debate(progress.as_ref()).await {
            self.report_error(e);
            return;
        }
        self.render_session();
    }

    async fn cmd_judge(&mut self) {
        let progress = self.progress();
        match self.session.judge(progress.as_ref()).await {
            Ok(()) => self.render_session(),
            Err(e) => {
                self.report_error(e);
                println!("The transcript is preserved; you can /judge again or /continue.");
            }
        }
    }

    fn cmd_reset(&mut self) {
        let now = chrono::Utc::now().timestamp_millis();
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();

        match self.session.reset(now, date) {
            Some(id) => println!("Archived as [{}]. Ready for a new dilemma.", id),
            None => println!("Session discarded. Ready for a new dilemma."),
        }
    }

    fn cmd_toggle(&mut self, arg: &str) {
        let Ok(index) = arg.parse::<usize>() else {
            println!("Usage: /toggle <round number>");
            return;
        };

        if self.session.selected_entry().is_some() {
            self.session.toggle_archive_round(index);
            self.render_history_view();
        } else {
            self.session.toggle_round(index);
            self.render_session();
        }
    }

    fn cmd_view(&mut self, arg: &str) {
        if arg.is_empty() {
            println!("Usage: /view <id>  (see /history for ids)");
            return;
        }
        match self.session.open_history(&HistoryId::from(arg)) {
            Ok(()) => self.render_history_view(),
            Err(e) => self.report_error(e),
        }
    }

    fn cmd_tab(&mut self, arg: &str) {
        let tab = match arg {
            "debate" => HistoryTab::Debate,
            "verdict" => HistoryTab::Verdict,
            _ => {
                println!("Usage: /tab <debate|verdict>");
                return;
            }
        };
        self.session.set_history_tab(tab);
        self.render_history_view();
    }

    fn render_session(&self) {
        let panel_size = self.session.panel().len();
        if let Some(transcript) = self.session.transcript() {
            print!(
                "{}",
                ConsoleFormatter::format_transcript(
                    transcript,
                    self.session.rounds_view(),
                    panel_size
                )
            );
        }
        if let Some(verdict) = self.session.verdict() {
            print!("{}", ConsoleFormatter::format_verdict(verdict));
        }
        if self.session.transcript().is_none() {
            println!("No debate in progress. Use /new to pose a dilemma.");
        }
    }

    fn render_history_view(&self) {
        let panel_size = self.session.panel().len();
        let tab = self.session.history_tab();
        let Some(entry) = self.session.selected_entry() else {
            println!("No archived debate is open. Use /view <id>.");
            return;
        };

        println!(
            "{} {} ({})",
            "Viewing:".cyan().bold(),
            entry.title.bold(),
            entry.date
        );
        match tab {
            HistoryTab::Debate => print!(
                "{}",
                ConsoleFormatter::format_history_debate(
                    entry,
                    self.session.archive_rounds_view(),
                    panel_size
                )
            ),
            HistoryTab::Verdict => print!("{}", ConsoleFormatter::format_verdict(&entry.verdict)),
        }
    }

    // ==================== Agent builder flow ====================

    async fn cmd_agent(&mut self, rl: &mut DefaultEditor) {
        let mut builder = AgentBuilder::new(Arc::clone(&self.service));
        println!();
        println!("{}", "Custom Agent Builder (4 steps; /cancel to abort)".bold());

        loop {
            match builder.step() {
                BuilderStep::BasicInfo => {
                    println!("\n{}", "Step 1/4: Basic Info".cyan().bold());
                    let Some(name) = prompt(rl, "Name: ") else { return };
                    if name == "/cancel" {
                        return;
                    }
                    builder.set_name(name);

                    let Some(avatar) = prompt(rl, "Avatar (blank for default): ") else {
                        return;
                    };
                    if !avatar.is_empty() {
                        builder.set_avatar(avatar);
                    }
                }
                BuilderStep::Personality => {
                    println!("\n{}", "Step 2/4: Personality".cyan().bold());
                    println!("Describe the agent's ethical outlook (50-1000 characters).");
                    let Some(description) = prompt(rl, "Description: ") else { return };
                    if description == "/cancel" {
                        return;
                    }
                    builder.set_description(description);
                }
                BuilderStep::Enhancement => {
                    println!("\n{}", "Step 3/4: AI Enhancement".cyan().bold());
                    if let Some(result) = builder.enhancement() {
                        print!("{}", ConsoleFormatter::format_enhancement(result));
                    } else if let Some(warning) = builder.enhancement_warning() {
                        println!("{} {}", "!".yellow(), warning);
                    }
                }
                BuilderStep::Preview => {
                    println!("\n{}", "Step 4/4: Preview".cyan().bold());
                    self.run_preview_step(rl, &mut builder).await;
                    return;
                }
            }

            match builder.next().await {
                Ok(_) => {}
                Err(BuildAgentError::Validation(issues)) => {
                    for issue in issues {
                        println!("{} {}: {}", "x".red(), issue.field, issue.message);
                    }
                }
                Err(e) => {
                    println!("{} {}", "x".red(), e);
                    return;
                }
            }
        }
    }

    async fn run_preview_step(&self, rl: &mut DefaultEditor, builder: &mut AgentBuilder<S>) {
        let form = builder.form();
        println!("  Name:   {} {}", form.avatar, form.name.bold());
        match builder.enhancement() {
            Some(result) => println!("  Prompt: {}", result.enhanced_prompt),
            None => println!("  Prompt: {}", form.description),
        }

        loop {
            let choice = match builder.enhancement() {
                Some(_) => prompt(rl, "Create with [e]nhanced, [o]riginal, or [c]ancel? "),
                None => prompt(rl, "Create with [o]riginal description, or [c]ancel? "),
            };
            let Some(choice) = choice else { return };

            let use_enhanced = match choice.as_str() {
                "e" => true,
                "o" => false,
                "c" | "/cancel" => return,
                _ => continue,
            };

            match builder.create(use_enhanced).await {
                Ok(profile) => {
                    println!(
                        "{} Created agent {} {} (id {})",
                        "v".green(),
                        profile.avatar,
                        profile.name.bold(),
                        profile.id
                    );
                    return;
                }
                Err(e) => {
                    // Stays at the preview step so another attempt can be made
                    println!("{} {}", "x".red(), e);
                }
            }
        }
    }

    fn report_error(&self, error: SessionError) {
        println!("{} {}", "Error:".red().bold(), error);
    }
}

fn prompt(rl: &mut DefaultEditor, label: &str) -> Option<String> {
    match rl.readline(label) {
        Ok(line) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
