//! Console output formatter for debate sessions

use colored::Colorize;
use council_domain::{
    default_panel, rounds_of, AgentId, EnhancementResult, HistoryEntry, RoundsView, Transcript,
    Turn, Verdict,
};

/// Formats transcripts, verdicts, and history for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the live transcript, honoring the round view state
    ///
    /// Every round gets a labeled header; collapsed rounds render as a
    /// one-line summary instead of their turns.
    pub fn format_transcript(
        transcript: &Transcript,
        view: &RoundsView,
        panel_size: usize,
    ) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Dilemma:".cyan().bold(),
            transcript.dilemma().title()
        ));
        output.push_str(&format!(
            "  {} {}\n",
            "A:".bold(),
            transcript.dilemma().option_a()
        ));
        output.push_str(&format!(
            "  {} {}\n\n",
            "B:".bold(),
            transcript.dilemma().option_b()
        ));

        let rounds = rounds_of(transcript.turns(), panel_size);
        let round_count = rounds.len();

        for round in &rounds {
            if view.is_expanded(round.index, round_count) {
                output.push_str(&format!(
                    "{}\n",
                    format!("── {} ──", round.label()).yellow().bold()
                ));
                for turn in round.turns {
                    output.push_str(&Self::format_turn(turn));
                }
                output.push('\n');
            } else {
                output.push_str(&format!(
                    "{} ({} turns, collapsed)\n\n",
                    format!("── {} ──", round.label()).dimmed(),
                    round.turns.len()
                ));
            }
        }

        output
    }

    /// Format a single turn
    pub fn format_turn(turn: &Turn) -> String {
        format!(
            "\n{} {} {}\n{}\n",
            Self::agent_symbol(&turn.agent),
            turn.agent.to_string().bold(),
            format!("(option {})", turn.stance).dimmed(),
            turn.argument
        )
    }

    /// Format the judge's verdict
    pub fn format_verdict(verdict: &Verdict) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== The Verdict ===".cyan().bold()));
        output.push_str(&format!(
            "{} Option {} ({}% confidence)\n\n",
            "Recommendation:".bold(),
            verdict.final_recommendation.to_string().green().bold(),
            verdict.confidence
        ));

        if !verdict.rationale.is_empty() {
            output.push_str(&format!("{}\n{}\n", "Rationale:".bold(), verdict.rationale));
        }

        if !verdict.key_considerations.is_empty() {
            output.push_str(&format!("\n{}\n", "Key Considerations:".bold()));
            for consideration in &verdict.key_considerations {
                output.push_str(&format!("  * {}\n", consideration));
            }
        }

        output
    }

    /// Format the archive list, most recent first
    pub fn format_history_list(entries: &[HistoryEntry]) -> String {
        if entries.is_empty() {
            return format!("{}\n", "No archived debates yet.".dimmed());
        }

        let mut output = String::new();
        output.push_str(&format!("{}\n", "Archived debates:".cyan().bold()));
        for entry in entries {
            output.push_str(&format!(
                "  [{}] {} {} - Option {} ({}%)\n",
                entry.id,
                entry.date.dimmed(),
                entry.title.bold(),
                entry.recommendation(),
                entry.confidence()
            ));
        }
        output
    }

    /// Format an archived entry's debate tab
    pub fn format_history_debate(
        entry: &HistoryEntry,
        view: &RoundsView,
        panel_size: usize,
    ) -> String {
        Self::format_transcript(&entry.transcript, view, panel_size)
    }

    /// Format an enhancement result for the builder's review step
    pub fn format_enhancement(result: &EnhancementResult) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n{}\n", "Enhanced prompt:".bold(), result.enhanced_prompt));

        if let Some(overall) = result.overall_score() {
            output.push_str(&format!(
                "\n{} {:.1}/10\n",
                "Overall score:".bold(),
                overall
            ));
            for (dimension, score) in &result.analysis_scores {
                output.push_str(&format!("  {}: {:.1}\n", dimension, score));
            }
        }

        if !result.improvements_made.is_empty() {
            output.push_str(&format!("\n{}\n", "Improvements:".bold()));
            for improvement in &result.improvements_made {
                output.push_str(&format!("  * {}\n", improvement));
            }
        }

        if !result.suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".bold()));
            for suggestion in &result.suggestions {
                output.push_str(&format!("  * {}\n", suggestion));
            }
        }

        output
    }

    fn agent_symbol(agent: &AgentId) -> char {
        default_panel()
            .iter()
            .find(|p| &p.id == agent)
            .map(|p| p.symbol)
            .unwrap_or('*')
    }
}
