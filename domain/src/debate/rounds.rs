//! Round derivation and presentation state
//!
//! Rounds are not stored: they are fixed-size windows over a transcript's
//! turn sequence, one turn per panel member. Partitioning is a pure
//! function of the turns, so re-deriving the same sequence always yields
//! the same rounds.
//!
//! [`RoundsView`] tracks which rounds are expanded. In live mode the
//! latest round is always expanded and not individually toggleable; in
//! archive mode every round is toggleable and starts collapsed.

use crate::debate::transcript::Turn;

/// A contiguous window of turns, one per panel member (derived view)
#[derive(Debug, Clone, PartialEq)]
pub struct Round<'a> {
    /// Zero-based round index
    pub index: usize,
    /// The turns in this round, in issue order
    pub turns: &'a [Turn],
    /// Panel size this round was derived against
    panel_size: usize,
}

impl<'a> Round<'a> {
    /// Display label: the first window is the opening, later ones are numbered
    pub fn label(&self) -> String {
        if self.index == 0 {
            "Opening Arguments".to_string()
        } else {
            format!("Round {}", self.index)
        }
    }

    /// A round is complete iff it holds one turn per panel member
    pub fn is_complete(&self) -> bool {
        self.turns.len() == self.panel_size
    }
}

/// Partition a turn sequence into rounds of `panel_size` turns each
///
/// Only the final round may be shorter than the panel (a partial round
/// left by a failed request mid-round).
pub fn rounds_of(turns: &[Turn], panel_size: usize) -> Vec<Round<'_>> {
    if panel_size == 0 {
        return Vec::new();
    }
    turns
        .chunks(panel_size)
        .enumerate()
        .map(|(index, window)| Round {
            index,
            turns: window,
            panel_size,
        })
        .collect()
}

/// Presentation mode for a transcript's rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Active session: the latest round is pinned open
    Live,
    /// Archived session: read-only, every round toggleable, all collapsed
    Archive,
}

/// Expand/collapse state for the derived rounds
///
/// Expansion is computed, not stored per round: the latest round in live
/// mode is always open regardless of toggles, earlier rounds follow their
/// last explicit toggle and default to collapsed. When a new turn pushes
/// the latest index forward, the previously-latest round falls back to its
/// toggle state automatically.
#[derive(Debug, Clone)]
pub struct RoundsView {
    mode: ViewMode,
    /// Explicitly toggled states, keyed by round index
    toggled: std::collections::BTreeMap<usize, bool>,
}

impl RoundsView {
    pub fn new(mode: ViewMode) -> Self {
        Self {
            mode,
            toggled: std::collections::BTreeMap::new(),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Whether the round at `index` renders expanded, given the current
    /// number of derived rounds
    pub fn is_expanded(&self, index: usize, round_count: usize) -> bool {
        if self.mode == ViewMode::Live && round_count > 0 && index == round_count - 1 {
            return true;
        }
        self.toggled.get(&index).copied().unwrap_or(false)
    }

    /// Whether the round at `index` can be toggled by the user
    pub fn is_toggleable(&self, index: usize, round_count: usize) -> bool {
        match self.mode {
            ViewMode::Live => round_count == 0 || index != round_count - 1,
            ViewMode::Archive => true,
        }
    }

    /// Flip a round's expansion. Toggling the pinned latest round in live
    /// mode is a no-op.
    pub fn toggle(&mut self, index: usize, round_count: usize) {
        if !self.is_toggleable(index, round_count) {
            return;
        }
        let current = self.is_expanded(index, round_count);
        self.toggled.insert(index, !current);
    }
}
