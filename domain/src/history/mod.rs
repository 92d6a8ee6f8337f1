//! Session archive - immutable snapshots of finished debates
//!
//! A [`HistoryEntry`] is created only when a session resets with both a
//! transcript and a verdict present. The list is kept most-recent-first
//! and is never re-sorted by any other key.

use crate::debate::transcript::Transcript;
use crate::debate::verdict::{Recommendation, Verdict};
use serde::{Deserialize, Serialize};

/// Unique, time-ordered identifier of an archived session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryId(String);

impl HistoryId {
    /// Build an id from a millisecond timestamp and a per-process sequence
    /// number. The sequence disambiguates resets within the same clock tick.
    pub fn new(timestamp_millis: i64, seq: u64) -> Self {
        Self(format!("{timestamp_millis}-{seq}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HistoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for HistoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An archived, immutable snapshot of a finished session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: HistoryId,
    pub title: String,
    /// Formatted archive date
    pub date: String,
    pub transcript: Transcript,
    pub verdict: Verdict,
}

impl HistoryEntry {
    pub fn new(
        id: HistoryId,
        date: impl Into<String>,
        transcript: Transcript,
        verdict: Verdict,
    ) -> Self {
        let title = transcript.dilemma().title().to_string();
        Self {
            id,
            title,
            date: date.into(),
            transcript,
            verdict,
        }
    }

    pub fn recommendation(&self) -> Recommendation {
        self.verdict.final_recommendation
    }

    pub fn confidence(&self) -> u8 {
        self.verdict.confidence
    }
}

/// In-memory archive of finished sessions, most recent first
#[derive(Debug, Clone, Default)]
pub struct DebateHistory {
    entries: Vec<HistoryEntry>,
}

impl DebateHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Archive an entry at the front of the list
    pub fn archive(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
    }

    /// All entries, most recent first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Non-mutating lookup by id
    pub fn get(&self, id: &HistoryId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Remove the entry with this id. Idempotent: an absent id is a no-op.
    pub fn delete(&mut self, id: &HistoryId) {
        self.entries.retain(|e| &e.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::dilemma::Dilemma;

    fn entry(seq: u64, title: &str) -> HistoryEntry {
        let dilemma = Dilemma::new(title, "A1", "B1", "C").unwrap();
        HistoryEntry::new(
            HistoryId::new(1_700_000_000_000, seq),
            "2026-08-27",
            Transcript::new(dilemma),
            Verdict::new(Recommendation::A, 80, "reasoned"),
        )
    }

    #[test]
    fn test_most_recent_first() {
        let mut history = DebateHistory::new();
        history.archive(entry(0, "first"));
        history.archive(entry(1, "second"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].title, "second");
        assert_eq!(history.entries()[1].title, "first");
    }

    #[test]
    fn test_delete_present_id() {
        let mut history = DebateHistory::new();
        let e = entry(0, "only");
        let id = e.id.clone();
        history.archive(e);
        history.archive(entry(1, "keep"));

        history.delete(&id);
        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].title, "keep");
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let mut history = DebateHistory::new();
        history.archive(entry(0, "only"));

        history.delete(&HistoryId::new(0, 999));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_ids_unique_within_tick() {
        let a = HistoryId::new(42, 0);
        let b = HistoryId::new(42, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_entry_exposes_verdict_summary() {
        let e = entry(0, "t");
        assert_eq!(e.recommendation(), Recommendation::A);
        assert_eq!(e.confidence(), 80);
    }
}
