//! Verdict value objects - the judge's final ruling

use serde::{Deserialize, Serialize};

/// Which option the judge recommends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    A,
    B,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::A => write!(f, "A"),
            Recommendation::B => write!(f, "B"),
        }
    }
}

/// The judge's final recommendation over a full transcript
///
/// Produced once per session; immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// The recommended option
    pub final_recommendation: Recommendation,
    /// Confidence in the recommendation (0-100)
    pub confidence: u8,
    /// The judge's reasoning
    pub rationale: String,
    /// Considerations the judge weighed
    #[serde(default)]
    pub key_considerations: Vec<String>,
}

impl Verdict {
    pub fn new(
        final_recommendation: Recommendation,
        confidence: u8,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            final_recommendation,
            confidence: confidence.min(100),
            rationale: rationale.into(),
            key_considerations: Vec::new(),
        }
    }

    pub fn with_key_considerations(mut self, considerations: Vec<String>) -> Self {
        self.key_considerations = considerations;
        self
    }
}
