//! Dilemma value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// An ethical dilemma with two competing options (Value Object)
///
/// Immutable once a debate starts. Every field must be non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dilemma {
    title: String,
    option_a: String,
    option_b: String,
    constraints: String,
}

impl Dilemma {
    /// Create a new dilemma, validating that no field is blank
    pub fn new(
        title: impl Into<String>,
        option_a: impl Into<String>,
        option_b: impl Into<String>,
        constraints: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let dilemma = Self {
            title: title.into(),
            option_a: option_a.into(),
            option_b: option_b.into(),
            constraints: constraints.into(),
        };

        for (field, value) in [
            ("title", &dilemma.title),
            ("option A", &dilemma.option_a),
            ("option B", &dilemma.option_b),
            ("constraints", &dilemma.constraints),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidDilemma(format!(
                    "{field} must not be blank"
                )));
            }
        }

        Ok(dilemma)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn option_a(&self) -> &str {
        &self.option_a
    }

    pub fn option_b(&self) -> &str {
        &self.option_b
    }

    pub fn constraints(&self) -> &str {
        &self.constraints
    }
}

impl std::fmt::Display for Dilemma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
