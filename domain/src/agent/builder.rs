//! Agent builder steps and form validation
//!
//! The builder is a 4-step flow: basic info, personality, enhancement,
//! preview. Forward navigation is gated by per-step validation; backward
//! navigation is always free.

use serde::{Deserialize, Serialize};

pub const NAME_MAX_LEN: usize = 50;
pub const DESCRIPTION_MIN_LEN: usize = 50;
pub const DESCRIPTION_MAX_LEN: usize = 1000;

/// The four builder steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BuilderStep {
    BasicInfo,
    Personality,
    Enhancement,
    Preview,
}

impl BuilderStep {
    /// One-based step number for display
    pub fn number(&self) -> u8 {
        match self {
            BuilderStep::BasicInfo => 1,
            BuilderStep::Personality => 2,
            BuilderStep::Enhancement => 3,
            BuilderStep::Preview => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BuilderStep::BasicInfo => "Basic Info",
            BuilderStep::Personality => "Personality",
            BuilderStep::Enhancement => "Enhancement",
            BuilderStep::Preview => "Preview",
        }
    }

    /// The step after this one, if any
    pub fn next(&self) -> Option<BuilderStep> {
        match self {
            BuilderStep::BasicInfo => Some(BuilderStep::Personality),
            BuilderStep::Personality => Some(BuilderStep::Enhancement),
            BuilderStep::Enhancement => Some(BuilderStep::Preview),
            BuilderStep::Preview => None,
        }
    }

    /// The step before this one, if any
    pub fn prev(&self) -> Option<BuilderStep> {
        match self {
            BuilderStep::BasicInfo => None,
            BuilderStep::Personality => Some(BuilderStep::BasicInfo),
            BuilderStep::Enhancement => Some(BuilderStep::Personality),
            BuilderStep::Preview => Some(BuilderStep::Enhancement),
        }
    }
}

/// A validation problem with the builder form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormIssue {
    pub field: &'static str,
    pub message: String,
}

impl FormIssue {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FormIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// The in-progress agent form filled across builder steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftForm {
    pub name: String,
    pub avatar: String,
    pub description: String,
}

impl Default for DraftForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            avatar: "🤖".to_string(),
            description: String::new(),
        }
    }
}

impl DraftForm {
    /// Validate the fields gated by a step
    ///
    /// The enhancement and preview steps have no gating fields of their own.
    pub fn validate_step(&self, step: BuilderStep) -> Vec<FormIssue> {
        let mut issues = Vec::new();

        match step {
            BuilderStep::BasicInfo => {
                if self.name.trim().is_empty() {
                    issues.push(FormIssue::new("name", "Agent name is required"));
                } else if self.name.chars().count() > NAME_MAX_LEN {
                    issues.push(FormIssue::new(
                        "name",
                        format!("Name must be {NAME_MAX_LEN} characters or less"),
                    ));
                }
            }
            BuilderStep::Personality => {
                let len = self.description.chars().count();
                if self.description.trim().is_empty() {
                    issues.push(FormIssue::new("description", "Description is required"));
                } else if len < DESCRIPTION_MIN_LEN {
                    issues.push(FormIssue::new(
                        "description",
                        format!("Description must be at least {DESCRIPTION_MIN_LEN} characters"),
                    ));
                } else if len > DESCRIPTION_MAX_LEN {
                    issues.push(FormIssue::new(
                        "description",
                        format!("Description must be {DESCRIPTION_MAX_LEN} characters or less"),
                    ));
                }
            }
            BuilderStep::Enhancement | BuilderStep::Preview => {}
        }

        issues
    }
}
