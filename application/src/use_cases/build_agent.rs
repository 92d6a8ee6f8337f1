//! Build Agent use case - the custom-agent creation flow
//!
//! A 4-step state machine over [`BuilderStep`]: forward navigation is
//! gated by per-step validation, backward navigation is free. Moving from
//! the personality step to the enhancement step triggers exactly one
//! enhancement call; its failure is non-fatal and never blocks reaching
//! the preview step. Creation failures keep the builder open for retry.

use crate::ports::agent_studio::{AgentStudio, StudioError};
use council_domain::{
    AgentDraft, BuilderStep, CustomAgentProfile, DraftForm, EnhancementResult, FormIssue,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors surfaced by the builder flow
#[derive(Error, Debug)]
pub enum BuildAgentError {
    #[error("Validation failed")]
    Validation(Vec<FormIssue>),

    #[error("No enhancement result available")]
    EnhancementMissing,

    #[error("Creation is only available from the preview step")]
    NotAtPreview,

    #[error("Creation failed: {0}")]
    Creation(#[from] StudioError),
}

/// Stateful controller for the agent creation flow
///
/// One builder instance corresponds to one wizard run; the enhancement
/// result is scoped to it and discarded with it.
pub struct AgentBuilder<S: AgentStudio + 'static> {
    studio: Arc<S>,
    step: BuilderStep,
    form: DraftForm,
    enhancement: Option<EnhancementResult>,
    enhancement_warning: Option<String>,
    creation_error: Option<String>,
}

impl<S: AgentStudio + 'static> AgentBuilder<S> {
    pub fn new(studio: Arc<S>) -> Self {
        Self {
            studio,
            step: BuilderStep::BasicInfo,
            form: DraftForm::default(),
            enhancement: None,
            enhancement_warning: None,
            creation_error: None,
        }
    }

    pub fn step(&self) -> BuilderStep {
        self.step
    }

    pub fn form(&self) -> &DraftForm {
        &self.form
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_avatar(&mut self, avatar: impl Into<String>) {
        self.form.avatar = avatar.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
    }

    /// The enhancement result, if the service succeeded
    pub fn enhancement(&self) -> Option<&EnhancementResult> {
        self.enhancement.as_ref()
    }

    /// Warning from a failed enhancement (degraded, non-blocking)
    pub fn enhancement_warning(&self) -> Option<&str> {
        self.enhancement_warning.as_deref()
    }

    /// Inline error from the last failed creation attempt
    pub fn creation_error(&self) -> Option<&str> {
        self.creation_error.as_deref()
    }

    /// Advance to the next step if the current step validates
    ///
    /// The personality -> enhancement transition calls the enhancement
    /// service once with the current description. If the call fails, a
    /// warning is stored and the step still advances: the user can proceed
    /// with the original description.
    pub async fn next(&mut self) -> Result<BuilderStep, BuildAgentError> {
        let issues = self.form.validate_step(self.step);
        if !issues.is_empty() {
            return Err(BuildAgentError::Validation(issues));
        }

        let Some(next) = self.step.next() else {
            return Ok(self.step);
        };

        if self.step == BuilderStep::Personality {
            self.run_enhancement().await;
        }

        self.step = next;
        Ok(self.step)
    }

    /// Move back one step; never gated
    pub fn back(&mut self) -> BuilderStep {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Create the agent from the preview step
    ///
    /// `use_enhanced` selects the enhanced prompt (requires a stored
    /// enhancement result) over the raw description. On failure the error
    /// is also kept as an inline, step-scoped message and the builder
    /// stays at the preview step for retry.
    pub async fn create(
        &mut self,
        use_enhanced: bool,
    ) -> Result<CustomAgentProfile, BuildAgentError> {
        if self.step != BuilderStep::Preview {
            return Err(BuildAgentError::NotAtPreview);
        }

        let description = if use_enhanced {
            match &self.enhancement {
                Some(result) => result.enhanced_prompt.clone(),
                None => return Err(BuildAgentError::EnhancementMissing),
            }
        } else {
            self.form.description.clone()
        };

        let draft = AgentDraft {
            name: self.form.name.clone(),
            avatar: self.form.avatar.clone(),
            description,
        };

        match self.studio.create_agent(&draft).await {
            Ok(profile) => {
                info!("Created custom agent {}", profile.name);
                self.creation_error = None;
                Ok(profile)
            }
            Err(e) => {
                warn!("Agent creation failed: {}", e);
                self.creation_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    async fn run_enhancement(&mut self) {
        self.enhancement_warning = None;
        match self.studio.enhance(&self.form.description).await {
            Ok(result) => {
                info!("Description enhanced");
                self.enhancement = Some(result);
            }
            Err(e) => {
                warn!("Enhancement failed: {}", e);
                self.enhancement = None;
                self.enhancement_warning = Some(
                    "Failed to enhance description. You can still proceed with the original."
                        .to_string(),
                );
            }
        }
    }
}
