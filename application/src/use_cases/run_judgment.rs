//! Run Judgment use case
//!
//! One-shot request over the full transcript. No automatic retry: a
//! failure is terminal for the attempt and the caller decides what to do
//! with the preserved transcript.

use crate::ports::debate_gateway::{DebateGateway, GatewayError};
use crate::ports::progress::DebateProgress;
use council_domain::{Transcript, Verdict};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while requesting a judgment
#[derive(Error, Debug)]
pub enum RunJudgmentError {
    #[error("Cannot judge an empty transcript")]
    EmptyTranscript,

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Use case for obtaining the judge's verdict
pub struct RunJudgmentUseCase<G: DebateGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: DebateGateway + 'static> RunJudgmentUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(
        &self,
        transcript: &Transcript,
        progress: &dyn DebateProgress,
    ) -> Result<Verdict, RunJudgmentError> {
        if transcript.is_empty() {
            return Err(RunJudgmentError::EmptyTranscript);
        }

        info!("Requesting judgment over {} turns", transcript.len());
        progress.on_judge_thinking();

        let outcome = self.gateway.judge(transcript).await;
        progress.on_judge_complete();

        match outcome {
            Ok(verdict) => {
                info!(
                    "Verdict: option {} at {}%",
                    verdict.final_recommendation, verdict.confidence
                );
                Ok(verdict)
            }
            Err(e) => {
                warn!("Judgment failed: {}", e);
                Err(e.into())
            }
        }
    }
}
