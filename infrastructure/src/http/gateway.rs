//! HTTP adapter for the council debate service
//!
//! One client covers both ports: the debate endpoints (`/agent/{name}`,
//! `/continue`, `/judge`) and the agent studio endpoints (`/api/enhance`,
//! `/api/agents/create`).

use super::protocol::{
    ContinuationResponse, CreateAgentRequest, CreateAgentResponse, DilemmaDto, EnhanceRequest,
    EnhanceResponse, TranscriptRequest, VerdictResponse,
};
use async_trait::async_trait;
use council_application::ports::agent_studio::{AgentStudio, StudioError};
use council_application::ports::debate_gateway::{DebateGateway, GatewayError};
use council_domain::{
    AgentDraft, AgentId, CustomAgentProfile, Dilemma, EnhancementResult, Transcript, Turn, Verdict,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Default service address; overridable through configuration
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// HTTP client for the debate and agent-studio endpoints
pub struct HttpCouncilService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCouncilService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, GatewayError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "{} returned {}: {}",
                path, status, detail
            )));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))
    }
}

fn request_error(e: reqwest::Error) -> GatewayError {
    if e.is_connect() || e.is_timeout() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

fn studio_error(e: GatewayError, failure: fn(String) -> StudioError) -> StudioError {
    match e {
        GatewayError::ConnectionError(msg) => StudioError::ConnectionError(msg),
        other => failure(other.to_string()),
    }
}

#[async_trait]
impl DebateGateway for HttpCouncilService {
    async fn opening_turn(
        &self,
        agent: &AgentId,
        dilemma: &Dilemma,
    ) -> Result<Turn, GatewayError> {
        let path = format!("/agent/{}", agent.to_lowercase());
        self.post_json(&path, &DilemmaDto::from(dilemma)).await
    }

    async fn continuation(&self, transcript: &Transcript) -> Result<Vec<Turn>, GatewayError> {
        let response: ContinuationResponse = self
            .post_json("/continue", &TranscriptRequest::from(transcript))
            .await?;
        Ok(response.turns)
    }

    async fn judge(&self, transcript: &Transcript) -> Result<Verdict, GatewayError> {
        let response: VerdictResponse = self
            .post_json("/judge", &TranscriptRequest::from(transcript))
            .await?;
        Ok(response.into())
    }
}

#[async_trait]
impl AgentStudio for HttpCouncilService {
    async fn enhance(&self, description: &str) -> Result<EnhancementResult, StudioError> {
        let body = EnhanceRequest {
            description: description.to_string(),
        };
        let response: EnhanceResponse = self
            .post_json("/api/enhance", &body)
            .await
            .map_err(|e| studio_error(e, StudioError::EnhancementFailed))?;
        Ok(response.into())
    }

    async fn create_agent(&self, draft: &AgentDraft) -> Result<CustomAgentProfile, StudioError> {
        let body = CreateAgentRequest {
            name: draft.name.clone(),
            avatar: draft.avatar.clone(),
            description: draft.description.clone(),
        };
        let response: CreateAgentResponse = self
            .post_json("/api/agents/create", &body)
            .await
            .map_err(|e| studio_error(e, StudioError::CreationFailed))?;
        Ok(response.agent.into())
    }
}
