//! Wire types for the council debate service
//!
//! These structs mirror the exact JSON the service speaks. Dilemma options
//! travel under the short keys `A` and `B`; continuation responses carry a
//! batch of turns that may include agents other than the one queried.

use council_domain::{
    CustomAgentProfile, Dilemma, EnhancementResult, Recommendation, Transcript, Turn, Verdict,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dilemma payload as the service expects it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DilemmaDto {
    pub title: String,
    #[serde(rename = "A")]
    pub option_a: String,
    #[serde(rename = "B")]
    pub option_b: String,
    pub constraints: String,
}

impl From<&Dilemma> for DilemmaDto {
    fn from(dilemma: &Dilemma) -> Self {
        Self {
            title: dilemma.title().to_string(),
            option_a: dilemma.option_a().to_string(),
            option_b: dilemma.option_b().to_string(),
            constraints: dilemma.constraints().to_string(),
        }
    }
}

/// Request body for `POST /continue` and `POST /judge`
#[derive(Debug, Serialize)]
pub struct TranscriptRequest {
    pub dilemma: DilemmaDto,
    pub turns: Vec<Turn>,
}

impl From<&Transcript> for TranscriptRequest {
    fn from(transcript: &Transcript) -> Self {
        Self {
            dilemma: transcript.dilemma().into(),
            turns: transcript.turns().to_vec(),
        }
    }
}

/// Response body for `POST /continue`
#[derive(Debug, Deserialize)]
pub struct ContinuationResponse {
    pub turns: Vec<Turn>,
}

/// Response body for `POST /judge`
#[derive(Debug, Deserialize)]
pub struct VerdictResponse {
    pub final_recommendation: Recommendation,
    pub confidence: u8,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub key_considerations: Vec<String>,
}

impl From<VerdictResponse> for Verdict {
    fn from(dto: VerdictResponse) -> Self {
        Verdict::new(dto.final_recommendation, dto.confidence, dto.rationale)
            .with_key_considerations(dto.key_considerations)
    }
}

/// Request body for `POST /api/enhance`
#[derive(Debug, Serialize)]
pub struct EnhanceRequest {
    pub description: String,
}

/// Response body for `POST /api/enhance`
#[derive(Debug, Deserialize)]
pub struct EnhanceResponse {
    pub enhanced_prompt: String,
    #[serde(default)]
    pub analysis_scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub improvements_made: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl From<EnhanceResponse> for EnhancementResult {
    fn from(dto: EnhanceResponse) -> Self {
        Self {
            enhanced_prompt: dto.enhanced_prompt,
            analysis_scores: dto.analysis_scores,
            improvements_made: dto.improvements_made,
            suggestions: dto.suggestions,
        }
    }
}

/// Request body for `POST /api/agents/create`
#[derive(Debug, Serialize)]
pub struct CreateAgentRequest {
    pub name: String,
    pub avatar: String,
    pub description: String,
}

/// Response body for `POST /api/agents/create`; the profile sits under
/// an `agent` wrapper key.
#[derive(Debug, Deserialize)]
pub struct CreateAgentResponse {
    pub agent: CreatedAgentDto,
}

#[derive(Debug, Deserialize)]
pub struct CreatedAgentDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    pub description: String,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub rating_count: u32,
}

impl From<CreatedAgentDto> for CustomAgentProfile {
    fn from(dto: CreatedAgentDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            avatar: dto.avatar,
            description: dto.description,
            average_rating: dto.average_rating,
            rating_count: dto.rating_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dilemma_uses_short_option_keys() {
        let dilemma = Dilemma::new("Trolley", "Pull the lever", "Do nothing", "Five vs one")
            .expect("valid dilemma");
        let json = serde_json::to_value(DilemmaDto::from(&dilemma)).unwrap();

        assert_eq!(json["title"], "Trolley");
        assert_eq!(json["A"], "Pull the lever");
        assert_eq!(json["B"], "Do nothing");
        assert_eq!(json["constraints"], "Five vs one");
    }

    #[test]
    fn test_continuation_batch_parses() {
        let body = r#"{
            "turns": [
                {"agent": "Deon", "stance": "A", "argument": "Duty first"},
                {"agent": "Conse", "stance": "B", "argument": "Outcomes matter"}
            ]
        }"#;
        let parsed: ContinuationResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.turns.len(), 2);
        assert_eq!(parsed.turns[0].agent.as_str(), "Deon");
    }

    #[test]
    fn test_verdict_parses_with_and_without_optionals() {
        let full = r#"{
            "final_recommendation": "B",
            "confidence": 72,
            "rationale": "Outcomes dominate",
            "key_considerations": ["harm", "precedent"]
        }"#;
        let verdict: Verdict = serde_json::from_str::<VerdictResponse>(full).unwrap().into();
        assert_eq!(verdict.final_recommendation, Recommendation::B);
        assert_eq!(verdict.key_considerations.len(), 2);

        let minimal = r#"{"final_recommendation": "A", "confidence": 55}"#;
        let verdict: Verdict = serde_json::from_str::<VerdictResponse>(minimal)
            .unwrap()
            .into();
        assert_eq!(verdict.final_recommendation, Recommendation::A);
        assert!(verdict.key_considerations.is_empty());
    }

    #[test]
    fn test_verdict_rejects_unknown_recommendation() {
        let bad = r#"{"final_recommendation": "C", "confidence": 50}"#;
        assert!(serde_json::from_str::<VerdictResponse>(bad).is_err());
    }

    #[test]
    fn test_created_agent_unwraps_envelope() {
        let body = r#"{
            "agent": {
                "id": "agent-7",
                "name": "EcoWarrior",
                "avatar": "🌱",
                "description": "Weighs environmental impact above all else in every case.",
                "average_rating": 4.5,
                "rating_count": 12
            }
        }"#;
        let parsed: CreateAgentResponse = serde_json::from_str(body).unwrap();
        let profile: CustomAgentProfile = parsed.agent.into();
        assert_eq!(profile.id, "agent-7");
        assert_eq!(profile.rating_count, 12);
    }
}
