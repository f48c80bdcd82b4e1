//! Assistant adapter for the Gemini `generateContent` REST endpoint.

use crate::modules::portfolio::adapters::outbound::assistant::{Assistant, AssistantError};
use crate::modules::portfolio::core::chat::{ChatMessage, ChatRole};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const SYSTEM_INSTRUCTION: &str = "You are the assistant on Falalu's graphic design portfolio. \
Answer briefly and warmly about the design work, services and availability. \
If you do not know something, suggest using the contact section.";

pub struct GeminiAssistant {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiAssistant {
    /// * `api_url` - e.g. `https://generativelanguage.googleapis.com`.
    /// * `api_key` - `None` leaves the assistant unconfigured; every call then fails fast.
    pub fn new(client: Client, api_url: &str, model: &str, api_key: Option<String>) -> Self {
        Self {
            client,
            endpoint: format!(
                "{}/v1beta/models/{model}:generateContent",
                api_url.trim_end_matches('/')
            ),
            api_key,
        }
    }

    fn request_body(transcript: &[ChatMessage]) -> GenerateRequest<'_> {
        // The model expects the conversation to open with a user turn, so the
        // canned greeting (and anything else before the first question) is left out.
        let contents = transcript
            .iter()
            .skip_while(|m| m.role != ChatRole::User)
            .map(|m| Content {
                role: Some(match m.role {
                    ChatRole::User => "user",
                    ChatRole::Assistant => "model",
                }),
                parts: vec![Part { text: &m.content }],
            })
            .collect();
        GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            contents,
        }
    }

    fn first_text(response: GenerateResponse) -> Option<String> {
        response
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .find(|t| !t.trim().is_empty())
    }
}

#[async_trait]
impl Assistant for GeminiAssistant {
    async fn reply(&self, transcript: &[ChatMessage]) -> Result<String, AssistantError> {
        let api_key = self.api_key.as_deref().ok_or(AssistantError::NotConfigured)?;

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", api_key)
            .json(&Self::request_body(transcript))
            .send()
            .await
            .map_err(|e| AssistantError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::Request(format!("{status}: {body}")));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::Request(e.to_string()))?;
        Self::first_text(body).ok_or(AssistantError::EmptyReply)
    }
}
