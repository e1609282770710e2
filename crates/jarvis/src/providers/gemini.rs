//! Google Gemini provider
//!
//! The API key is sent only in the `x-goog-api-key` header, never in the URL,
//! so it does not leak into request logs.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::base::{Provider, Usage};
use super::configs::GeminiProviderConfig;
use super::utils::{handle_response, system_parts};
use crate::models::request::{AgentRequest, GenerationConfig};

pub struct GeminiProvider {
    client: Client,
    config: GeminiProviderConfig,
}

impl GeminiProvider {
    pub fn new(config: GeminiProviderConfig) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self { client, config })
    }

    fn build_request(request: &AgentRequest, generation: &GenerationConfig) -> GeminiRequest {
        let parts: Vec<GeminiPart> = system_parts(request)
            .into_iter()
            .map(|text| GeminiPart { text })
            .collect();

        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: request.input.clone(),
                }],
            }],
            system_instruction: if parts.is_empty() {
                None
            } else {
                Some(GeminiContent { role: None, parts })
            },
            generation_config: GeminiGenerationConfig {
                max_output_tokens: generation.max_output_tokens,
                temperature: generation.temperature,
            },
        }
    }

    fn get_usage(response: &GeminiResponse) -> Usage {
        match &response.usage_metadata {
            Some(usage) => Usage::new(
                usage.prompt_token_count,
                usage.candidates_token_count,
                usage.total_token_count,
            ),
            None => Usage::default(),
        }
    }

    async fn post(&self, payload: &GeminiRequest) -> Result<GeminiResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.host.trim_end_matches('/'),
            self.config.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(payload)
            .send()
            .await?;

        handle_response("Gemini API", response).await
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    async fn complete(
        &self,
        request: &AgentRequest,
        generation: &GenerationConfig,
    ) -> Result<(String, Usage)> {
        let payload = Self::build_request(request, generation);
        let response = self.post(&payload).await?;

        let candidate = response
            .candidates
            .first()
            .ok_or_else(|| anyhow!("No candidates in Gemini API response"))?;

        let text: String = candidate
            .content
            .as_ref()
            .map(|content| content.parts.iter().map(|p| p.text.as_str()).collect())
            .unwrap_or_default();

        Ok((text, Self::get_usage(&response)))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

// Non-text parts (function calls, inline data) carry no `text` and read as empty.
#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    max_output_tokens: i32,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsageMetadata {
    prompt_token_count: Option<i32>,
    candidates_token_count: Option<i32>,
    total_token_count: Option<i32>,
}
