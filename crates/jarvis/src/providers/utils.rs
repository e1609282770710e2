use anyhow::{anyhow, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::request::AgentRequest;

/// Map an HTTP response onto a parsed body or a descriptive error.
///
/// Shared by every outbound client so auth failures read the same whichever
/// service rejected the key.
pub async fn handle_response<T: DeserializeOwned>(service: &str, response: Response) -> Result<T> {
    match response.status() {
        status if status.is_success() => response
            .json::<T>()
            .await
            .map_err(|e| anyhow!("Invalid response from {}: {}", service, e)),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow!(
            "Authentication failed for {}: {}",
            service,
            response.status()
        )),
        status if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() => {
            Err(anyhow!("Server error from {}: {}", service, status))
        }
        status => {
            let error_text = response.text().await.unwrap_or_default();
            Err(anyhow!(
                "Request to {} failed: {} - {}",
                service,
                status,
                error_text
            ))
        }
    }
}

/// The side-channel metadata of a request as a list of system texts.
///
/// The system prompt comes first when present, followed by the tool
/// descriptor set serialized as JSON.
pub fn system_parts(request: &AgentRequest) -> Vec<String> {
    let mut parts = Vec::new();
    if !request.system.is_empty() {
        parts.push(request.system.clone());
    }
    if let Some(tools) = &request.tools {
        parts.push(format!("Available tools:\n{}", tools));
    }
    parts
}

/// Pull the assistant text out of an OpenAI chat completion
pub fn openai_response_to_text(response: &Value) -> Result<String> {
    response["choices"][0]["message"]["content"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| anyhow!("Invalid response format from OpenAI API"))
}
