use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything the agent sends to a provider for one user message.
///
/// `system` and `tools` are side-channel metadata fetched from the connector
/// service; providers must not splice them into `input`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRequest {
    pub input: String,
    pub system: String,
    pub tools: Option<Value>,
}

impl AgentRequest {
    pub fn new<S: Into<String>>(input: S) -> Self {
        Self {
            input: input.into(),
            system: String::new(),
            tools: None,
        }
    }

    pub fn with_system<S: Into<String>>(mut self, system: S) -> Self {
        self.system = system.into();
        self
    }

    /// Attach a tool descriptor set. A JSON `null` is treated as no tools.
    pub fn with_tools(mut self, tools: Option<Value>) -> Self {
        self.tools = tools.filter(|t| !t.is_null());
        self
    }

    pub fn has_tools(&self) -> bool {
        self.tools.is_some()
    }
}

/// Sampling parameters the agent pins for every completion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub max_output_tokens: i32,
    pub temperature: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: 2048,
            temperature: 0.7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseSource {
    /// Raw completion text from the language model
    Model,
    /// Output of the connector execution service
    Tool,
}

/// The single result produced for an [`AgentRequest`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub text: String,
    pub source: ResponseSource,
}

impl AgentResponse {
    pub fn model<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            source: ResponseSource::Model,
        }
    }

    pub fn tool<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            source: ResponseSource::Tool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_tools_are_absent() {
        let request = AgentRequest::new("hi").with_tools(Some(Value::Null));
        assert!(!request.has_tools());

        let request = AgentRequest::new("hi").with_tools(Some(json!([{"name": "list_files"}])));
        assert!(request.has_tools());
    }

    #[test]
    fn test_default_generation_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.max_output_tokens, 2048);
        assert_eq!(config.temperature, 0.7);
    }
}
