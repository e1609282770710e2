use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What a connector service tells the model about itself before each turn
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectorContext {
    /// Preamble steering the model, may be empty
    #[serde(default)]
    pub system: String,
    /// Opaque tool descriptor set, absent when the service offers none
    #[serde(default)]
    pub tools: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub input: String,
    pub stream: bool,
}

impl ExecuteRequest {
    /// A synchronous execution of the given model output
    pub fn new<S: Into<String>>(input: S) -> Self {
        Self {
            input: input.into(),
            stream: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecuteResponse {
    #[serde(default)]
    pub output: Option<String>,
}

impl ExecuteResponse {
    /// The output text, if the service produced any
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref().filter(|o| !o.is_empty())
    }
}

/// A service that supplies tool descriptors and executes tool invocations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Connector: Send + Sync {
    /// Fetch the current system prompt and tool descriptor set
    async fn context(&self) -> Result<ConnectorContext>;

    /// Execute the tool invocation embedded in a model completion
    async fn execute(&self, request: ExecuteRequest) -> Result<ExecuteResponse>;
}
