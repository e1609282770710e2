use anyhow::{anyhow, Context, Result};
use tracing::{debug, error};

use crate::connectors::base::{Connector, ExecuteRequest};
use crate::errors::{AgentResult, ProcessingError};
use crate::models::request::{AgentRequest, AgentResponse, GenerationConfig};
use crate::providers::base::Provider;

/// Literal text a model emits when it wants the connector service to run a tool
pub const TOOL_CODE_MARKER: &str = "```tool_code";

/// Agent pairs a language model with the connector service that runs its tools.
///
/// Each call to [`Agent::reply`] is one independent cycle: fetch the connector
/// context, ask the model, and optionally hand the completion to the
/// connector for execution. Nothing is carried between calls.
pub struct Agent {
    provider: Box<dyn Provider>,
    connector: Box<dyn Connector>,
    generation: GenerationConfig,
}

impl Agent {
    /// Create a new Agent with the specified provider and connector
    pub fn new(provider: Box<dyn Provider>, connector: Box<dyn Connector>) -> Self {
        Self {
            provider,
            connector,
            generation: GenerationConfig::default(),
        }
    }

    /// Process one user message and return the text to show them
    pub async fn process_user_input(&self, input: &str) -> AgentResult<String> {
        self.reply(input).await.map(|response| response.text)
    }

    /// Process one user message, keeping track of where the answer came from
    pub async fn reply(&self, input: &str) -> AgentResult<AgentResponse> {
        self.run(input).await.map_err(|e| {
            error!("Error processing input: {:#}", e);
            ProcessingError
        })
    }

    async fn run(&self, input: &str) -> Result<AgentResponse> {
        let context = self
            .connector
            .context()
            .await
            .context("Failed to fetch connector context")?;

        let request = AgentRequest::new(input)
            .with_system(context.system)
            .with_tools(context.tools);
        debug!(has_tools = request.has_tools(), "sending completion request");

        let (completion, usage) = self
            .provider
            .complete(&request, &self.generation)
            .await
            .context("Completion request failed")?;
        debug!(?usage, "received completion");

        if completion.is_empty() {
            return Err(anyhow!("Model returned an empty completion"));
        }

        if !(request.has_tools() && completion.contains(TOOL_CODE_MARKER)) {
            return Ok(AgentResponse::model(completion));
        }

        debug!("completion requests a tool, forwarding to connector");
        let executed = self
            .connector
            .execute(ExecuteRequest::new(completion.as_str()))
            .await
            .context("Tool execution failed")?;

        Ok(match executed.output() {
            Some(output) => AgentResponse::tool(output),
            None => AgentResponse::model(completion),
        })
    }
}
