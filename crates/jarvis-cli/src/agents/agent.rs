use async_trait::async_trait;
use jarvis::{agent::Agent as JarvisAgent, errors::AgentResult};

#[async_trait]
pub trait Agent: Send + Sync {
    async fn process_user_input(&self, input: &str) -> AgentResult<String>;
}

#[async_trait]
impl Agent for JarvisAgent {
    async fn process_user_input(&self, input: &str) -> AgentResult<String> {
        self.process_user_input(input).await
    }
}
