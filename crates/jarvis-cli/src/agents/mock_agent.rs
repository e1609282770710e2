use async_trait::async_trait;
use jarvis::errors::AgentResult;
use std::sync::Mutex;

use crate::agents::agent::Agent;

/// Replays scripted replies and remembers what it was asked
pub struct MockAgent {
    replies: Mutex<Vec<AgentResult<String>>>,
    inputs: Mutex<Vec<String>>,
}

impl MockAgent {
    pub fn new(replies: Vec<AgentResult<String>>) -> Self {
        Self {
            replies: Mutex::new(replies),
            inputs: Mutex::new(Vec::new()),
        }
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

#[async_trait]
impl Agent for MockAgent {
    async fn process_user_input(&self, input: &str) -> AgentResult<String> {
        self.inputs.lock().unwrap().push(input.to_string());
        self.replies.lock().unwrap().remove(0)
    }
}
