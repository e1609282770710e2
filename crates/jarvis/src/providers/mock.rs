use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;

use crate::models::request::{AgentRequest, GenerationConfig};
use crate::providers::base::{Provider, Usage};

/// A mock provider that returns pre-configured completions for testing
///
/// Clones share their script and request log.
#[derive(Clone)]
pub struct MockProvider {
    responses: Arc<Mutex<Vec<Result<String>>>>,
    requests: Arc<Mutex<Vec<AgentRequest>>>,
}

impl MockProvider {
    /// Create a new mock provider with a sequence of completions
    pub fn new<S: Into<String>>(responses: Vec<S>) -> Self {
        Self::with_results(responses.into_iter().map(|r| Ok(r.into())).collect())
    }

    pub fn with_results(responses: Vec<Result<String>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<AgentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(
        &self,
        request: &AgentRequest,
        _generation: &GenerationConfig,
    ) -> Result<(String, Usage)> {
        self.requests.lock().unwrap().push(request.clone());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Err(anyhow!("MockProvider has no more responses"))
        } else {
            responses.remove(0).map(|text| (text, Usage::default()))
        }
    }
}
