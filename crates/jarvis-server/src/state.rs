use anyhow::Result;
use jarvis::agent::Agent;
use jarvis::connectors::configs::PicaConnectorConfig;
use jarvis::connectors::pica::PicaConnector;
use jarvis::providers::configs::ProviderConfig;
use jarvis::providers::factory;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub provider_config: ProviderConfig,
    pub connector_config: PicaConnectorConfig,
}

impl AppState {
    /// Build a fresh agent for one request
    pub fn agent(&self) -> Result<Agent> {
        let provider = factory::get_provider(self.provider_config.clone())?;
        let connector = PicaConnector::new(self.connector_config.clone())?;
        Ok(Agent::new(provider, Box::new(connector)))
    }
}
