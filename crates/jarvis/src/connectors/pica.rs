use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

use super::base::{Connector, ConnectorContext, ExecuteRequest, ExecuteResponse};
use super::configs::PicaConnectorConfig;
use crate::providers::utils::handle_response;

const SECRET_HEADER: &str = "x-pica-secret";

/// Client for the Pica connector execution service
pub struct PicaConnector {
    client: Client,
    config: PicaConnectorConfig,
}

impl PicaConnector {
    pub fn new(config: PicaConnectorConfig) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self { client, config })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/v1/{}", self.config.host.trim_end_matches('/'), endpoint)
    }
}

#[async_trait]
impl Connector for PicaConnector {
    async fn context(&self) -> Result<ConnectorContext> {
        let response = self
            .client
            .get(self.url("system-prompt"))
            .header(SECRET_HEADER, &self.config.api_key)
            .query(&[("connectors", self.config.connectors.join(","))])
            .send()
            .await?;

        handle_response("Pica", response).await
    }

    async fn execute(&self, request: ExecuteRequest) -> Result<ExecuteResponse> {
        let response = self
            .client
            .post(self.url("execute"))
            .header(SECRET_HEADER, &self.config.api_key)
            .json(&request)
            .send()
            .await?;

        handle_response("Pica", response).await
    }
}
