pub const PICA_HOST: &str = "https://api.picaos.com";

#[derive(Debug, Clone)]
pub struct PicaConnectorConfig {
    pub host: String,
    pub api_key: String,
    /// Connector keys to expose to the model, `*` for all of them
    pub connectors: Vec<String>,
}

impl PicaConnectorConfig {
    /// Config against the public endpoint with every connector enabled
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            host: PICA_HOST.to_string(),
            api_key: api_key.into(),
            connectors: vec!["*".to_string()],
        }
    }
}
