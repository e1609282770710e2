use crate::error::{to_env_var, ConfigError};
use config::{Config, Environment};
use jarvis::connectors::configs::{PicaConnectorConfig, PICA_HOST};
use jarvis::providers::configs::{
    GeminiProviderConfig, OpenAiProviderConfig, ProviderConfig, GEMINI_HOST, GEMINI_MODEL,
    OPENAI_HOST, OPENAI_MODEL,
};
use serde::{Deserialize, Deserializer};
use std::net::SocketAddr;

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

// An empty api_key is accepted here and fails at the provider as an auth error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum ProviderSettings {
    Gemini {
        #[serde(default = "default_gemini_host")]
        host: String,
        #[serde(default)]
        api_key: String,
        #[serde(default = "default_gemini_model")]
        model: String,
    },
    OpenAi {
        #[serde(default = "default_openai_host")]
        host: String,
        #[serde(default)]
        api_key: String,
        #[serde(default = "default_openai_model")]
        model: String,
    },
}

impl ProviderSettings {
    // Convert to the jarvis ProviderConfig
    pub fn into_config(self) -> ProviderConfig {
        match self {
            ProviderSettings::Gemini {
                host,
                api_key,
                model,
            } => ProviderConfig::Gemini(GeminiProviderConfig {
                host,
                api_key,
                model,
            }),
            ProviderSettings::OpenAi {
                host,
                api_key,
                model,
            } => ProviderConfig::OpenAi(OpenAiProviderConfig {
                host,
                api_key,
                model,
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ConnectorSettings {
    #[serde(default = "default_pica_host")]
    pub host: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_connectors", deserialize_with = "comma_list")]
    pub connectors: Vec<String>,
}

impl Default for ConnectorSettings {
    fn default() -> Self {
        Self {
            host: default_pica_host(),
            api_key: String::new(),
            connectors: default_connectors(),
        }
    }
}

impl ConnectorSettings {
    pub fn into_config(self) -> PicaConnectorConfig {
        PicaConnectorConfig {
            host: self.host,
            api_key: self.api_key,
            connectors: self.connectors,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub provider: ProviderSettings,
    #[serde(default)]
    pub connector: ConnectorSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_and_validate()
    }

    fn load_and_validate() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port())?
            .set_default("provider.type", "gemini")?
            // Layer on the environment variables. Values stay strings so keys
            // such as `000123` or `true` reach the services untouched.
            .add_source(
                Environment::with_prefix("JARVIS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize().map_err(|err| {
            tracing::debug!("Configuration error: {:?}", &err);
            match err {
                config::ConfigError::Type {
                    key: Some(ref key),
                    ..
                } => ConfigError::InvalidValue {
                    env_var: to_env_var(key),
                    message: err.to_string(),
                },
                other => ConfigError::Other(other),
            }
        })
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_gemini_host() -> String {
    GEMINI_HOST.to_string()
}

fn default_gemini_model() -> String {
    GEMINI_MODEL.to_string()
}

fn default_openai_host() -> String {
    OPENAI_HOST.to_string()
}

fn default_openai_model() -> String {
    OPENAI_MODEL.to_string()
}

fn default_pica_host() -> String {
    PICA_HOST.to_string()
}

fn default_connectors() -> Vec<String> {
    vec!["*".to_string()]
}

// Accepts either a list or a comma separated string such as `gmail,slack`
fn comma_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringList {
        List(Vec<String>),
        Csv(String),
    }

    Ok(match StringList::deserialize(deserializer)? {
        StringList::List(items) => items,
        StringList::Csv(csv) => csv
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
    })
}
