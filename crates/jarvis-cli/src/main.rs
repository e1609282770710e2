use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use jarvis::agent::Agent;
use jarvis::connectors::configs::PicaConnectorConfig;
use jarvis::connectors::pica::PicaConnector;
use jarvis::providers::configs::{GeminiProviderConfig, OpenAiProviderConfig, ProviderConfig};
use jarvis::providers::factory::{get_provider, ProviderType};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

mod agents;
mod prompt;
mod session;

use prompt::rustyline::RustylinePrompt;
use session::Session;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Language model provider (gemini or openai)
    #[arg(short, long, default_value = "gemini", value_parser = ProviderType::from_str)]
    provider: ProviderType,

    /// Language model API key (falls back to GEMINI_API_KEY or OPENAI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Model to use instead of the provider default
    #[arg(short, long)]
    model: Option<String>,

    /// Pica API key
    #[arg(long, env = "PICA_API_KEY", hide_env_values = true, default_value = "")]
    pica_api_key: String,

    /// Pica host
    #[arg(long, env = "PICA_HOST")]
    pica_host: Option<String>,

    /// Send a single message, print the reply and exit
    #[arg(long)]
    message: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let agent = build_agent(&cli)?;
    let mut session = Session::new(Box::new(agent), Box::new(RustylinePrompt::new()));

    match &cli.message {
        Some(message) => session.headless_start(message).await,
        None => {
            println!(
                "JARVIS {}",
                style("- type \"/exit\" to end the session").dim()
            );
            session.start().await
        }
    }
}

fn build_agent(cli: &Cli) -> Result<Agent> {
    let config = provider_config(cli);
    tracing::debug!("using provider {}", config.provider_type());
    let provider = get_provider(config)?;

    let mut connector_config = PicaConnectorConfig::new(cli.pica_api_key.clone());
    if let Some(host) = &cli.pica_host {
        connector_config.host = host.clone();
    }
    let connector = PicaConnector::new(connector_config).context("Failed to build Pica client")?;

    Ok(Agent::new(provider, Box::new(connector)))
}

// Missing keys are not an error here: the provider rejects the request and
// the session shows the usual apology.
fn provider_config(cli: &Cli) -> ProviderConfig {
    match cli.provider {
        ProviderType::Gemini => {
            let mut config = GeminiProviderConfig::new(api_key(cli, "GEMINI_API_KEY"));
            if let Some(model) = &cli.model {
                config.model = model.clone();
            }
            ProviderConfig::Gemini(config)
        }
        ProviderType::OpenAi => {
            let mut config = OpenAiProviderConfig::new(api_key(cli, "OPENAI_API_KEY"));
            if let Some(model) = &cli.model {
                config.model = model.clone();
            }
            ProviderConfig::OpenAi(config)
        }
    }
}

fn api_key(cli: &Cli, env_var: &str) -> String {
    cli.api_key
        .clone()
        .or_else(|| std::env::var(env_var).ok())
        .unwrap_or_default()
}
