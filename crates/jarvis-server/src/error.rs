use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {env_var}: {message}")]
    InvalidValue { env_var: String, message: String },

    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

/// Name of the environment variable that sets a dotted config key
pub fn to_env_var(field: &str) -> String {
    format!("JARVIS_{}", field.replace('.', "__").to_uppercase())
}
