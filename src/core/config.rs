//! Chat endpoint configuration loaded from the environment.

use std::env;

use async_openai::config::AzureConfig;

use crate::core::api_key;

pub const DEFAULT_ENDPOINT: &str = "https://gptmodelbargain.openai.azure.com";
pub const DEFAULT_DEPLOYMENT: &str = "gpt-35-turbo";
pub const DEFAULT_API_VERSION: &str = "2024-08-01-preview";

#[derive(Debug, Clone)]
pub struct Config {
    pub azure_config: AzureConfig,
    pub endpoint: String,
    pub deployment: String,
    pub api_version: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "AZURE_OPENAI_API_KEY is not set (export it, add it to .env, or run `wathiqa config set --api-key <KEY>`)"
    )]
    MissingApiKey,
}

/// Where the API key comes from, for `wathiqa config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Environment,
    StoredFile,
    Missing,
}

/// Build a config from a variable lookup and an optional stored key.
/// Environment variables win over the stored key.
pub fn from_lookup<F>(lookup: F, stored_key: Option<String>) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let endpoint = lookup("AZURE_OPENAI_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let deployment =
        lookup("AZURE_OPENAI_DEPLOYMENT").unwrap_or_else(|| DEFAULT_DEPLOYMENT.to_string());
    let api_version =
        lookup("AZURE_OPENAI_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

    let api_key = lookup("AZURE_OPENAI_API_KEY")
        .filter(|k| !k.trim().is_empty())
        .or(stored_key)
        .ok_or(ConfigError::MissingApiKey)?;

    let azure_config = AzureConfig::new()
        .with_api_base(endpoint.clone())
        .with_deployment_id(deployment.clone())
        .with_api_version(api_version.clone())
        .with_api_key(api_key);

    Ok(Config {
        azure_config,
        endpoint,
        deployment,
        api_version,
    })
}

/// Load configuration from the environment and the stored key file.
pub fn load() -> Result<Config, ConfigError> {
    from_lookup(|name| env::var(name).ok(), api_key::load_api_key())
}

pub fn key_source() -> KeySource {
    if env::var("AZURE_OPENAI_API_KEY").is_ok_and(|k| !k.trim().is_empty()) {
        KeySource::Environment
    } else if api_key::load_api_key().is_some() {
        KeySource::StoredFile
    } else {
        KeySource::Missing
    }
}
