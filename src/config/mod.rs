mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let config = load_from(&config_path).await?;
    Ok(config.with_overrides(|key| env::var(key).ok()))
}

pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Applies secrets supplied by the environment on top of the file values.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(token) = lookup("AUTH_TOKEN") {
            self.auth.token = Some(token);
        }
        if let Some(account_id) = lookup("BACKEND_ACCOUNT_ID") {
            self.backend.account_id = account_id;
        }
        if let Some(api_token) = lookup("BACKEND_API_TOKEN") {
            self.backend.api_token = api_token;
        }
        self
    }
}
