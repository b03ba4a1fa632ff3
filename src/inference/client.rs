use super::types::*;
use crate::{Error, Result, config::BackendConfig};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// A managed backend able to run a named model against a prompt.
#[async_trait]
pub trait InferenceService: Send + Sync {
    async fn run(&self, model: &str, options: RunOptions) -> Result<RunOutput>;
}

/// REST client for the Workers AI "run model" endpoint.
pub struct WorkersAiClient {
    client: Client,
    base_url: String,
    account_id: String,
    api_token: String,
}

impl WorkersAiClient {
    pub fn new(config: BackendConfig) -> Result<Self> {
        if config.account_id.is_empty() {
            return Err(Error::config("backend.account_id must be set"));
        }
        if config.api_token.is_empty() {
            return Err(Error::config("backend.api_token must be set"));
        }

        Ok(Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            account_id: config.account_id,
            api_token: config.api_token,
        })
    }

    fn run_url(&self, model: &str) -> String {
        format!(
            "{}/accounts/{}/ai/run/{}",
            self.base_url,
            self.account_id,
            model.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl InferenceService for WorkersAiClient {
    async fn run(&self, model: &str, options: RunOptions) -> Result<RunOutput> {
        let url = self.run_url(model);
        debug!(
            "Running model {} with max_tokens={}",
            model, options.max_tokens
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&options)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        // Error replies usually still carry the envelope with messages.
        let envelope: Option<RunEnvelope> = serde_json::from_slice(&body).ok();

        if !status.is_success() {
            let detail = envelope
                .map(|e| e.error_summary())
                .unwrap_or_else(|| String::from_utf8_lossy(&body).into_owned());
            return Err(Error::backend(format!("status {}: {}", status, detail)));
        }

        let envelope =
            envelope.ok_or_else(|| Error::backend("response body is not a valid envelope"))?;

        if !envelope.success {
            return Err(Error::backend(envelope.error_summary()));
        }

        debug!("Model {} returned status {}", model, status);

        Ok(envelope.result.unwrap_or_default())
    }
}
