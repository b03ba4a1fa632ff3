use serde::{Deserialize, Serialize};

/// Parameters passed to a model run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOptions {
    pub prompt: String,
    pub max_tokens: u32,
}

/// Result of a model run. `response` is absent when the backend produced no text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RunOutput {
    #[serde(default)]
    pub response: Option<String>,
}

/// Envelope wrapping every reply from the backend's REST API.
#[derive(Debug, Deserialize)]
pub(crate) struct RunEnvelope {
    #[serde(default)]
    pub result: Option<RunOutput>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMessage {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

impl RunEnvelope {
    pub(crate) fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return "request was not successful".to_string();
        }

        self.errors
            .iter()
            .map(|e| match e.code {
                Some(code) => format!("{} ({})", e.message, code),
                None => e.message.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}
