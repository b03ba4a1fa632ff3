use serde::Serialize;
use serde_json::Value;

/// Fields read from a `/api/generate` body.
///
/// Empty strings, `null`, non-string values and non-object bodies all count
/// as absent so the caller's defaults apply.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerateRequest {
    pub model: Option<String>,
    pub prompt: Option<String>,
}

impl GenerateRequest {
    pub fn from_value(value: &Value) -> Self {
        Self {
            model: non_empty_string(value, "model"),
            prompt: non_empty_string(value, "prompt"),
        }
    }
}

fn non_empty_string(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub response: String,
    pub stream: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
