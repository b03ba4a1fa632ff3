use super::types::{ErrorResponse, GenerateRequest, GenerateResponse};
use crate::{
    config::{GenerateConfig, MAX_TOKENS},
    inference::{InferenceService, RunOptions},
};
use axum::{
    body,
    extract::{Request, State},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, info, warn};

pub const AUTH_HEADER: &str = "X-Auth";
pub const GENERATE_PATH: &str = "/api/generate";

/// Largest request body read before it is treated as malformed.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub auth_token: Option<Arc<str>>,
    pub inference: Arc<dyn InferenceService>,
    pub generate: Arc<GenerateConfig>,
}

impl AppState {
    /// An empty token is stored as unset, so it never authorizes anyone.
    pub fn new(
        auth_token: Option<String>,
        inference: Arc<dyn InferenceService>,
        generate: GenerateConfig,
    ) -> Self {
        Self {
            auth_token: auth_token.filter(|t| !t.is_empty()).map(Arc::from),
            inference,
            generate: Arc::new(generate),
        }
    }

    fn is_authorized(&self, headers: &HeaderMap) -> bool {
        let provided = headers
            .get(AUTH_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        match &self.auth_token {
            Some(expected) => provided == expected.as_ref(),
            None => false,
        }
    }
}

/// Handles every request the router receives.
///
/// Checks run in a fixed order and short-circuit: auth, method, path, body.
/// The body is only read once the first three have passed.
pub async fn generate(State(state): State<AppState>, request: Request) -> Response {
    if !state.is_authorized(request.headers()) {
        warn!(
            "Rejected unauthorized {} {}",
            request.method(),
            request.uri().path()
        );
        return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    }

    if *request.method() != Method::POST {
        return (StatusCode::METHOD_NOT_ALLOWED, "POST only").into_response();
    }

    if request.uri().path() != GENERATE_PATH {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    }

    let value = match read_json(request).await {
        Ok(value) => value,
        Err(e) => {
            warn!("Rejected malformed body: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "bad json".to_string(),
                }),
            )
                .into_response();
        }
    };

    // A `null` body has no fields to read; treated like a failed run.
    if value.is_null() {
        error!("Rejected null request body");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let request = GenerateRequest::from_value(&value);
    let model = request
        .model
        .unwrap_or_else(|| state.generate.default_model.clone());
    let options = RunOptions {
        prompt: request
            .prompt
            .unwrap_or_else(|| state.generate.default_prompt.clone()),
        max_tokens: MAX_TOKENS,
    };

    info!("Received generate request for model: {}", model);

    match state.inference.run(&model, options).await {
        Ok(output) => {
            info!("Successfully generated response with model: {}", model);
            Json(GenerateResponse {
                response: output.response.unwrap_or_default(),
                stream: false,
            })
            .into_response()
        }
        Err(e) => {
            error!("Inference failed for model {}: {}", model, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn read_json(request: Request) -> crate::Result<serde_json::Value> {
    let bytes = body::to_bytes(request.into_body(), MAX_BODY_BYTES).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
