use super::mocks::MockInferenceService;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use generate_gateway::{
    config::GenerateConfig,
    server::{self, AppState},
};
use std::sync::Arc;

pub const TEST_TOKEN: &str = "test-token";

/// Build the router with the given token and mock backend
pub fn create_test_app(token: Option<&str>, backend: MockInferenceService) -> Router {
    let state = AppState::new(
        token.map(str::to_string),
        Arc::new(backend),
        GenerateConfig::default(),
    );
    server::router(state)
}

/// Build a request carrying the `X-Auth` header when a token is given
pub fn build_request(method: &str, uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(token) = token {
        builder = builder.header("X-Auth", token);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "debug"
auth:
  token: "file-token"
backend:
  account_id: "acct-from-file"
  api_token: "api-from-file"
"#;
