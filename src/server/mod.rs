pub mod handlers;
mod types;

pub use handlers::AppState;
pub use types::{ErrorResponse, GenerateRequest, GenerateResponse};

use crate::{config::Config, inference::WorkersAiClient, Result};
use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Builds the router. Every method and path reaches the same handler.
pub fn router(state: AppState) -> Router {
    Router::new()
        .fallback(handlers::generate)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: Config) -> Result<()> {
    let inference = WorkersAiClient::new(config.backend.clone())?;

    let app_state = AppState::new(
        config.auth.token.clone(),
        Arc::new(inference),
        config.generate.clone(),
    );

    if app_state.auth_token.is_none() {
        warn!("No auth token configured; every request will be rejected");
    }

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
