mod cors;
pub mod handlers;
mod types;

pub use cors::cors_layer;
pub use handlers::AppState;

use crate::{Result, config::Config, llm::GatewayClient};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub const ADVICE_PATH: &str = "/expert-advice";
pub const COMPOSITION_PATH: &str = "/expert-composition";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(ADVICE_PATH, post(handlers::expert_advice))
        .route(COMPOSITION_PATH, post(handlers::expert_composition))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize the gateway client
    let llm = GatewayClient::new(config.llm.clone());
    if !llm.has_api_key() {
        warn!(
            "{} is not set, relay calls will fail until it is configured",
            config.llm.api_key_env
        );
    }
    info!("Using model {} at {}", llm.model(), config.llm.base_url);

    let app = router(AppState { llm: Arc::new(llm) });

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
