mod config;
mod routes;
mod singleton;
mod state;
mod store;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::state::AppState;
use crate::store::EventStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Ensure only one instance is running
    let _lock = singleton::acquire_lock()?;

    let config = ServerConfig::from_env()?;
    let store = EventStore::open(&config.data_file)?;
    let state = AppState::new(Arc::new(store));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::events::router())
        .merge(routes::months::router())
        .with_state(state)
        .layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!(
        data_file = %config.data_file.display(),
        "calgrid-server listening on http://{}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
