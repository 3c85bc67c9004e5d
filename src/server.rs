use std::net::SocketAddr;

use axum::{Extension, Router, routing::get};
use tracing::info;

use crate::{Res, api, api::SharedCallback};

pub fn router(state: SharedCallback) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)))
}

/// Serves the callback routes on `addr` until the task is aborted.
pub async fn start_api_server(addr: &str, state: SharedCallback) -> Res<()> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|e| format!("Failed to parse server address '{addr}': {e}"))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "callback server listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
