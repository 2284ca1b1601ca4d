// src/server.rs

use std::env;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::routes;

/// Builds the API router. Unmatched routes get axum's default 404.
pub fn app() -> Router {
    // Very permissive CORS for local dev (tighten for prod)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(routes::health::health))
        .route("/api/hello", get(routes::hello::hello))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Port from the PORT env var, default 4000.
pub fn port_from_env() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(4000)
}

pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    axum::serve(listener, app().into_make_service()).await?;
    Ok(())
}
