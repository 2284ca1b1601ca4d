// src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use portfolio_api::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_api=info,tower_http=info".into()),
        )
        .init();

    let port = server::port_from_env();
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;

    println!("✅ PORT={port}, using {addr}");
    println!("🚀 Backend listening at http://localhost:{port}");

    server::serve(listener).await?;
    Ok(())
}
