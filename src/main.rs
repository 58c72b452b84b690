use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington::config::ServerConfig;
use mergington::database::ActivityStore;
use mergington::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    // 2. Seed the in-memory activity directory
    let config = ServerConfig::from_env();
    let store = ActivityStore::seeded();

    // 3. Build the application
    let app = web::build_router(store, &config.static_dir);

    // 4. Start the server (with fallback port)
    let addr = config.bind_addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!(
        build = env!("MERGINGTON_BUILD_ID"),
        static_dir = %config.static_dir.display(),
        "Server running on http://{}",
        bound_addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
