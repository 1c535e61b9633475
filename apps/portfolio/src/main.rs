mod config;
mod contact;
mod content;
mod db;
mod errors;
mod models;
mod render;
mod resume;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::store::{ContactStore, InMemoryContactStore, PgContactStore};
use crate::content::load_bundle;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Content is read once; a bad bundle stops startup here
    let content = load_bundle(config.content_path.as_deref())?;

    let store = build_store(&config).await?;

    if !config.resume_path.is_file() {
        warn!(
            "Resume file {} not found; /api/download-resume will return 404",
            config.resume_path.display()
        );
    }

    let state = AppState {
        store,
        content: Arc::new(content),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Postgres when `DATABASE_URL` is set, otherwise an in-process store.
async fn build_store(config: &Config) -> Result<Arc<dyn ContactStore>> {
    match &config.database_url {
        Some(url) => {
            let store = PgContactStore::new(create_pool(url).await?);
            store.ensure_schema().await?;
            Ok(Arc::new(store))
        }
        None => {
            warn!("DATABASE_URL not set; contact messages are kept in memory only");
            Ok(Arc::new(InMemoryContactStore::new()))
        }
    }
}
