mod config;
mod db;
mod nav;
mod routes;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::Database;
use crate::routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jppf_site=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load("site.toml")?;
    info!("Loaded site configuration, {} news entries", config.news.len());

    // Initialize database
    let database_url = std::env::var("DATABASE_URL")
        .ok()
        .or_else(|| config.database_url.clone())
        .unwrap_or_else(|| "sqlite:jppf_site.db?mode=rwc".to_string());
    let db = Database::new(&database_url).await?;
    db.initialize().await?;
    db.sync_news(&config.news).await?;
    info!("Database initialized");

    // Create app state
    let state = Arc::new(AppState { db: Arc::new(db) });

    // Build router
    let app = Router::new()
        .route("/", get(routes::index))
        .route("/quotes", get(routes::quotes))
        .route("/news", get(routes::news))
        .route("/samples/grid-failover", get(routes::grid_failover))
        .route("/health", get(routes::health))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Server starting on http://{}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
