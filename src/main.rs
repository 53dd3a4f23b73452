//! gazette-api server entry point.
//!
//! Starts the Axum HTTP server exposing the publications REST resource
//! over PostgreSQL.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use gazette_collector::api;
use gazette_collector::app_state::AppState;
use gazette_collector::config::ServerConfig;
use gazette_collector::persistence::{PostgresStore, PublicationStore};
use gazette_collector::service::PublicationService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ServerConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting gazette-api");

    // Connect to the database and apply migrations
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(std::time::Duration::from_secs(
            config.database_connect_timeout_secs,
        ))
        .connect(&config.database_url)
        .await?;
    let store = PostgresStore::new(pool);
    store.migrate().await?;

    // Build application state
    let app_state = AppState {
        publications: Arc::new(PublicationService::new(
            Arc::new(store) as Arc<dyn PublicationStore>
        )),
    };

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
