// Calendario server
// Decision: single binary serving the API, the static front end and the
// API docs from one router built in the library, so tests exercise the
// exact wiring the server runs.

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use calendario::storage::StorageBackend;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calendario=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("calendario starting...");

    // Initialize storage. The literal value "memory" selects the in-memory
    // backend; anything else is treated as a SQLite URL.
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://calendario.db?mode=rwc".to_string());
    let db = if database_url == "memory" {
        tracing::info!("Using in-memory storage");
        StorageBackend::in_memory()
    } else {
        let backend = StorageBackend::sqlite(&database_url)
            .await
            .context("Failed to open database")?;
        tracing::info!(url = %database_url, "Connected to database");
        backend
    };

    let app = calendario::api::app(Arc::new(db));

    // Load CORS allowed origins from environment (optional)
    // Only needed when the front end is served from a different origin
    // Example: CORS_ALLOWED_ORIGINS="https://calendario.example.com"
    let cors_origins: Vec<HeaderValue> = std::env::var("CORS_ALLOWED_ORIGINS")
        .ok()
        .filter(|s| !s.is_empty())
        .map(|s| s.split(',').filter_map(|s| s.trim().parse().ok()).collect())
        .unwrap_or_default();

    if cors_origins.is_empty() {
        tracing::info!("CORS not configured (same-origin requests only)");
    } else {
        tracing::info!(origins = ?cors_origins, "CORS origins configured");
    }

    // Add CORS layer only if origins are configured
    let app = if !cors_origins.is_empty() {
        app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(cors_origins))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]),
        )
    } else {
        app
    };

    // Add tracing
    let app = app.layer(TraceLayer::new_for_http());

    // Start HTTP server
    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
