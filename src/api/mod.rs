// HTTP API routes
//
// This module contains all HTTP route handlers for the public API plus the
// static front end. Each submodule handles one concern with its own state.

pub mod common;
pub mod eventos;
pub mod frontend;
pub mod validation;

// Re-export common types
pub use common::ErrorResponse;

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;
use crate::storage::StorageBackend;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    storage: &'static str,
}

async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: state.storage,
    })
}

/// State for health endpoint
#[derive(Clone)]
struct HealthState {
    storage: &'static str,
}

/// Build the full application router: eventos API, health, static front
/// end and Swagger UI. Shared by the server binary and the tests.
pub fn app(db: Arc<StorageBackend>) -> Router {
    let storage = if db.is_dev_mode() { "memory" } else { "sqlite" };
    let eventos_state = eventos::AppState::new(db);
    let health_state = HealthState { storage };

    Router::new()
        .merge(eventos::routes(eventos_state))
        .route("/health", get(health).with_state(health_state))
        .merge(frontend::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
}
