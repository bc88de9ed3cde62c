// Static front end and PWA asset routes
//
// The HTML shell, manifest and service worker get explicit routes so their
// content types come out right; scripts and icons are served from disk.

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{Html, Response},
    routing::get,
    Json, Router,
};
use tower_http::services::ServeDir;

use super::common::ErrorResponse;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/manifest.json", get(manifest))
        .route("/static/sw.js", get(service_worker))
        .nest_service("/static/js", ServeDir::new("static/js"))
        .nest_service("/static/icons", ServeDir::new("static/icons"))
}

async fn index() -> Result<Html<String>, (StatusCode, Json<ErrorResponse>)> {
    let html = tokio::fs::read_to_string("static/index.html")
        .await
        .map_err(|e| {
            tracing::error!("Failed to read static/index.html: {}", e);
            ErrorResponse::new("Internal server error")
                .into_response(StatusCode::INTERNAL_SERVER_ERROR)
        })?;

    Ok(Html(html))
}

async fn manifest() -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    static_file("static/manifest.json", "application/manifest+json").await
}

async fn service_worker() -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    static_file("static/sw.js", "application/javascript").await
}

async fn static_file(
    path: &str,
    content_type: &'static str,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let contents = tokio::fs::read(path).await.map_err(|e| {
        tracing::error!("Failed to read {}: {}", path, e);
        ErrorResponse::new("Internal server error").into_response(StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(contents))
        .unwrap())
}
