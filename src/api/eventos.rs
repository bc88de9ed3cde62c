// Evento CRUD and copy HTTP routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::common::ErrorResponse;
use super::validation;
use crate::domain::Evento;
use crate::services::EventoService;
use crate::storage::StorageBackend;

/// Request to create a new event.
///
/// Timestamps are strings on purpose: they are parsed by the validation
/// layer so a bad value turns into a 400, not a body-extraction error.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateEventoRequest {
    /// Required, non-empty.
    #[schema(example = "Reunión de equipo")]
    pub titulo: Option<String>,
    #[schema(example = "Sala 3, traer portátil")]
    pub descripcion: Option<String>,
    /// Required ISO-8601 timestamp.
    #[schema(example = "2024-01-15T10:30:00")]
    pub fecha_inicio: Option<String>,
    /// Required ISO-8601 timestamp.
    #[schema(example = "2024-01-15T11:30:00")]
    pub fecha_fin: Option<String>,
    /// 7-character hex color, defaults to `#3788d8`.
    #[schema(example = "#3788d8")]
    pub color: Option<String>,
    pub completado: Option<bool>,
}

/// Request to update an event. Only provided fields will be updated.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateEventoRequest {
    #[schema(example = "Reunión (pospuesta)")]
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    #[schema(example = "2024-01-16T10:30:00")]
    pub fecha_inicio: Option<String>,
    #[schema(example = "2024-01-16T11:30:00")]
    pub fecha_fin: Option<String>,
    #[schema(example = "#10b981")]
    pub color: Option<String>,
    pub completado: Option<bool>,
}

/// Request to copy events onto a new date, optionally repeated weekly.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CopiarEventosRequest {
    /// Ids of the source events; unknown ids are skipped silently.
    #[serde(default)]
    #[schema(example = json!([1, 2]))]
    pub eventos_ids: Vec<i64>,
    /// Start timestamp the copies are placed at. Required.
    #[schema(example = "2024-01-22T00:00:00")]
    pub fecha_destino: Option<String>,
    /// How many consecutive weeks to fill (1 = just the target week).
    #[schema(example = 2)]
    pub repetir_semanas: Option<u32>,
}

/// App state for eventos routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventoService>,
}

impl AppState {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self {
            service: Arc::new(EventoService::new(db)),
        }
    }
}

/// Create eventos routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/eventos", get(list_eventos).post(create_evento))
        .route(
            "/api/eventos/{id}",
            put(update_evento).delete(delete_evento),
        )
        .route("/api/eventos/copiar", post(copiar_eventos))
        .with_state(state)
}

/// GET /api/eventos - List all events
#[utoipa::path(
    get,
    path = "/api/eventos",
    responses(
        (status = 200, description = "All events, as a bare array", body = Vec<Evento>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "eventos"
)]
pub async fn list_eventos(
    State(state): State<AppState>,
) -> Result<Json<Vec<Evento>>, (StatusCode, Json<ErrorResponse>)> {
    let eventos = state.service.list().await.map_err(|e| {
        tracing::error!("Failed to list eventos: {}", e);
        ErrorResponse::new("Internal server error").into_response(StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    Ok(Json(eventos))
}

/// POST /api/eventos - Create a new event
#[utoipa::path(
    post,
    path = "/api/eventos",
    request_body = CreateEventoRequest,
    responses(
        (status = 201, description = "Event created successfully", body = Evento),
        (status = 400, description = "Missing titulo or malformed timestamp", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "eventos"
)]
pub async fn create_evento(
    State(state): State<AppState>,
    Json(req): Json<CreateEventoRequest>,
) -> Result<(StatusCode, Json<Evento>), (StatusCode, Json<ErrorResponse>)> {
    let input = validation::validate_create_evento(req)?;

    let evento = state.service.create(input).await.map_err(|e| {
        tracing::error!("Failed to create evento: {}", e);
        ErrorResponse::new("Internal server error").into_response(StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    Ok((StatusCode::CREATED, Json(evento)))
}

/// PUT /api/eventos/{id} - Update an event (partial)
#[utoipa::path(
    put,
    path = "/api/eventos/{id}",
    params(
        ("id" = i64, Path, description = "Evento id")
    ),
    request_body = UpdateEventoRequest,
    responses(
        (status = 200, description = "Event updated successfully", body = Evento),
        (status = 400, description = "Malformed field in payload", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "eventos"
)]
pub async fn update_evento(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateEventoRequest>,
) -> Result<Json<Evento>, (StatusCode, Json<ErrorResponse>)> {
    // A missing id wins over a malformed payload
    state
        .service
        .get(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get evento {}: {}", id, e);
            ErrorResponse::new("Internal server error")
                .into_response(StatusCode::INTERNAL_SERVER_ERROR)
        })?
        .ok_or_else(|| ErrorResponse::new("Evento not found").into_response(StatusCode::NOT_FOUND))?;

    let patch = validation::validate_update_evento(req)?;

    let evento = state
        .service
        .update(id, patch)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update evento {}: {}", id, e);
            ErrorResponse::new("Internal server error")
                .into_response(StatusCode::INTERNAL_SERVER_ERROR)
        })?
        .ok_or_else(|| ErrorResponse::new("Evento not found").into_response(StatusCode::NOT_FOUND))?;

    Ok(Json(evento))
}

/// DELETE /api/eventos/{id} - Delete an event
#[utoipa::path(
    delete,
    path = "/api/eventos/{id}",
    params(
        ("id" = i64, Path, description = "Evento id")
    ),
    responses(
        (status = 204, description = "Event deleted successfully"),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "eventos"
)]
pub async fn delete_evento(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let deleted = state.service.delete(id).await.map_err(|e| {
        tracing::error!("Failed to delete evento {}: {}", id, e);
        ErrorResponse::new("Internal server error").into_response(StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ErrorResponse::new("Evento not found").into_response(StatusCode::NOT_FOUND))
    }
}

/// POST /api/eventos/copiar - Copy events to a new date, optionally weekly
#[utoipa::path(
    post,
    path = "/api/eventos/copiar",
    request_body = CopiarEventosRequest,
    responses(
        (status = 201, description = "Created copies, as a bare array", body = Vec<Evento>),
        (status = 400, description = "Missing or malformed fecha_destino", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "eventos"
)]
pub async fn copiar_eventos(
    State(state): State<AppState>,
    Json(req): Json<CopiarEventosRequest>,
) -> Result<(StatusCode, Json<Vec<Evento>>), (StatusCode, Json<ErrorResponse>)> {
    let input = validation::validate_copiar_eventos(req)?;

    let copias = state.service.copiar(input).await.map_err(|e| {
        tracing::error!("Failed to copy eventos: {}", e);
        ErrorResponse::new("Internal server error").into_response(StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    Ok((StatusCode::CREATED, Json(copias)))
}
