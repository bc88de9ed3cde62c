// Input validation for the eventos API
//
// Request DTOs carry timestamps as raw strings so a malformed value becomes
// a 400 with a useful message instead of a body-extraction failure. The
// functions here parse and check payloads, producing the typed inputs the
// service layer takes.

use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use super::common::ErrorResponse;
use super::eventos::{CopiarEventosRequest, CreateEventoRequest, UpdateEventoRequest};
use crate::services::{CopiarEventos, NuevoEvento};
use crate::storage::UpdateEvento;

/// Accepted timestamp shapes: full ISO-8601 (with optional fractional
/// seconds), the minute-precision form browser `datetime-local` inputs
/// send, and their space-separated variants.
const FORMATOS_FECHA: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Validation failure carrying the message returned to the client.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<ValidationError> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: ValidationError) -> Self {
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err.0)))
    }
}

/// Parse a timestamp field. A bare date means midnight.
pub fn parse_fecha(campo: &str, valor: &str) -> Result<NaiveDateTime, ValidationError> {
    for formato in FORMATOS_FECHA {
        if let Ok(fecha) = NaiveDateTime::parse_from_str(valor, formato) {
            return Ok(fecha);
        }
    }
    if let Ok(dia) = NaiveDate::parse_from_str(valor, "%Y-%m-%d") {
        if let Some(fecha) = dia.and_hms_opt(0, 0, 0) {
            return Ok(fecha);
        }
    }

    tracing::warn!("Rejected {}: not a parseable timestamp: {:?}", campo, valor);
    Err(ValidationError::new(format!(
        "{} must be an ISO-8601 timestamp, got {:?}",
        campo, valor
    )))
}

fn fecha_requerida(campo: &str, valor: Option<&str>) -> Result<NaiveDateTime, ValidationError> {
    match valor {
        Some(v) => parse_fecha(campo, v),
        None => {
            tracing::warn!("Rejected request: {} is missing", campo);
            Err(ValidationError::new(format!("{} is required", campo)))
        }
    }
}

fn titulo_no_vacio(titulo: Option<String>) -> Result<String, ValidationError> {
    match titulo {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => {
            tracing::warn!("Rejected request: titulo is missing or empty");
            Err(ValidationError::new("titulo is required"))
        }
    }
}

pub fn validate_create_evento(req: CreateEventoRequest) -> Result<NuevoEvento, ValidationError> {
    Ok(NuevoEvento {
        titulo: titulo_no_vacio(req.titulo)?,
        descripcion: req.descripcion,
        fecha_inicio: fecha_requerida("fecha_inicio", req.fecha_inicio.as_deref())?,
        fecha_fin: fecha_requerida("fecha_fin", req.fecha_fin.as_deref())?,
        color: req.color,
        completado: req.completado,
    })
}

pub fn validate_update_evento(req: UpdateEventoRequest) -> Result<UpdateEvento, ValidationError> {
    let titulo = match req.titulo {
        Some(t) => Some(titulo_no_vacio(Some(t))?),
        None => None,
    };

    Ok(UpdateEvento {
        titulo,
        descripcion: req.descripcion,
        fecha_inicio: req
            .fecha_inicio
            .as_deref()
            .map(|v| parse_fecha("fecha_inicio", v))
            .transpose()?,
        fecha_fin: req
            .fecha_fin
            .as_deref()
            .map(|v| parse_fecha("fecha_fin", v))
            .transpose()?,
        color: req.color,
        completado: req.completado,
    })
}

pub fn validate_copiar_eventos(
    req: CopiarEventosRequest,
) -> Result<CopiarEventos, ValidationError> {
    Ok(CopiarEventos {
        eventos_ids: req.eventos_ids,
        fecha_destino: fecha_requerida("fecha_destino", req.fecha_destino.as_deref())?,
        repetir_semanas: req.repetir_semanas.unwrap_or(1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fecha(s: &str) -> NaiveDateTime {
        parse_fecha("t", s).unwrap()
    }

    #[test]
    fn parses_full_iso8601_timestamps() {
        assert_eq!(
            fecha("2024-01-15T10:30:00"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap()
        );
        // Fractional seconds survive
        let con_fraccion = fecha("2024-01-15T10:30:00.500");
        assert_eq!(con_fraccion.format("%H:%M:%S%.3f").to_string(), "10:30:00.500");
    }

    #[test]
    fn parses_datetime_local_minute_precision() {
        assert_eq!(fecha("2024-01-15T10:30"), fecha("2024-01-15T10:30:00"));
    }

    #[test]
    fn parses_space_separated_and_bare_date() {
        assert_eq!(fecha("2024-01-15 10:30:00"), fecha("2024-01-15T10:30:00"));
        assert_eq!(fecha("2024-01-15 10:30"), fecha("2024-01-15T10:30:00"));
        assert_eq!(fecha("2024-01-15"), fecha("2024-01-15T00:00:00"));
    }

    #[test]
    fn rejects_garbage_timestamps() {
        assert!(parse_fecha("fecha_inicio", "mañana").is_err());
        assert!(parse_fecha("fecha_inicio", "15/01/2024").is_err());
        assert!(parse_fecha("fecha_inicio", "").is_err());
    }

    fn create_req() -> CreateEventoRequest {
        CreateEventoRequest {
            titulo: Some("Reunión".to_string()),
            descripcion: None,
            fecha_inicio: Some("2024-01-15T10:00".to_string()),
            fecha_fin: Some("2024-01-15T11:00".to_string()),
            color: None,
            completado: None,
        }
    }

    #[test]
    fn create_accepts_minimal_payload() {
        let input = validate_create_evento(create_req()).unwrap();
        assert_eq!(input.titulo, "Reunión");
        assert_eq!(input.fecha_inicio, fecha("2024-01-15T10:00:00"));
        assert!(input.descripcion.is_none());
        assert!(input.color.is_none());
    }

    #[test]
    fn create_rejects_missing_or_blank_titulo() {
        let mut req = create_req();
        req.titulo = None;
        let err = validate_create_evento(req).unwrap_err();
        assert_eq!(err.message(), "titulo is required");

        let mut req = create_req();
        req.titulo = Some("   ".to_string());
        assert!(validate_create_evento(req).is_err());
    }

    #[test]
    fn create_rejects_missing_or_malformed_fechas() {
        let mut req = create_req();
        req.fecha_inicio = None;
        let err = validate_create_evento(req).unwrap_err();
        assert_eq!(err.message(), "fecha_inicio is required");

        let mut req = create_req();
        req.fecha_fin = Some("ayer".to_string());
        assert!(validate_create_evento(req).is_err());
    }

    #[test]
    fn update_maps_only_present_fields() {
        let patch = validate_update_evento(UpdateEventoRequest {
            titulo: None,
            descripcion: Some("nueva".to_string()),
            fecha_inicio: None,
            fecha_fin: Some("2024-02-01T09:00".to_string()),
            color: None,
            completado: Some(true),
        })
        .unwrap();

        assert!(patch.titulo.is_none());
        assert_eq!(patch.descripcion.as_deref(), Some("nueva"));
        assert!(patch.fecha_inicio.is_none());
        assert_eq!(patch.fecha_fin, Some(fecha("2024-02-01T09:00:00")));
        assert_eq!(patch.completado, Some(true));
    }

    #[test]
    fn update_rejects_blank_titulo_and_malformed_fecha() {
        let req = UpdateEventoRequest {
            titulo: Some(String::new()),
            descripcion: None,
            fecha_inicio: None,
            fecha_fin: None,
            color: None,
            completado: None,
        };
        assert!(validate_update_evento(req).is_err());

        let req = UpdateEventoRequest {
            titulo: None,
            descripcion: None,
            fecha_inicio: Some("no-es-fecha".to_string()),
            fecha_fin: None,
            color: None,
            completado: None,
        };
        assert!(validate_update_evento(req).is_err());
    }

    #[test]
    fn copiar_defaults_to_one_week() {
        let input = validate_copiar_eventos(CopiarEventosRequest {
            eventos_ids: vec![1, 2],
            fecha_destino: Some("2024-03-04T00:00:00".to_string()),
            repetir_semanas: None,
        })
        .unwrap();

        assert_eq!(input.repetir_semanas, 1);
        assert_eq!(input.eventos_ids, vec![1, 2]);
    }

    #[test]
    fn copiar_requires_parseable_fecha_destino() {
        let req = CopiarEventosRequest {
            eventos_ids: vec![1],
            fecha_destino: None,
            repetir_semanas: Some(2),
        };
        assert!(validate_copiar_eventos(req).is_err());

        let req = CopiarEventosRequest {
            eventos_ids: vec![1],
            fecha_destino: Some("semana que viene".to_string()),
            repetir_semanas: Some(2),
        };
        assert!(validate_copiar_eventos(req).is_err());
    }
}
