// Database models (internal, may differ from public DTOs)

use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct EventoRow {
    pub id: i64,
    pub titulo: String,
    pub descripcion: String,
    pub fecha_inicio: NaiveDateTime,
    pub fecha_fin: NaiveDateTime,
    pub color: String,
    pub completado: bool,
}

#[derive(Debug, Clone)]
pub struct CreateEvento {
    pub titulo: String,
    pub descripcion: String,
    pub fecha_inicio: NaiveDateTime,
    pub fecha_fin: NaiveDateTime,
    pub color: String,
    pub completado: bool,
}

/// Partial update: `None` means "leave the column unchanged".
#[derive(Debug, Clone, Default)]
pub struct UpdateEvento {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub fecha_inicio: Option<NaiveDateTime>,
    pub fecha_fin: Option<NaiveDateTime>,
    pub color: Option<String>,
    pub completado: Option<bool>,
}
