// Evento service for business logic
//
// Owns defaults and the copy/repeat expansion; the HTTP layer validates and
// parses payloads before calling in, storage stays a dumb row store.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDateTime};

use crate::domain::{Evento, DEFAULT_COLOR};
use crate::storage::{CreateEvento, EventoRow, StorageBackend, UpdateEvento};

/// Validated input for creating an event. Optional fields are filled with
/// their defaults here, not by the caller.
#[derive(Debug, Clone)]
pub struct NuevoEvento {
    pub titulo: String,
    pub descripcion: Option<String>,
    pub fecha_inicio: NaiveDateTime,
    pub fecha_fin: NaiveDateTime,
    pub color: Option<String>,
    pub completado: Option<bool>,
}

/// Validated input for the copy/repeat operation.
#[derive(Debug, Clone)]
pub struct CopiarEventos {
    pub eventos_ids: Vec<i64>,
    pub fecha_destino: NaiveDateTime,
    pub repetir_semanas: u32,
}

pub struct EventoService {
    db: Arc<StorageBackend>,
}

impl EventoService {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: NuevoEvento) -> Result<Evento> {
        let row = self
            .db
            .create_evento(CreateEvento {
                titulo: input.titulo,
                descripcion: input.descripcion.unwrap_or_default(),
                fecha_inicio: input.fecha_inicio,
                fecha_fin: input.fecha_fin,
                color: input.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
                completado: input.completado.unwrap_or(false),
            })
            .await?;

        Ok(Self::row_to_evento(row))
    }

    pub async fn get(&self, id: i64) -> Result<Option<Evento>> {
        let row = self.db.get_evento(id).await?;
        Ok(row.map(Self::row_to_evento))
    }

    pub async fn list(&self) -> Result<Vec<Evento>> {
        let rows = self.db.list_eventos().await?;
        Ok(rows.into_iter().map(Self::row_to_evento).collect())
    }

    pub async fn update(&self, id: i64, patch: UpdateEvento) -> Result<Option<Evento>> {
        let row = self.db.update_evento(id, patch).await?;
        Ok(row.map(Self::row_to_evento))
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.db.delete_evento(id).await
    }

    /// Clone the given events onto `fecha_destino`, repeating the whole set
    /// at weekly offsets.
    ///
    /// Ids with no stored event are skipped without error, so the result
    /// holds exactly `repetir_semanas * found` events: outer order by week,
    /// inner order as the store returned the sources. Every copy keeps its
    /// source's duration and starts with `completado = false`. Computed
    /// dates that fall outside the supported range are errors.
    pub async fn copiar(&self, input: CopiarEventos) -> Result<Vec<Evento>> {
        let originales = self.db.list_eventos_by_ids(&input.eventos_ids).await?;
        if originales.is_empty() {
            return Ok(Vec::new());
        }

        let mut copias = Vec::new();
        for semana in 0..input.repetir_semanas {
            let desplazamiento = Duration::days(i64::from(semana) * 7);
            let fecha_inicio = input
                .fecha_destino
                .checked_add_signed(desplazamiento)
                .context("Copy start date out of range")?;
            for original in &originales {
                let duracion = original.fecha_fin - original.fecha_inicio;
                let fecha_fin = fecha_inicio
                    .checked_add_signed(duracion)
                    .context("Copy end date out of range")?;
                let row = self
                    .db
                    .create_evento(CreateEvento {
                        titulo: original.titulo.clone(),
                        descripcion: original.descripcion.clone(),
                        fecha_inicio,
                        fecha_fin,
                        color: original.color.clone(),
                        completado: false,
                    })
                    .await?;
                copias.push(Self::row_to_evento(row));
            }
        }

        Ok(copias)
    }

    fn row_to_evento(row: EventoRow) -> Evento {
        Evento {
            id: row.id,
            titulo: row.titulo,
            descripcion: row.descripcion,
            fecha_inicio: row.fecha_inicio,
            fecha_fin: row.fecha_fin,
            color: row.color,
            completado: row.completado,
        }
    }
}
