// In-memory storage implementation for dev mode and tests
// Decision: Use parking_lot for thread-safe access
// Decision: integer ids allocated from a counter, matching AUTOINCREMENT (first id is 1)
//
// This implementation provides a SQLite-compatible API backed by an in-memory
// HashMap, allowing the server to run without a database file.

use anyhow::Result;
use parking_lot::RwLock;
use std::collections::HashMap;

use super::models::*;

/// In-memory database for dev mode
/// All data is stored in memory and lost on restart
#[derive(Default)]
pub struct InMemoryDatabase {
    eventos: RwLock<HashMap<i64, EventoRow>>,
    next_id: RwLock<i64>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&self) -> i64 {
        let mut next = self.next_id.write();
        *next += 1;
        *next
    }

    pub async fn create_evento(&self, input: CreateEvento) -> Result<EventoRow> {
        let id = self.allocate_id();
        let row = EventoRow {
            id,
            titulo: input.titulo,
            descripcion: input.descripcion,
            fecha_inicio: input.fecha_inicio,
            fecha_fin: input.fecha_fin,
            color: input.color,
            completado: input.completado,
        };
        self.eventos.write().insert(id, row.clone());
        Ok(row)
    }

    pub async fn get_evento(&self, id: i64) -> Result<Option<EventoRow>> {
        Ok(self.eventos.read().get(&id).cloned())
    }

    pub async fn list_eventos(&self) -> Result<Vec<EventoRow>> {
        let mut result: Vec<_> = self.eventos.read().values().cloned().collect();
        result.sort_by_key(|e| e.id);
        Ok(result)
    }

    pub async fn list_eventos_by_ids(&self, ids: &[i64]) -> Result<Vec<EventoRow>> {
        let eventos = self.eventos.read();
        let mut result: Vec<_> = ids
            .iter()
            .filter_map(|id| eventos.get(id).cloned())
            .collect();
        // Same observable order as the SQL backend
        result.sort_by_key(|e| e.id);
        result.dedup_by_key(|e| e.id);
        Ok(result)
    }

    pub async fn update_evento(&self, id: i64, input: UpdateEvento) -> Result<Option<EventoRow>> {
        let mut eventos = self.eventos.write();
        if let Some(evento) = eventos.get_mut(&id) {
            if let Some(titulo) = input.titulo {
                evento.titulo = titulo;
            }
            if let Some(descripcion) = input.descripcion {
                evento.descripcion = descripcion;
            }
            if let Some(fecha_inicio) = input.fecha_inicio {
                evento.fecha_inicio = fecha_inicio;
            }
            if let Some(fecha_fin) = input.fecha_fin {
                evento.fecha_fin = fecha_fin;
            }
            if let Some(color) = input.color {
                evento.color = color;
            }
            if let Some(completado) = input.completado {
                evento.completado = completado;
            }
            return Ok(Some(evento.clone()));
        }
        Ok(None)
    }

    pub async fn delete_evento(&self, id: i64) -> Result<bool> {
        Ok(self.eventos.write().remove(&id).is_some())
    }
}
