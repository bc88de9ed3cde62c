// Storage backend abstraction
// Decision: Use enum dispatch for simplicity over trait objects
//
// This module provides a unified StorageBackend enum that can work with
// either SQLite (durable file) or in-memory (dev mode) storage.

use anyhow::Result;

use super::memory::InMemoryDatabase;
use super::models::*;
use super::repositories::Database;

/// Storage backend that can be either SQLite or in-memory
#[derive(Clone)]
pub enum StorageBackend {
    /// SQLite database file (default)
    Sqlite(Database),
    /// In-memory database (dev mode)
    InMemory(std::sync::Arc<InMemoryDatabase>),
}

impl StorageBackend {
    /// Create a SQLite storage backend from a database URL
    pub async fn sqlite(database_url: &str) -> Result<Self> {
        let db = Database::from_url(database_url).await?;
        Ok(Self::Sqlite(db))
    }

    /// Create an in-memory storage backend
    pub fn in_memory() -> Self {
        Self::InMemory(std::sync::Arc::new(InMemoryDatabase::new()))
    }

    /// Check if this is dev mode (in-memory)
    pub fn is_dev_mode(&self) -> bool {
        matches!(self, Self::InMemory(_))
    }

    pub async fn create_evento(&self, input: CreateEvento) -> Result<EventoRow> {
        match self {
            Self::Sqlite(db) => db.create_evento(input).await,
            Self::InMemory(db) => db.create_evento(input).await,
        }
    }

    pub async fn get_evento(&self, id: i64) -> Result<Option<EventoRow>> {
        match self {
            Self::Sqlite(db) => db.get_evento(id).await,
            Self::InMemory(db) => db.get_evento(id).await,
        }
    }

    pub async fn list_eventos(&self) -> Result<Vec<EventoRow>> {
        match self {
            Self::Sqlite(db) => db.list_eventos().await,
            Self::InMemory(db) => db.list_eventos().await,
        }
    }

    pub async fn list_eventos_by_ids(&self, ids: &[i64]) -> Result<Vec<EventoRow>> {
        match self {
            Self::Sqlite(db) => db.list_eventos_by_ids(ids).await,
            Self::InMemory(db) => db.list_eventos_by_ids(ids).await,
        }
    }

    pub async fn update_evento(&self, id: i64, input: UpdateEvento) -> Result<Option<EventoRow>> {
        match self {
            Self::Sqlite(db) => db.update_evento(id, input).await,
            Self::InMemory(db) => db.update_evento(id, input).await,
        }
    }

    pub async fn delete_evento(&self, id: i64) -> Result<bool> {
        match self {
            Self::Sqlite(db) => db.delete_evento(id).await,
            Self::InMemory(db) => db.delete_evento(id).await,
        }
    }
}
