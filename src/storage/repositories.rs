// Repository layer for database operations
// Decision: schema is a single table created at pool construction, no migration step

use std::str::FromStr;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};

use super::models::*;

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating the file and schema if missing) from a sqlite URL.
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;
        let db = Self { pool };
        db.init_schema().await?;
        Ok(db)
    }

    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS eventos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                titulo TEXT NOT NULL,
                descripcion TEXT NOT NULL DEFAULT '',
                fecha_inicio TEXT NOT NULL,
                fecha_fin TEXT NOT NULL,
                color TEXT NOT NULL DEFAULT '#3788d8',
                completado INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ============================================
    // Eventos
    // ============================================

    pub async fn create_evento(&self, input: CreateEvento) -> Result<EventoRow> {
        let row = sqlx::query_as::<_, EventoRow>(
            r#"
            INSERT INTO eventos (titulo, descripcion, fecha_inicio, fecha_fin, color, completado)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, titulo, descripcion, fecha_inicio, fecha_fin, color, completado
            "#,
        )
        .bind(&input.titulo)
        .bind(&input.descripcion)
        .bind(input.fecha_inicio)
        .bind(input.fecha_fin)
        .bind(&input.color)
        .bind(input.completado)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_evento(&self, id: i64) -> Result<Option<EventoRow>> {
        let row = sqlx::query_as::<_, EventoRow>(
            r#"
            SELECT id, titulo, descripcion, fecha_inicio, fecha_fin, color, completado
            FROM eventos
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_eventos(&self) -> Result<Vec<EventoRow>> {
        let rows = sqlx::query_as::<_, EventoRow>(
            r#"
            SELECT id, titulo, descripcion, fecha_inicio, fecha_fin, color, completado
            FROM eventos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Fetch only the rows whose id is in `ids`; unknown ids contribute nothing.
    pub async fn list_eventos_by_ids(&self, ids: &[i64]) -> Result<Vec<EventoRow>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = sqlx::QueryBuilder::new(
            "SELECT id, titulo, descripcion, fecha_inicio, fecha_fin, color, completado \
             FROM eventos WHERE id IN (",
        );
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY id ASC");

        let rows = builder
            .build_query_as::<EventoRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn update_evento(&self, id: i64, input: UpdateEvento) -> Result<Option<EventoRow>> {
        let row = sqlx::query_as::<_, EventoRow>(
            r#"
            UPDATE eventos
            SET
                titulo = COALESCE(?, titulo),
                descripcion = COALESCE(?, descripcion),
                fecha_inicio = COALESCE(?, fecha_inicio),
                fecha_fin = COALESCE(?, fecha_fin),
                color = COALESCE(?, color),
                completado = COALESCE(?, completado)
            WHERE id = ?
            RETURNING id, titulo, descripcion, fecha_inicio, fecha_fin, color, completado
            "#,
        )
        .bind(&input.titulo)
        .bind(&input.descripcion)
        .bind(input.fecha_inicio)
        .bind(input.fecha_fin)
        .bind(&input.color)
        .bind(input.completado)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete_evento(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM eventos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
