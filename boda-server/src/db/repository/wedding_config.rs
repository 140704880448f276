//! Wedding Configuration Repository
//!
//! The configuration is a single row with fixed id 1. Saving goes through an
//! upsert so concurrent updates can never leave the table empty.

use sqlx::SqlitePool;

use super::RepoResult;
use crate::db::models::{WeddingConfig, WeddingConfigUpsert};

#[derive(Clone)]
pub struct WeddingConfigRepository {
    pool: SqlitePool,
}

impl WeddingConfigRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn current(&self) -> RepoResult<Option<WeddingConfig>> {
        let config = sqlx::query_as::<_, WeddingConfig>(
            "SELECT * FROM configuracion_boda WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(config)
    }

    pub async fn upsert(&self, data: WeddingConfigUpsert) -> RepoResult<WeddingConfig> {
        let config = sqlx::query_as::<_, WeddingConfig>(
            r#"
            INSERT INTO configuracion_boda
                (id, nombre_novia, nombre_novio, fecha_boda, hora_boda, lugar_boda, imagen_portada)
            VALUES (1, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                nombre_novia   = excluded.nombre_novia,
                nombre_novio   = excluded.nombre_novio,
                fecha_boda     = excluded.fecha_boda,
                hora_boda      = excluded.hora_boda,
                lugar_boda     = excluded.lugar_boda,
                imagen_portada = excluded.imagen_portada
            RETURNING *
            "#,
        )
        .bind(&data.nombre_novia)
        .bind(&data.nombre_novio)
        .bind(&data.fecha_boda)
        .bind(&data.hora_boda)
        .bind(&data.lugar_boda)
        .bind(&data.imagen_portada)
        .fetch_one(&self.pool)
        .await?;
        Ok(config)
    }
}
