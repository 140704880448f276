//! Hotel Repository
//!
//! Single-row upsert, same policy as the wedding configuration.

use sqlx::SqlitePool;

use super::RepoResult;
use crate::db::models::{Hotel, HotelUpsert, hotel::HotelRow};

#[derive(Clone)]
pub struct HotelRepository {
    pool: SqlitePool,
}

impl HotelRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn current(&self) -> RepoResult<Option<Hotel>> {
        let row = sqlx::query_as::<_, HotelRow>("SELECT * FROM hotel WHERE id = 1")
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Hotel::from))
    }

    pub async fn upsert(&self, data: HotelUpsert) -> RepoResult<Hotel> {
        let servicios_json = serde_json::to_string(&data.servicios_incluidos)
            .unwrap_or_else(|_| "[]".to_string());

        let row = sqlx::query_as::<_, HotelRow>(
            r#"
            INSERT INTO hotel (id, nombre, direccion, servicios_incluidos)
            VALUES (1, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                nombre              = excluded.nombre,
                direccion           = excluded.direccion,
                servicios_incluidos = excluded.servicios_incluidos
            RETURNING *
            "#,
        )
        .bind(&data.nombre)
        .bind(&data.direccion)
        .bind(&servicios_json)
        .fetch_one(&self.pool)
        .await?;
        Ok(Hotel::from(row))
    }
}
