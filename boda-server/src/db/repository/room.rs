//! Room Repository

use sqlx::SqlitePool;

use super::RepoResult;
use crate::db::models::{Room, RoomCreate, RoomUpdate};

#[derive(Clone)]
pub struct RoomRepository {
    pool: SqlitePool,
}

impl RoomRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Room>> {
        let rooms = sqlx::query_as::<_, Room>(
            "SELECT * FROM habitaciones ORDER BY nombre",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rooms)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Room>> {
        let room = sqlx::query_as::<_, Room>("SELECT * FROM habitaciones WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(room)
    }

    pub async fn create(&self, data: RoomCreate) -> RepoResult<i64> {
        let result = sqlx::query(
            "INSERT INTO habitaciones (nombre, precio, capacidad, cupos_disponibles) VALUES (?, ?, ?, ?)",
        )
        .bind(&data.nombre)
        .bind(data.precio)
        .bind(data.capacidad)
        .bind(data.cupos_disponibles)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update(&self, id: i64, data: RoomUpdate) -> RepoResult<u64> {
        let result = sqlx::query(
            "UPDATE habitaciones SET nombre = ?, precio = ?, capacidad = ?, cupos_disponibles = ? WHERE id = ?",
        )
        .bind(&data.nombre)
        .bind(data.precio)
        .bind(data.capacidad)
        .bind(data.cupos_disponibles)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Total bookable slots across all rooms
    pub async fn total_slots(&self) -> RepoResult<i64> {
        let total: i64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(cupos_disponibles), 0) FROM habitaciones")
                .fetch_one(&self.pool)
                .await?;
        Ok(total)
    }

    /// Number of guests currently assigned to the room. Deletion is blocked
    /// while this is non-zero.
    pub async fn assigned_guest_count(&self, id: i64) -> RepoResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM invitados WHERE habitacion_id = ?")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    pub async fn delete(&self, id: i64) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM habitaciones WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
