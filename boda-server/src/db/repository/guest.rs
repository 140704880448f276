//! Guest Repository
//!
//! The balance queries join room price and the per-guest payment totals; the
//! stored `estado_pago` column in those rows is the last persisted cache and
//! is refreshed by the reconciliation engine before it reaches the wire.

use sqlx::SqlitePool;

use super::RepoResult;
use crate::db::models::{Guest, GuestCreate, GuestUpdate, GuestWithBalance};

const BALANCE_SELECT: &str = r#"
    SELECT
        i.id, i.nombre, i.contacto, i.habitacion_id, i.estado_pago,
        h.nombre AS habitacion_nombre,
        h.precio AS habitacion_precio,
        COALESCE(p.total_pagado, 0.0) AS total_pagado,
        MAX(COALESCE(h.precio, 0.0) - COALESCE(p.total_pagado, 0.0), 0.0) AS saldo_pendiente
    FROM invitados i
    LEFT JOIN habitaciones h ON i.habitacion_id = h.id
    LEFT JOIN (
        SELECT invitado_id, SUM(monto) AS total_pagado
        FROM pagos
        GROUP BY invitado_id
    ) p ON p.invitado_id = i.id
"#;

#[derive(Clone)]
pub struct GuestRepository {
    pool: SqlitePool,
}

impl GuestRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Guest>> {
        let guest = sqlx::query_as::<_, Guest>("SELECT * FROM invitados WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(guest)
    }

    pub async fn list_with_balances(&self) -> RepoResult<Vec<GuestWithBalance>> {
        let query = format!("{BALANCE_SELECT} ORDER BY i.nombre");
        let guests = sqlx::query_as::<_, GuestWithBalance>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(guests)
    }

    pub async fn find_with_balance(&self, id: i64) -> RepoResult<Option<GuestWithBalance>> {
        let query = format!("{BALANCE_SELECT} WHERE i.id = ?");
        let guest = sqlx::query_as::<_, GuestWithBalance>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(guest)
    }

    pub async fn create(&self, data: GuestCreate) -> RepoResult<i64> {
        let result = sqlx::query(
            "INSERT INTO invitados (nombre, contacto, habitacion_id) VALUES (?, ?, ?)",
        )
        .bind(&data.nombre)
        .bind(&data.contacto)
        .bind(data.habitacion_id)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update(&self, id: i64, data: GuestUpdate) -> RepoResult<u64> {
        let result = sqlx::query(
            "UPDATE invitados SET nombre = ?, contacto = ?, habitacion_id = ? WHERE id = ?",
        )
        .bind(&data.nombre)
        .bind(&data.contacto)
        .bind(data.habitacion_id)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Persist a recomputed payment status onto the guest row
    pub async fn set_estado_pago(&self, id: i64, estado: &str) -> RepoResult<()> {
        sqlx::query("UPDATE invitados SET estado_pago = ? WHERE id = ?")
            .bind(estado)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Ids of all guests assigned to the given room
    pub async fn ids_by_room(&self, habitacion_id: i64) -> RepoResult<Vec<i64>> {
        let ids: Vec<i64> =
            sqlx::query_scalar("SELECT id FROM invitados WHERE habitacion_id = ?")
                .bind(habitacion_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(ids)
    }

    /// Delete a guest and their payment history. The payment delete runs
    /// first; a crash in between leaves a guest without payments, which the
    /// next reconciliation reports as plain Pendiente.
    pub async fn delete_cascade(&self, id: i64) -> RepoResult<u64> {
        sqlx::query("DELETE FROM pagos WHERE invitado_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let result = sqlx::query("DELETE FROM invitados WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
