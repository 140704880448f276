//! Payment Repository
//!
//! Append-only table: inserts and reads, no update or delete interface.

use sqlx::SqlitePool;

use super::RepoResult;
use crate::db::models::{Payment, PaymentCreate, PaymentWithGuest};

#[derive(Clone)]
pub struct PaymentRepository {
    pool: SqlitePool,
}

impl PaymentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Payment>> {
        let payment = sqlx::query_as::<_, Payment>("SELECT * FROM pagos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(payment)
    }

    pub async fn list_by_guest(&self, invitado_id: i64) -> RepoResult<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(
            "SELECT * FROM pagos WHERE invitado_id = ? ORDER BY fecha_pago DESC",
        )
        .bind(invitado_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(payments)
    }

    /// All payments joined with guest name, room price and the live pending
    /// balance (clamped at zero), newest first.
    pub async fn list_all_with_guests(&self) -> RepoResult<Vec<PaymentWithGuest>> {
        let payments = sqlx::query_as::<_, PaymentWithGuest>(
            r#"
            SELECT
                p.id, p.invitado_id, p.monto, p.metodo_pago, p.fecha_pago,
                i.nombre AS invitado_nombre,
                h.precio AS habitacion_precio,
                MAX(COALESCE(h.precio, 0.0) - COALESCE(t.total_pagado, 0.0), 0.0) AS saldo_pendiente
            FROM pagos p
            LEFT JOIN invitados i ON p.invitado_id = i.id
            LEFT JOIN habitaciones h ON i.habitacion_id = h.id
            LEFT JOIN (
                SELECT invitado_id, SUM(monto) AS total_pagado
                FROM pagos
                GROUP BY invitado_id
            ) t ON t.invitado_id = i.id
            ORDER BY p.fecha_pago DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(payments)
    }

    /// Sum of all recorded payments for a guest
    pub async fn total_for_guest(&self, invitado_id: i64) -> RepoResult<f64> {
        let total: f64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(monto), 0.0) FROM pagos WHERE invitado_id = ?",
        )
        .bind(invitado_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    /// Sum of all recorded payments across every guest
    pub async fn total_collected(&self) -> RepoResult<f64> {
        let total: f64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(monto), 0.0) FROM pagos")
                .fetch_one(&self.pool)
                .await?;
        Ok(total)
    }

    /// Insert a payment. `saldo_pendiente` is the pending balance snapshot
    /// computed for the moment right after this payment.
    pub async fn create(&self, data: &PaymentCreate, saldo_pendiente: f64) -> RepoResult<i64> {
        let result = sqlx::query(
            "INSERT INTO pagos (invitado_id, monto, metodo_pago, fecha_pago, saldo_pendiente) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(data.invitado_id)
        .bind(data.monto)
        .bind(&data.metodo_pago)
        .bind(&data.fecha_pago)
        .bind(saldo_pendiente)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }
}
