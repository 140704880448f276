//! Pool-backed reconciliation
//!
//! `reconcile` recomputes one guest, `reconcile_all` refreshes every guest
//! for the listing endpoints. Both persist the derived status back onto the
//! guest row; the pending balance is recomputed on every read and never
//! stored on the guest.

use sqlx::SqlitePool;

use super::{Balance, compute_status, unassigned_balance};
use crate::db::models::GuestWithBalance;
use crate::db::repository::{GuestRepository, RepoError, RepoResult};

#[derive(Clone)]
pub struct Reconciler {
    guests: GuestRepository,
}

impl Reconciler {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            guests: GuestRepository::new(pool),
        }
    }

    fn derive(row: &GuestWithBalance) -> Balance {
        match row.habitacion_precio {
            Some(precio) => compute_status(precio, row.total_pagado),
            None => unassigned_balance(row.total_pagado),
        }
    }

    /// Recompute one guest's `{status, pending balance}` from raw payment
    /// history and persist the status. Idempotent: with an unchanged payment
    /// history, repeated calls produce the same outcome and only rewrite the
    /// same status value.
    pub async fn reconcile(&self, invitado_id: i64) -> RepoResult<Balance> {
        let row = self
            .guests
            .find_with_balance(invitado_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Invitado {invitado_id} no existe")))?;

        let balance = Self::derive(&row);
        self.guests
            .set_estado_pago(invitado_id, balance.estado.as_str())
            .await?;
        Ok(balance)
    }

    /// Recompute every guest, persisting each status, and return the rows
    /// with the fresh values filled in. Used by the guest listing so it
    /// always reflects current truth even when historical writes lagged.
    pub async fn reconcile_all(&self) -> RepoResult<Vec<GuestWithBalance>> {
        let mut rows = self.guests.list_with_balances().await?;

        for row in &mut rows {
            let balance = Self::derive(row);
            self.guests
                .set_estado_pago(row.id, balance.estado.as_str())
                .await?;
            row.estado_pago = balance.estado.as_str().to_string();
            row.saldo_pendiente = balance.saldo_pendiente;
        }

        Ok(rows)
    }

    /// Recompute all guests assigned to a room. Applied after a room price
    /// change so persisted statuses keep matching the invariant.
    pub async fn reconcile_room(&self, habitacion_id: i64) -> RepoResult<()> {
        for invitado_id in self.guests.ids_by_room(habitacion_id).await? {
            self.reconcile(invitado_id).await?;
        }
        Ok(())
    }

    /// Pending-balance snapshot for a payment about to be recorded: the
    /// balance that will remain once `monto` is added to the paid total.
    pub async fn snapshot_after_payment(
        &self,
        invitado_id: i64,
        monto: f64,
    ) -> RepoResult<f64> {
        let row = self
            .guests
            .find_with_balance(invitado_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Invitado {invitado_id} no existe")))?;

        let total = row.total_pagado + monto;
        Ok(match row.habitacion_precio {
            Some(precio) => compute_status(precio, total).saldo_pendiente,
            None => 0.0,
        })
    }
}
