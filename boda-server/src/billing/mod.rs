//! Payment reconciliation engine
//!
//! Derives each guest's payment status and pending balance from the assigned
//! room price and the sum of their recorded payments, and persists the
//! recomputed status back onto the guest row so plain reads stay close to the
//! truth. The stored status is only a cache: every listing re-runs the
//! derivation, so a stale write from a concurrent payment self-heals on the
//! next read.

mod reconcile;

pub use reconcile::Reconciler;

use serde::{Deserialize, Serialize};

/// Derived payment status of a guest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstadoPago {
    Pendiente,
    Parcial,
    Pagado,
}

impl EstadoPago {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoPago::Pendiente => "Pendiente",
            EstadoPago::Parcial => "Parcial",
            EstadoPago::Pagado => "Pagado",
        }
    }
}

impl std::fmt::Display for EstadoPago {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a reconciliation: derived status plus pending balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Balance {
    pub estado: EstadoPago,
    pub total_pagado: f64,
    pub saldo_pendiente: f64,
}

/// Derive `{status, pending balance}` from a room price and the paid total.
///
/// Overpayment clamps the balance at zero; a negative balance is never
/// surfaced or tracked.
pub fn compute_status(precio: f64, total_pagado: f64) -> Balance {
    let saldo = precio - total_pagado;
    let estado = if saldo <= 0.0 {
        EstadoPago::Pagado
    } else if total_pagado > 0.0 {
        EstadoPago::Parcial
    } else {
        EstadoPago::Pendiente
    };

    Balance {
        estado,
        total_pagado,
        saldo_pendiente: saldo.max(0.0),
    }
}

/// Derivation for a guest with no room assigned: the price is unknown, so
/// the guest stays Pendiente with a zero balance regardless of payments.
pub fn unassigned_balance(total_pagado: f64) -> Balance {
    Balance {
        estado: EstadoPago::Pendiente,
        total_pagado,
        saldo_pendiente: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_payments_is_pendiente() {
        let b = compute_status(500.0, 0.0);
        assert_eq!(b.estado, EstadoPago::Pendiente);
        assert_eq!(b.saldo_pendiente, 500.0);
    }

    #[test]
    fn test_partial_payment() {
        let b = compute_status(500.0, 200.0);
        assert_eq!(b.estado, EstadoPago::Parcial);
        assert_eq!(b.saldo_pendiente, 300.0);
    }

    #[test]
    fn test_exact_payment_is_pagado() {
        let b = compute_status(500.0, 500.0);
        assert_eq!(b.estado, EstadoPago::Pagado);
        assert_eq!(b.saldo_pendiente, 0.0);
    }

    #[test]
    fn test_overpayment_clamps_to_zero() {
        let b = compute_status(500.0, 750.0);
        assert_eq!(b.estado, EstadoPago::Pagado);
        assert_eq!(b.saldo_pendiente, 0.0);
    }

    #[test]
    fn test_smallest_payment_flips_to_parcial() {
        let b = compute_status(500.0, 0.01);
        assert_eq!(b.estado, EstadoPago::Parcial);
    }

    #[test]
    fn test_zero_price_room_is_immediately_pagado() {
        // A free room has nothing pending even before any payment
        let b = compute_status(0.0, 0.0);
        assert_eq!(b.estado, EstadoPago::Pagado);
        assert_eq!(b.saldo_pendiente, 0.0);
    }

    #[test]
    fn test_unassigned_guest_defaults_to_pendiente() {
        let b = unassigned_balance(300.0);
        assert_eq!(b.estado, EstadoPago::Pendiente);
        assert_eq!(b.saldo_pendiente, 0.0);
    }
}
