//! Payment model (`pagos` table)
//!
//! Payments are append-only: there is no update or delete path except the
//! cascade when a guest is removed. `saldo_pendiente` is a snapshot of the
//! guest's pending balance immediately after the payment was recorded; the
//! live value is always recomputed from the sum of payments.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: i64,
    pub invitado_id: i64,
    pub monto: f64,
    pub metodo_pago: String,
    pub fecha_pago: String,
    pub saldo_pendiente: f64,
}

/// Payment joined with guest and room data, as listed on the wire
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PaymentWithGuest {
    pub id: i64,
    pub invitado_id: i64,
    pub monto: f64,
    pub metodo_pago: String,
    pub fecha_pago: String,
    pub invitado_nombre: Option<String>,
    pub habitacion_precio: Option<f64>,
    pub saldo_pendiente: f64,
}

/// Create payload
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentCreate {
    pub invitado_id: i64,
    pub monto: f64,
    pub metodo_pago: String,
    pub fecha_pago: String,
}
