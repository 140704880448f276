//! Guest model (`invitados` table)
//!
//! `estado_pago` is derived state: it is recomputed from the payment history
//! on every listing and persisted back opportunistically. The stored value
//! is only a cache of the last reconciliation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Guest {
    pub id: i64,
    pub nombre: String,
    pub contacto: String,
    pub habitacion_id: Option<i64>,
    pub estado_pago: String,
}

/// Guest joined with room data and live payment totals, as listed on the wire
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GuestWithBalance {
    pub id: i64,
    pub nombre: String,
    pub contacto: String,
    pub habitacion_id: Option<i64>,
    pub estado_pago: String,
    pub habitacion_nombre: Option<String>,
    pub habitacion_precio: Option<f64>,
    pub total_pagado: f64,
    pub saldo_pendiente: f64,
}

/// Create payload
#[derive(Debug, Clone, Deserialize)]
pub struct GuestCreate {
    pub nombre: String,
    pub contacto: String,
    pub habitacion_id: Option<i64>,
}

/// Update payload
#[derive(Debug, Clone, Deserialize)]
pub struct GuestUpdate {
    pub nombre: String,
    pub contacto: String,
    pub habitacion_id: Option<i64>,
}
