//! Dashboard Statistics Handler

use axum::{Json, extract::State};
use serde::Serialize;

use crate::billing::Reconciler;
use crate::core::ServerState;
use crate::db::repository::{PaymentRepository, RoomRepository};
use crate::utils::AppResult;

/// Aggregate statistics for the dashboard landing page
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    #[serde(rename = "totalInvitados")]
    pub total_invitados: usize,
    #[serde(rename = "ocupacionHotel")]
    pub ocupacion_hotel: i64,
    #[serde(rename = "totalRecaudado")]
    pub total_recaudado: f64,
    #[serde(rename = "totalPendiente")]
    pub total_pendiente: f64,
    #[serde(rename = "invitadosPagados")]
    pub invitados_pagados: usize,
    #[serde(rename = "invitadosParciales")]
    pub invitados_parciales: usize,
    #[serde(rename = "invitadosPendientes")]
    pub invitados_pendientes: usize,
}

/// GET /api/dashboard/stats
///
/// Statuses are reconciled first so the counts reflect the live payment
/// history; the independent aggregates run concurrently.
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<DashboardStats>> {
    let reconciler = Reconciler::new(state.pool.clone());
    let payments = PaymentRepository::new(state.pool.clone());
    let rooms = RoomRepository::new(state.pool.clone());

    let guests = reconciler.reconcile_all().await?;

    let (total_recaudado, total_cupos) =
        tokio::try_join!(payments.total_collected(), rooms.total_slots())?;

    let invitados_pagados = guests.iter().filter(|g| g.estado_pago == "Pagado").count();
    let invitados_parciales = guests.iter().filter(|g| g.estado_pago == "Parcial").count();
    let invitados_pendientes = guests
        .iter()
        .filter(|g| g.estado_pago == "Pendiente")
        .count();
    let total_pendiente: f64 = guests.iter().map(|g| g.saldo_pendiente).sum();

    let asignados = guests.iter().filter(|g| g.habitacion_id.is_some()).count() as i64;
    let ocupacion_hotel = if total_cupos > 0 {
        ((asignados as f64 / total_cupos as f64) * 100.0).round() as i64
    } else {
        0
    };

    Ok(Json(DashboardStats {
        total_invitados: guests.len(),
        ocupacion_hotel,
        total_recaudado,
        total_pendiente,
        invitados_pagados,
        invitados_parciales,
        invitados_pendientes,
    }))
}
