//! Guest Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::audit::AuditAction;
use crate::auth::CurrentUser;
use crate::billing::Reconciler;
use crate::core::ServerState;
use crate::db::models::{GuestCreate, GuestUpdate, GuestWithBalance, Payment};
use crate::db::repository::{GuestRepository, PaymentRepository};
use crate::utils::{AppError, AppResult};

/// GET /api/invitados - all guests with room data and live balances
///
/// Runs a full reconciliation so the listing always reflects the current
/// payment history, even if an earlier status write lagged.
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<GuestWithBalance>>> {
    let reconciler = Reconciler::new(state.pool.clone());
    Ok(Json(reconciler.reconcile_all().await?))
}

/// POST /api/invitados - create a guest
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<GuestCreate>,
) -> AppResult<Json<Value>> {
    let repo = GuestRepository::new(state.pool.clone());
    let descripcion = format!(
        "Invitado creado: {} - Contacto: {}",
        payload.nombre, payload.contacto
    );
    let id = repo.create(payload).await?;

    state
        .audit
        .record("invitados", AuditAction::Create, descripcion, &user);

    Ok(Json(json!({ "id": id })))
}

/// PUT /api/invitados/{id} - update a guest
///
/// A room reassignment changes the price the status derives from, so the
/// guest is reconciled right after the write.
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<GuestUpdate>,
) -> AppResult<Json<Value>> {
    let repo = GuestRepository::new(state.pool.clone());
    let descripcion = format!(
        "Invitado actualizado: {} - Contacto: {}",
        payload.nombre, payload.contacto
    );
    let changes = repo.update(id, payload).await?;

    if changes > 0 {
        Reconciler::new(state.pool.clone()).reconcile(id).await?;
    }

    state
        .audit
        .record("invitados", AuditAction::Update, descripcion, &user);

    Ok(Json(json!({ "changes": changes })))
}

/// DELETE /api/invitados/{id} - delete a guest and their payments
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let repo = GuestRepository::new(state.pool.clone());

    let nombre = repo
        .find_by_id(id)
        .await?
        .map(|g| g.nombre)
        .unwrap_or_else(|| "Desconocido".to_string());

    let changes = repo.delete_cascade(id).await?;

    state.audit.record(
        "invitados",
        AuditAction::Delete,
        format!("Invitado eliminado: {nombre}"),
        &user,
    );

    Ok(Json(json!({ "changes": changes })))
}

/// GET /api/invitados/{id}/pagos - one guest's payments, newest first
///
/// The guest is re-reconciled first so the stored status a client may read
/// alongside this history is never stale.
pub async fn payments(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Payment>>> {
    let guests = GuestRepository::new(state.pool.clone());
    if guests.find_by_id(id).await?.is_none() {
        return Err(AppError::not_found("Invitado no encontrado"));
    }

    Reconciler::new(state.pool.clone()).reconcile(id).await?;

    let payments = PaymentRepository::new(state.pool.clone());
    Ok(Json(payments.list_by_guest(id).await?))
}
