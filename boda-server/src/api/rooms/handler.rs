//! Room Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::audit::AuditAction;
use crate::auth::CurrentUser;
use crate::billing::Reconciler;
use crate::core::ServerState;
use crate::db::models::{Room, RoomCreate, RoomUpdate};
use crate::db::repository::RoomRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/habitaciones - all rooms ordered by name
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Room>>> {
    let repo = RoomRepository::new(state.pool.clone());
    Ok(Json(repo.find_all().await?))
}

/// POST /api/habitaciones - create a room
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<RoomCreate>,
) -> AppResult<Json<Value>> {
    let repo = RoomRepository::new(state.pool.clone());
    let descripcion = format!(
        "Habitación creada: {} - Precio: ${} - Capacidad: {}",
        payload.nombre, payload.precio, payload.capacidad
    );
    let id = repo.create(payload).await?;

    state
        .audit
        .record("habitaciones", AuditAction::Create, descripcion, &user);

    Ok(Json(json!({ "id": id })))
}

/// PUT /api/habitaciones/{id} - update a room
///
/// A price change invalidates the persisted payment statuses of every
/// assigned guest, so they are reconciled right after the write.
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<RoomUpdate>,
) -> AppResult<Json<Value>> {
    let repo = RoomRepository::new(state.pool.clone());
    let descripcion = format!(
        "Habitación actualizada: {} - Precio: ${} - Capacidad: {}",
        payload.nombre, payload.precio, payload.capacidad
    );
    let changes = repo.update(id, payload).await?;

    if changes > 0 {
        Reconciler::new(state.pool.clone()).reconcile_room(id).await?;
    }

    state
        .audit
        .record("habitaciones", AuditAction::Update, descripcion, &user);

    Ok(Json(json!({ "changes": changes })))
}

/// DELETE /api/habitaciones/{id} - delete a room
///
/// Blocked while any guest references the room.
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let repo = RoomRepository::new(state.pool.clone());

    if repo.assigned_guest_count(id).await? > 0 {
        return Err(AppError::conflict(
            "No se puede eliminar la habitación porque tiene invitados asignados",
        ));
    }

    let nombre = repo
        .find_by_id(id)
        .await?
        .map(|r| r.nombre)
        .unwrap_or_else(|| "Desconocida".to_string());

    let changes = repo.delete(id).await?;

    state.audit.record(
        "habitaciones",
        AuditAction::Delete,
        format!("Habitación eliminada: {nombre}"),
        &user,
    );

    Ok(Json(json!({ "changes": changes })))
}
