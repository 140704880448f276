//! Audit Trail Handlers

use axum::{Json, extract::State};

use crate::audit::{AuditEntry, AuditStorage};
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/auditoria - most recent entries, newest first, capped
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<AuditEntry>>> {
    let storage = AuditStorage::new(state.pool.clone());
    let entries = storage
        .list_recent()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(entries))
}
