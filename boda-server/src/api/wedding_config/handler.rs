//! Wedding Configuration Handlers
//!
//! Singleton semantics: saving replaces the current row through an upsert.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::audit::AuditAction;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::WeddingConfigUpsert;
use crate::db::repository::WeddingConfigRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/configuracion - current configuration, `{}` when unset
pub async fn current(State(state): State<ServerState>) -> AppResult<Json<Value>> {
    let repo = WeddingConfigRepository::new(state.pool.clone());
    match repo.current().await? {
        Some(config) => Ok(Json(
            serde_json::to_value(config)
                .map_err(|e| AppError::internal(format!("Serialization failed: {e}")))?,
        )),
        None => Ok(Json(json!({}))),
    }
}

/// POST /api/configuracion - save the configuration
pub async fn save(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<WeddingConfigUpsert>,
) -> AppResult<Json<Value>> {
    let repo = WeddingConfigRepository::new(state.pool.clone());
    let config = repo.upsert(payload).await?;

    state.audit.record(
        "configuracion_boda",
        AuditAction::Create,
        format!(
            "Configuración de boda actualizada: {} & {} - Fecha: {}",
            config.nombre_novia, config.nombre_novio, config.fecha_boda
        ),
        &user,
    );

    Ok(Json(json!({ "id": config.id })))
}
