//! Hotel Handlers
//!
//! Singleton semantics, same upsert policy as the wedding configuration.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::audit::AuditAction;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::HotelUpsert;
use crate::db::repository::HotelRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/hotel - current hotel, `{}` when unset
pub async fn current(State(state): State<ServerState>) -> AppResult<Json<Value>> {
    let repo = HotelRepository::new(state.pool.clone());
    match repo.current().await? {
        Some(hotel) => Ok(Json(
            serde_json::to_value(hotel)
                .map_err(|e| AppError::internal(format!("Serialization failed: {e}")))?,
        )),
        None => Ok(Json(json!({}))),
    }
}

/// POST /api/hotel - save the hotel
pub async fn save(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<HotelUpsert>,
) -> AppResult<Json<Value>> {
    let repo = HotelRepository::new(state.pool.clone());
    let hotel = repo.upsert(payload).await?;

    state.audit.record(
        "hotel",
        AuditAction::Create,
        format!(
            "Hotel configurado: {} - Dirección: {}",
            hotel.nombre, hotel.direccion
        ),
        &user,
    );

    Ok(Json(json!({ "id": hotel.id })))
}
