//! Room model (`habitaciones` table)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub id: i64,
    pub hotel_id: i64,
    pub nombre: String,
    pub precio: f64,
    pub capacidad: i64,
    pub cupos_disponibles: i64,
}

/// Create payload
#[derive(Debug, Clone, Deserialize)]
pub struct RoomCreate {
    pub nombre: String,
    pub precio: f64,
    pub capacidad: i64,
    pub cupos_disponibles: i64,
}

/// Update payload
#[derive(Debug, Clone, Deserialize)]
pub struct RoomUpdate {
    pub nombre: String,
    pub precio: f64,
    pub capacidad: i64,
    pub cupos_disponibles: i64,
}
