//! Hotel model (`hotel` table)
//!
//! Single-row table, same upsert policy as the wedding configuration.
//! `servicios_incluidos` is stored as a JSON array string and exposed as a
//! list on the wire.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raw hotel row
#[derive(Debug, Clone, FromRow)]
pub struct HotelRow {
    pub id: i64,
    pub nombre: String,
    pub direccion: String,
    pub servicios_incluidos: Option<String>,
}

/// Hotel as served on the wire, services decoded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i64,
    pub nombre: String,
    pub direccion: String,
    pub servicios_incluidos: Vec<String>,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        let servicios_incluidos = row
            .servicios_incluidos
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default();

        Hotel {
            id: row.id,
            nombre: row.nombre,
            direccion: row.direccion,
            servicios_incluidos,
        }
    }
}

/// Upsert payload
#[derive(Debug, Clone, Deserialize)]
pub struct HotelUpsert {
    pub nombre: String,
    pub direccion: String,
    #[serde(default)]
    pub servicios_incluidos: Vec<String>,
}
