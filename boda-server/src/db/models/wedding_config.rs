//! Wedding configuration model (`configuracion_boda` table)
//!
//! Single-row table: the current configuration always lives at id 1 and is
//! replaced through an upsert, so there is never a moment without a row once
//! one has been saved.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WeddingConfig {
    pub id: i64,
    pub nombre_novia: String,
    pub nombre_novio: String,
    pub fecha_boda: String,
    pub hora_boda: String,
    pub lugar_boda: String,
    pub imagen_portada: Option<String>,
}

/// Upsert payload
#[derive(Debug, Clone, Deserialize)]
pub struct WeddingConfigUpsert {
    pub nombre_novia: String,
    pub nombre_novio: String,
    pub fecha_boda: String,
    pub hora_boda: String,
    pub lugar_boda: String,
    pub imagen_portada: Option<String>,
}
