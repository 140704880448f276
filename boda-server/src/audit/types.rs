//! Audit trail type definitions

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Audit action — closed set, stored as its uppercase name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "CREATE",
            AuditAction::Update => "UPDATE",
            AuditAction::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted audit entry (immutable once written)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditEntry {
    pub id: i64,
    pub tabla: String,
    pub accion: String,
    pub descripcion: Option<String>,
    pub usuario_id: Option<i64>,
    pub usuario_email: Option<String>,
    pub fecha: String,
}

/// Request sent to the audit worker over the channel
#[derive(Debug, Clone)]
pub struct AuditRequest {
    pub tabla: String,
    pub accion: AuditAction,
    pub descripcion: String,
    pub usuario_id: i64,
    pub usuario_email: String,
}
