//! Audit trail SQLite storage
//!
//! Append-only design: only `append` and read methods, no delete or update
//! interface. Entries are timestamped server-side at insert.

use sqlx::SqlitePool;
use thiserror::Error;

use super::types::{AuditEntry, AuditRequest};

/// Fixed read-side cap: the dashboard shows at most this many entries
pub const AUDIT_READ_LIMIT: i64 = 500;

/// Storage error
#[derive(Debug, Error)]
pub enum AuditStorageError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for AuditStorageError {
    fn from(err: sqlx::Error) -> Self {
        AuditStorageError::Database(err.to_string())
    }
}

/// Audit trail storage (SQLite)
#[derive(Clone)]
pub struct AuditStorage {
    pool: SqlitePool,
}

impl AuditStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append one entry with a server-generated timestamp
    pub async fn append(&self, req: AuditRequest) -> Result<AuditEntry, AuditStorageError> {
        let fecha = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            "INSERT INTO auditoria (tabla, accion, descripcion, usuario_id, usuario_email, fecha) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&req.tabla)
        .bind(req.accion.as_str())
        .bind(&req.descripcion)
        .bind(req.usuario_id)
        .bind(&req.usuario_email)
        .bind(&fecha)
        .execute(&self.pool)
        .await?;

        Ok(AuditEntry {
            id: result.last_insert_rowid(),
            tabla: req.tabla,
            accion: req.accion.as_str().to_string(),
            descripcion: Some(req.descripcion),
            usuario_id: Some(req.usuario_id),
            usuario_email: Some(req.usuario_email),
            fecha,
        })
    }

    /// Most recent entries, newest first, capped at [`AUDIT_READ_LIMIT`]
    pub async fn list_recent(&self) -> Result<Vec<AuditEntry>, AuditStorageError> {
        let entries = sqlx::query_as::<_, AuditEntry>(
            "SELECT * FROM auditoria ORDER BY fecha DESC, id DESC LIMIT ?",
        )
        .bind(AUDIT_READ_LIMIT)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }
}
