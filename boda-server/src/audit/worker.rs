//! Audit trail background worker
//!
//! Consumes [`AuditRequest`]s from the mpsc channel and appends them to
//! storage. Exits when the channel closes. Write failures are logged only —
//! they must never reach the operation that produced the entry.

use super::storage::AuditStorage;
use super::types::AuditRequest;

pub struct AuditWorker {
    storage: AuditStorage,
}

impl AuditWorker {
    pub fn new(storage: AuditStorage) -> Self {
        Self { storage }
    }

    /// Run the worker (blocks until the channel closes)
    pub async fn run(self, mut rx: tokio::sync::mpsc::Receiver<AuditRequest>) {
        tracing::info!("Audit trail worker started");

        while let Some(req) = rx.recv().await {
            match self.storage.append(req).await {
                Ok(entry) => {
                    tracing::debug!(
                        audit_id = entry.id,
                        tabla = %entry.tabla,
                        accion = %entry.accion,
                        "Audit entry recorded"
                    );
                }
                Err(e) => {
                    tracing::error!("Failed to write audit entry: {e}");
                }
            }
        }

        tracing::info!("Audit channel closed, worker stopping");
    }
}
