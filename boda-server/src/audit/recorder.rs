//! Audit recorder — the write handle handlers use
//!
//! Pushes entries onto a bounded channel consumed by [`AuditWorker`]. The
//! send is non-blocking and infallible from the caller's point of view: a
//! full or closed channel is logged and the entry dropped, never propagated.

use tokio::sync::mpsc;

use super::storage::AuditStorage;
use super::types::{AuditAction, AuditRequest};
use super::worker::AuditWorker;
use crate::auth::CurrentUser;

/// Channel capacity before entries start being dropped under pressure
const AUDIT_BUFFER_SIZE: usize = 256;

#[derive(Clone)]
pub struct AuditRecorder {
    tx: mpsc::Sender<AuditRequest>,
}

impl std::fmt::Debug for AuditRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditRecorder").finish_non_exhaustive()
    }
}

impl AuditRecorder {
    /// Create the recorder and spawn its background worker
    pub fn spawn(storage: AuditStorage) -> Self {
        let (tx, rx) = mpsc::channel(AUDIT_BUFFER_SIZE);
        tokio::spawn(AuditWorker::new(storage).run(rx));
        Self { tx }
    }

    /// Record one mutating action, best-effort
    pub fn record(
        &self,
        tabla: impl Into<String>,
        accion: AuditAction,
        descripcion: impl Into<String>,
        user: &CurrentUser,
    ) {
        let req = AuditRequest {
            tabla: tabla.into(),
            accion,
            descripcion: descripcion.into(),
            usuario_id: user.id,
            usuario_email: user.email.clone(),
        };

        if let Err(e) = self.tx.try_send(req) {
            tracing::error!("Audit entry dropped: {e}");
        }
    }
}
