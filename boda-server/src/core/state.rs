//! Shared application state
//!
//! `ServerState` owns every service handle: the SQLite pool, the JWT
//! service, the audit recorder and the receipt renderer. It is cloned into
//! each request through Axum's `State` — there is no process-global store
//! handle, which keeps tests and concurrent requests explicitly isolated.

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

use crate::audit::{AuditRecorder, AuditStorage};
use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::receipt::ReceiptRenderer;
use crate::utils::AppError;

/// Database file name under the work dir
const DB_FILE_NAME: &str = "boda_suite.db";

#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub jwt: Arc<JwtService>,
    pub audit: AuditRecorder,
    pub receipts: ReceiptRenderer,
}

impl ServerState {
    /// Initialize every service from the configuration
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let work_dir = PathBuf::from(&config.work_dir);
        std::fs::create_dir_all(&work_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;
        std::fs::create_dir_all(work_dir.join("uploads"))
            .map_err(|e| AppError::internal(format!("Failed to create uploads dir: {e}")))?;

        // Database
        let db_path = work_dir.join(DB_FILE_NAME);
        let db = DbService::new(&db_path.to_string_lossy()).await?;
        db.seed_default_admin().await?;

        Self::with_pool(config.clone(), db.pool)
    }

    /// Build the state around an existing pool (used by tests with a
    /// temporary database)
    pub fn with_pool(config: Config, pool: SqlitePool) -> Result<Self, AppError> {
        let work_dir = PathBuf::from(&config.work_dir);

        let audit = AuditRecorder::spawn(AuditStorage::new(pool.clone()));
        let receipts = ReceiptRenderer::new(work_dir.join("recibos"))?;
        let jwt = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self {
            config,
            pool,
            jwt,
            audit,
            receipts,
        })
    }

    pub fn jwt_service(&self) -> Arc<JwtService> {
        self.jwt.clone()
    }

    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.work_dir().join("uploads")
    }
}
