//! Database Module
//!
//! Handles the SQLite connection pool, migrations and the default admin seed.

pub mod models;
pub mod repository;

use crate::utils::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;

use models::Account;

/// Default administrator credentials, created once if the account is absent
const DEFAULT_ADMIN_EMAIL: &str = "admin@bodasuite.com";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Database service — owns a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Create a new database service with WAL mode and run migrations
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        // Build connection options: WAL, foreign keys, normal sync
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| AppError::database(format!("Invalid database path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .pragma("foreign_keys", "ON")
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        // busy_timeout: wait 5s on write contention instead of failing outright
        sqlx::query("PRAGMA busy_timeout = 5000;")
            .execute(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to set busy_timeout: {e}")))?;

        tracing::info!("Database connection established (SQLite WAL, busy_timeout=5000ms)");

        // Run migrations (ignore previously applied but now removed migrations)
        sqlx::migrate!("./migrations")
            .set_ignore_missing(true)
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }

    /// Seed the default admin account if no account with that email exists
    pub async fn seed_default_admin(&self) -> Result<(), AppError> {
        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM usuarios WHERE email = ?")
                .bind(DEFAULT_ADMIN_EMAIL)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to query admin account: {e}")))?;

        if existing.is_some() {
            tracing::debug!("Admin account already exists");
            return Ok(());
        }

        let hash = Account::hash_password(DEFAULT_ADMIN_PASSWORD)
            .map_err(|e| AppError::internal(format!("Failed to hash admin password: {e}")))?;

        sqlx::query("INSERT INTO usuarios (email, password, created_at) VALUES (?, ?, ?)")
            .bind(DEFAULT_ADMIN_EMAIL)
            .bind(hash)
            .bind(chrono::Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create admin account: {e}")))?;

        tracing::info!(email = DEFAULT_ADMIN_EMAIL, "Admin account created");
        Ok(())
    }
}
