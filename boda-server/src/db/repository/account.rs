//! Account Repository

use sqlx::SqlitePool;

use super::RepoResult;
use crate::db::models::Account;

#[derive(Clone)]
pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, email, password, created_at FROM usuarios WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(account)
    }

    /// Insert a new account; the caller hashes the password beforehand
    pub async fn create(&self, email: &str, password_hash: &str) -> RepoResult<Account> {
        let created_at = chrono::Utc::now().to_rfc3339();
        let result = sqlx::query(
            "INSERT INTO usuarios (email, password, created_at) VALUES (?, ?, ?)",
        )
        .bind(email)
        .bind(password_hash)
        .bind(&created_at)
        .execute(&self.pool)
        .await?;

        Ok(Account {
            id: result.last_insert_rowid(),
            email: email.to_string(),
            password: password_hash.to_string(),
            created_at,
        })
    }
}
