//! Repository Module
//!
//! CRUD operations over the SQLite tables. Each repository owns a clone of
//! the connection pool and is constructed per request by the handlers.

pub mod account;
pub mod guest;
pub mod hotel;
pub mod payment;
pub mod room;
pub mod wedding_config;

pub use account::AccountRepository;
pub use guest::GuestRepository;
pub use hotel::HotelRepository;
pub use payment::PaymentRepository;
pub use room::RoomRepository;
pub use wedding_config::WeddingConfigRepository;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound(err.to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::Duplicate(err.to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
