//! Utility module - shared error types and logging helpers.

pub mod error;
pub mod logger;
pub mod result;

pub use error::AppError;
pub use logger::init_logger;
pub use result::AppResult;
