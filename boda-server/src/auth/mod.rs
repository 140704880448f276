//! Authentication module
//!
//! JWT bearer tokens (HS256) plus the Axum middleware and extractor that
//! gate every business endpoint.

mod extractor;
pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
