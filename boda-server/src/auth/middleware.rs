//! Authentication middleware
//!
//! Gates every `/api/` route behind a valid bearer token.
//!
//! # Paths that skip authentication
//!
//! - `OPTIONS *` (CORS preflight)
//! - anything outside `/api/` (static files, frontend)
//! - `/api/login`, `/api/register` (credential endpoints)
//! - `/api/health`
//!
//! # Error mapping
//!
//! | Failure | Response |
//! |------|------------|
//! | Missing Authorization header | 401 "Token de acceso requerido" |
//! | Malformed / expired / bad signature | 403 "Token inválido" |

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

/// Routes reachable without a token
const PUBLIC_API_ROUTES: &[&str] = &["/api/login", "/api/register", "/api/health"];

pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // Allow CORS preflight OPTIONS requests through
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API routes skip authentication (static files return normally)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if PUBLIC_API_ROUTES.contains(&path) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header.and_then(JwtService::extract_from_header) {
        Some(token) => token,
        None => {
            tracing::warn!(target: "security", uri = %req.uri(), "Request without access token");
            return Err(AppError::unauthorized("Token de acceso requerido"));
        }
    };

    let jwt_service = state.jwt_service();
    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::try_from(claims)
                .map_err(|_| AppError::forbidden("Token inválido"))?;
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(
                target: "security",
                error = %e,
                uri = %req.uri(),
                "Token validation failed"
            );
            Err(AppError::forbidden("Token inválido"))
        }
    }
}
