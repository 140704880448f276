//! JWT Extractor
//!
//! Lets protected handlers take [`CurrentUser`] as an argument. The auth
//! middleware normally stores the identity in request extensions; the
//! extractor falls back to validating the header itself so handlers also
//! work when mounted without the middleware (tests, internal routers).

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Already extracted by the middleware
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = auth_header
            .and_then(JwtService::extract_from_header)
            .ok_or_else(|| AppError::unauthorized("Token de acceso requerido"))?;

        let claims = state
            .jwt_service()
            .validate_token(token)
            .map_err(|_| AppError::forbidden("Token inválido"))?;

        let user =
            CurrentUser::try_from(claims).map_err(|_| AppError::forbidden("Token inválido"))?;
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}
