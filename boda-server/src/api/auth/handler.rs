//! Authentication Handlers
//!
//! Login, registration and token verification.

use std::time::Duration;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::Account;
use crate::db::repository::AccountRepository;
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(email(message = "Email inválido"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub user: UserInfo,
}

fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "Datos inválidos".to_string())
}

/// POST /api/register - create an account and issue a token
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<AuthResponse>> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::validation("Email y contraseña son requeridos"));
    }
    req.validate()
        .map_err(|e| AppError::validation(first_validation_message(&e)))?;

    let repo = AccountRepository::new(state.pool.clone());

    if repo.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::conflict("El usuario ya existe"));
    }

    let hash = Account::hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;
    let account = repo.create(&req.email, &hash).await?;

    let token = state
        .jwt_service()
        .generate_token(account.id, &account.email)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(account_id = account.id, email = %account.email, "Account registered");

    Ok(Json(AuthResponse {
        message: "Usuario registrado exitosamente".to_string(),
        token,
        user: UserInfo {
            id: account.id,
            email: account.email,
        },
    }))
}

/// POST /api/login - validate credentials and issue a token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::validation("Email y contraseña son requeridos"));
    }

    let repo = AccountRepository::new(state.pool.clone());
    let account = repo.find_by_email(&req.email).await?;

    // Fixed delay to prevent timing attacks (before checking the result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let account = match account {
        Some(account) => {
            let password_valid = account
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }
            account
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - account not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let token = state
        .jwt_service()
        .generate_token(account.id, &account.email)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(account_id = account.id, email = %account.email, "Login successful");

    Ok(Json(AuthResponse {
        message: "Inicio de sesión exitoso".to_string(),
        token,
        user: UserInfo {
            id: account.id,
            email: account.email,
        },
    }))
}

/// GET /api/verify-token - confirm the bearer token is still valid
pub async fn verify_token(user: CurrentUser) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        valid: true,
        user: UserInfo {
            id: user.id,
            email: user.email,
        },
    })
}
