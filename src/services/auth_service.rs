use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use crate::{
    dto::auth::{Claims, LoginRequest, LoginResponse},
    error::{AppError, AppResult},
    state::AppState,
};

/// Verifies the configured admin credentials and issues a signed session
/// token. The password is checked against an argon2 hash; a plaintext
/// comparison is deliberately not supported.
pub fn login(state: &AppState, payload: LoginRequest) -> AppResult<LoginResponse> {
    let LoginRequest { username, password } = payload;

    if username != state.config.admin_username {
        return Err(AppError::BadRequest("Invalid username or password".into()));
    }

    let parsed_hash = PasswordHash::new(&state.config.admin_password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;

    let argon2 = Argon2::default();
    if argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(AppError::BadRequest("Invalid username or password".into()));
    }

    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::Internal(anyhow::anyhow!("JWT_SECRET is not set")))?;

    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(24))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: username,
        role: "admin".into(),
        exp: expiration.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;

    Ok(LoginResponse {
        token: format!("Bearer {}", token),
    })
}
