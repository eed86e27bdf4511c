//! Handler for the `/auth` resource (login).

use axum::extract::State;
use axum::Json;
use ecogarden_core::error::CoreError;
use ecogarden_db::models::user::UserResponse;
use ecogarden_db::repositories::{RoleRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /auth`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
}

/// POST /api/auth
///
/// Authenticate with email + password and return a signed access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let email = input.email.trim();
    if email.is_empty() || input.password.is_empty() {
        return Err(AppError::BadRequest(
            "Both \"email\" and \"password\" are required".into(),
        ));
    }

    let user = UserRepo::find_by_email(&state.pool, email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Rejected login with wrong password");
        return Err(invalid_credentials());
    }

    let roles = RoleRepo::effective_for_user(&state.pool, user.id).await?;
    let token = generate_access_token(user.id, &user.email, &roles, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(AuthResponse {
        token,
        expires_in: state.config.jwt.expiry_secs(),
        user: UserResponse::new(&user, roles),
    }))
}
