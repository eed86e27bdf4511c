//! Handlers for the `/user` resource.
//!
//! Account creation is public; updates and deletion require `ROLE_ADMIN`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ecogarden_core::error::CoreError;
use ecogarden_core::roles::ROLE_USER;
use ecogarden_core::types::DbId;
use ecogarden_db::models::user::{CreateUser, UpdateUser, UserResponse};
use ecogarden_db::repositories::{RoleRepo, UserRepo};
use serde::Deserialize;
use validator::{Validate, ValidateEmail};

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Minimum password length enforced on creation and update.
const MIN_PASSWORD_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /user`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(email(message = "\"email\" is not a valid email address"))]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub city: String,
}

/// Request body for `PUT /user/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub city: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/user
///
/// Register a new account with the `ROLE_USER` role. Returns 201 Created.
pub async fn create_user(
    State(state): State<AppState>,
    Json(mut input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input.email = input.email.trim().to_string();
    input.city = input.city.trim().to_string();

    if input.email.is_empty() || input.password.is_empty() || input.city.is_empty() {
        return Err(AppError::BadRequest(
            "\"email\", \"password\" and \"city\" are required".into(),
        ));
    }
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    ensure_email_available(&state, &input.email, None).await?;

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        email: input.email,
        password_hash: hashed,
        city: input.city,
        roles: vec![ROLE_USER.to_string()],
    };

    let user = UserRepo::create(&state.pool, &create_dto).await?;
    let roles = RoleRepo::effective_for_user(&state.pool, user.id).await?;
    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(UserResponse::new(&user, roles))))
}

/// PUT /api/user/{id}
///
/// Partially update a user. Provided fields must not be blank.
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    if UserRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    let email = non_blank(input.email, "email")?;
    let city = non_blank(input.city, "city")?;

    if let Some(ref email) = email {
        if !email.validate_email() {
            return Err(AppError::Core(CoreError::Validation(
                "\"email\" is not a valid email address".into(),
            )));
        }
    }

    let password_hash = match input.password {
        Some(password) => {
            validate_password_strength(&password, MIN_PASSWORD_LENGTH)
                .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
            Some(
                hash_password(&password)
                    .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?,
            )
        }
        None => None,
    };

    if let Some(ref email) = email {
        ensure_email_available(&state, email, Some(id)).await?;
    }

    let update_dto = UpdateUser {
        email,
        password_hash,
        city,
    };

    let user = UserRepo::update(&state.pool, id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    let roles = RoleRepo::effective_for_user(&state.pool, user.id).await?;

    tracing::info!(user_id = id, admin_id = admin.user_id, "User updated");
    Ok(Json(UserResponse::new(&user, roles)))
}

/// DELETE /api/user/{id}
///
/// Permanently delete a user. Returns 204 No Content.
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(user_id = id, admin_id = admin.user_id, "User deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Trim an optional field, rejecting a value that is present but blank.
fn non_blank(value: Option<String>, field: &str) -> AppResult<Option<String>> {
    match value {
        Some(v) => {
            let v = v.trim();
            if v.is_empty() {
                Err(AppError::BadRequest(format!("\"{field}\" must not be blank")))
            } else {
                Ok(Some(v.to_string()))
            }
        }
        None => Ok(None),
    }
}

/// Reject an email already held by a user other than `owner`.
async fn ensure_email_available(
    state: &AppState,
    email: &str,
    owner: Option<DbId>,
) -> AppResult<()> {
    match UserRepo::find_by_email(&state.pool, email).await? {
        Some(existing) if Some(existing.id) != owner => Err(AppError::Core(
            CoreError::Conflict(format!("Email \"{email}\" is already in use")),
        )),
        _ => Ok(()),
    }
}
