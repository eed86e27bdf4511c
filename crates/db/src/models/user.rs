//! User entity model and DTOs.

use ecogarden_core::location::HasCity;
use ecogarden_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub city: String,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl HasCity for User {
    fn city(&self) -> Option<&str> {
        Some(self.city.as_str())
    }
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub city: String,
    /// Effective role names, always including `ROLE_USER`.
    pub roles: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl UserResponse {
    pub fn new(user: &User, roles: Vec<String>) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            city: user.city.clone(),
            roles,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub city: String,
    /// Role names to attach. Unknown names are ignored.
    pub roles: Vec<String>,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub city: Option<String>,
}
