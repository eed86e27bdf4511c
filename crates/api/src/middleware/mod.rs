//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `ROLE_ADMIN` role.
//! - [`rbac::RequireUser`] -- Requires any authenticated user.

pub mod auth;
pub mod rbac;
