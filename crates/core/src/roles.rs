//! Well-known role name constants.
//!
//! These must match the seed data in `20260301000001_create_roles_and_users.sql`.

pub const ROLE_USER: &str = "ROLE_USER";
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// Return the role names a user effectively holds.
///
/// Every account holds at least [`ROLE_USER`], whether or not it was assigned
/// explicitly. Order of the stored roles is kept and duplicates are dropped.
pub fn effective_roles<I, S>(assigned: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut roles: Vec<String> = Vec::new();
    for name in assigned {
        let name = name.into();
        if !roles.contains(&name) {
            roles.push(name);
        }
    }
    if !roles.iter().any(|r| r == ROLE_USER) {
        roles.push(ROLE_USER.to_string());
    }
    roles
}

/// Whether the given role list grants administrative access.
pub fn is_admin(roles: &[String]) -> bool {
    roles.iter().any(|r| r == ROLE_ADMIN)
}
