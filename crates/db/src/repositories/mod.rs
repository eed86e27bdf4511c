//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod month_repo;
pub mod role_repo;
pub mod tip_repo;
pub mod user_repo;

pub use month_repo::MonthRepo;
pub use role_repo::RoleRepo;
pub use tip_repo::TipRepo;
pub use user_repo::UserRepo;
