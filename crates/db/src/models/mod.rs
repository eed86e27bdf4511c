//! Row models and DTOs, one submodule per table family.

pub mod month;
pub mod role;
pub mod tip;
pub mod user;
