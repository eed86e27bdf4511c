//! Domain types and rules shared by every EcoGarden crate.

pub mod error;
pub mod hashing;
pub mod location;
pub mod months;
pub mod roles;
pub mod types;
