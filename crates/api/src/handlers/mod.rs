pub mod auth;
pub mod tip;
pub mod user;
pub mod weather;
