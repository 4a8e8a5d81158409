//! User account operations.

pub mod get;
pub mod insert;

pub use get::{get_user_by_email, get_user_by_id};
pub use insert::create_user;
