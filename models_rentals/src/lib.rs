//! Rentals Models
//!
//! This crate defines the data models for the vacation-rental data layer:
//!
//! - **db**: Database layer row types (used only by rentals_db_client)
//! - **api**: Input payloads and search filters accepted by the query facade

pub mod api;
pub mod db;

// Re-export the facade inputs for convenience
pub use api::{NewProperty, NewUser, PropertySearch};
