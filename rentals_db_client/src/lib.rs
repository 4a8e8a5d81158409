//! Rentals Database Client
//!
//! This crate is the data-access layer for the vacation-rental application.
//! Every function issues a single parameterized query against a caller-owned
//! Postgres pool; there is no state here beyond the borrowed connection
//! handle, and no validation beyond what the schema enforces.

pub mod error;
pub mod properties;
pub mod reservations;
pub mod users;

/// Schema migrations, embedded for the sqlx test harness.
pub static RENTALS_DB_MIGRATIONS: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
