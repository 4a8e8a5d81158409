//! Database layer types - used only by rentals_db_client.
//!
//! These structs directly map to database tables (or joined read shapes)
//! and include all database fields. They should not be exposed outside of
//! the db_client.

pub mod property;
pub mod reservation;
pub mod user;

pub use property::{Property, PropertyListing};
pub use reservation::{GuestReservation, Reservation};
pub use user::User;
