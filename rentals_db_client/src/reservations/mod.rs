//! Reservation operations.

pub mod get;

pub use get::get_guest_reservations;
