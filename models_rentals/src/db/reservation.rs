//! Database layer reservation models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reservation row (database representation).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reservation {
    pub id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property_id: i32,
    pub guest_id: i32,
}

/// A guest's reservation joined with the reserved property.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct GuestReservation {
    pub id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guest_id: i32,
    pub property_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}
