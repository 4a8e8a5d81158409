//! Reservation lookup operations.

use crate::error::RentalsDbError;
use models_rentals::db::GuestReservation;
use sqlx::{Pool, Postgres};

type Result<T> = std::result::Result<T, RentalsDbError>;

/// Gets a guest's reservations joined with the reserved property, earliest
/// start date first, bounded by `limit`.
#[tracing::instrument(skip(db))]
pub async fn get_guest_reservations(
    db: &Pool<Postgres>,
    guest_id: i32,
    limit: i64,
) -> Result<Vec<GuestReservation>> {
    let reservations = sqlx::query_as::<_, GuestReservation>(
        r#"
        SELECT
            reservations.id,
            reservations.start_date,
            reservations.end_date,
            reservations.guest_id,
            properties.id AS property_id,
            properties.title,
            properties.description,
            properties.thumbnail_photo_url,
            properties.cover_photo_url,
            properties.cost_per_night,
            properties.street,
            properties.city,
            properties.province,
            properties.post_code,
            properties.country,
            properties.parking_spaces,
            properties.number_of_bathrooms,
            properties.number_of_bedrooms
        FROM reservations
        JOIN properties ON reservations.property_id = properties.id
        WHERE reservations.guest_id = $1
        ORDER BY reservations.start_date
        LIMIT $2
        "#,
    )
    .bind(guest_id)
    .bind(limit)
    .fetch_all(db)
    .await?;

    Ok(reservations)
}
