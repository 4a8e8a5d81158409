//! Property insert operations.

use crate::error::RentalsDbError;
use models_rentals::api::NewProperty;
use models_rentals::db::Property;
use sqlx::{Pool, Postgres};

type Result<T> = std::result::Result<T, RentalsDbError>;

/// Lists a new property, returning the created row. The owner reference is
/// checked by the schema's foreign key, not here.
#[tracing::instrument(skip(db, property))]
pub async fn create_property(db: &Pool<Postgres>, property: &NewProperty) -> Result<Property> {
    let row = sqlx::query_as::<_, Property>(
        r#"
        INSERT INTO properties (
            owner_id,
            title,
            description,
            thumbnail_photo_url,
            cover_photo_url,
            cost_per_night,
            street,
            city,
            province,
            post_code,
            country,
            parking_spaces,
            number_of_bathrooms,
            number_of_bedrooms
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        RETURNING
            id,
            owner_id,
            title,
            description,
            thumbnail_photo_url,
            cover_photo_url,
            cost_per_night,
            street,
            city,
            province,
            post_code,
            country,
            parking_spaces,
            number_of_bathrooms,
            number_of_bedrooms,
            active
        "#,
    )
    .bind(property.owner_id)
    .bind(&property.title)
    .bind(&property.description)
    .bind(&property.thumbnail_photo_url)
    .bind(&property.cover_photo_url)
    .bind(property.cost_per_night)
    .bind(&property.street)
    .bind(&property.city)
    .bind(&property.province)
    .bind(&property.post_code)
    .bind(&property.country)
    .bind(property.parking_spaces)
    .bind(property.number_of_bathrooms)
    .bind(property.number_of_bedrooms)
    .fetch_one(db)
    .await?;

    Ok(row)
}
