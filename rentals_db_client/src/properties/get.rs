//! Property lookup operations.

use crate::error::RentalsDbError;
use models_rentals::db::Property;
use sqlx::{Pool, Postgres};

type Result<T> = std::result::Result<T, RentalsDbError>;

/// Gets a single property by id.
#[tracing::instrument(skip(db))]
pub async fn get_property_by_id(db: &Pool<Postgres>, id: i32) -> Result<Option<Property>> {
    let property = sqlx::query_as::<_, Property>(
        r#"
        SELECT
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
        FROM properties
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    Ok(property)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RENTALS_DB_MIGRATIONS;
    use sqlx::{Pool, Postgres};

    #[sqlx::test(
        migrator = "RENTALS_DB_MIGRATIONS",
        fixtures(path = "../../fixtures", scripts("rentals"))
    )]
    async fn test_get_property_by_id(pool: Pool<Postgres>) -> anyhow::Result<()> {
        let property = get_property_by_id(&pool, 1).await?;

        let property = property.expect("seeded property should be found");
        assert_eq!(property.title, "Speed lamp");
        assert_eq!(property.owner_id, 1);
        assert_eq!(property.cost_per_night, 9300);
        assert_eq!(property.city, "Vancouver");
        assert!(property.active);

        Ok(())
    }

    #[sqlx::test(
        migrator = "RENTALS_DB_MIGRATIONS",
        fixtures(path = "../../fixtures", scripts("rentals"))
    )]
    async fn test_get_property_by_id_not_found(pool: Pool<Postgres>) -> anyhow::Result<()> {
        let property = get_property_by_id(&pool, 9999).await?;

        assert!(property.is_none());

        Ok(())
    }
}
