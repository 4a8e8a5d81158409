//! Property search with dynamically composed filters.

use crate::error::RentalsDbError;
use models_rentals::api::PropertySearch;
use models_rentals::db::PropertyListing;
use sqlx::{Pool, Postgres, QueryBuilder};

type Result<T> = std::result::Result<T, RentalsDbError>;

// Reviews are left-joined so never-reviewed properties still list, with a
// null average; the rating filter below naturally excludes them.
static SEARCH_BASE: &str = r#"
    SELECT
        properties.id,
        properties.owner_id,
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
        properties.number_of_bedrooms,
        properties.active,
        avg(property_reviews.rating)::float8 AS average_rating
    FROM properties
    LEFT JOIN property_reviews ON properties.id = property_reviews.property_id
"#;

/// Lists properties matching the given optional filters, cheapest first,
/// bounded by `limit`. An empty filter set lists everything.
///
/// Price bounds are given in dollars and compared strictly against the
/// stored cents column; `minimum_rating` is a strict bound on the
/// per-property review average.
#[tracing::instrument(skip(db))]
pub async fn search_properties(
    db: &Pool<Postgres>,
    search: &PropertySearch,
    limit: i64,
) -> Result<Vec<PropertyListing>> {
    let mut builder = QueryBuilder::new(SEARCH_BASE);
    let mut first_condition = true;

    if let Some(city) = &search.city {
        push_connective(&mut builder, &mut first_condition);
        builder
            .push("LOWER(properties.city) LIKE ")
            .push_bind(format!("%{}%", city.to_lowercase()));
    }

    if let Some(owner_id) = search.owner_id {
        push_connective(&mut builder, &mut first_condition);
        builder.push("properties.owner_id = ").push_bind(owner_id);
    }

    if let Some(minimum) = search.minimum_price_per_night {
        push_connective(&mut builder, &mut first_condition);
        builder
            .push("properties.cost_per_night > ")
            .push_bind(minimum * 100);
    }

    if let Some(maximum) = search.maximum_price_per_night {
        push_connective(&mut builder, &mut first_condition);
        builder
            .push("properties.cost_per_night < ")
            .push_bind(maximum * 100);
    }

    builder.push(" GROUP BY properties.id");

    if let Some(rating) = search.minimum_rating {
        builder
            .push(" HAVING avg(property_reviews.rating) > ")
            .push_bind(rating);
    }

    builder
        .push(" ORDER BY properties.cost_per_night LIMIT ")
        .push_bind(limit);

    let listings = builder
        .build_query_as::<PropertyListing>()
        .fetch_all(db)
        .await?;

    Ok(listings)
}

fn push_connective(builder: &mut QueryBuilder<'_, Postgres>, first_condition: &mut bool) {
    if *first_condition {
        builder.push(" WHERE ");
        *first_condition = false;
    } else {
        builder.push(" AND ");
    }
}
