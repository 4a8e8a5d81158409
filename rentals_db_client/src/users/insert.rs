//! User insert operations.

use crate::error::RentalsDbError;
use models_rentals::api::NewUser;
use models_rentals::db::User;
use sqlx::{Pool, Postgres};

type Result<T> = std::result::Result<T, RentalsDbError>;

/// Creates a new user account, returning the created row.
///
/// Email uniqueness is enforced by the schema; a duplicate surfaces as the
/// driver's constraint-violation error.
#[tracing::instrument(skip(db, user))]
pub async fn create_user(db: &Pool<Postgres>, user: &NewUser) -> Result<User> {
    let row = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, password)
        VALUES ($1, $2, $3)
        RETURNING id, name, email, password
        "#,
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password)
    .fetch_one(db)
    .await?;

    Ok(row)
}
