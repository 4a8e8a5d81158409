//! User lookup operations.

use crate::error::RentalsDbError;
use models_rentals::db::User;
use sqlx::{Pool, Postgres};

type Result<T> = std::result::Result<T, RentalsDbError>;

/// Gets a single user by email. The match is case-insensitive; an unknown
/// email yields `None`, not an error.
#[tracing::instrument(skip(db))]
pub async fn get_user_by_email(db: &Pool<Postgres>, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password
        FROM users
        WHERE LOWER(email) = LOWER($1)
        "#,
    )
    .bind(email)
    .fetch_optional(db)
    .await?;

    Ok(user)
}

/// Gets a single user by id.
#[tracing::instrument(skip(db))]
pub async fn get_user_by_id(db: &Pool<Postgres>, id: i32) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    Ok(user)
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
    async fn test_get_user_by_email(pool: Pool<Postgres>) -> anyhow::Result<()> {
        let user = get_user_by_email(&pool, "sarah.chen@example.com").await?;

        let user = user.expect("seeded user should be found");
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Sarah Chen");
        assert_eq!(user.email, "sarah.chen@example.com");

        Ok(())
    }

    #[sqlx::test(
        migrator = "RENTALS_DB_MIGRATIONS",
        fixtures(path = "../../fixtures", scripts("rentals"))
    )]
    async fn test_get_user_by_email_is_case_insensitive(
        pool: Pool<Postgres>,
    ) -> anyhow::Result<()> {
        let user = get_user_by_email(&pool, "SARAH.CHEN@EXAMPLE.COM").await?;

        assert_eq!(user.expect("mixed-case lookup should match").id, 1);

        Ok(())
    }

    #[sqlx::test(
        migrator = "RENTALS_DB_MIGRATIONS",
        fixtures(path = "../../fixtures", scripts("rentals"))
    )]
    async fn test_get_user_by_email_unknown(pool: Pool<Postgres>) -> anyhow::Result<()> {
        let user = get_user_by_email(&pool, "nobody@example.com").await?;

        assert!(user.is_none());

        Ok(())
    }

    #[sqlx::test(
        migrator = "RENTALS_DB_MIGRATIONS",
        fixtures(path = "../../fixtures", scripts("rentals"))
    )]
    async fn test_get_user_by_id(pool: Pool<Postgres>) -> anyhow::Result<()> {
        let user = get_user_by_id(&pool, 2).await?;

        let user = user.expect("seeded user should be found");
        assert_eq!(user.name, "Miguel Ortiz");
        assert_eq!(user.email, "miguel.ortiz@example.com");

        Ok(())
    }

    #[sqlx::test(
        migrator = "RENTALS_DB_MIGRATIONS",
        fixtures(path = "../../fixtures", scripts("rentals"))
    )]
    async fn test_get_user_by_id_not_found(pool: Pool<Postgres>) -> anyhow::Result<()> {
        let user = get_user_by_id(&pool, 9999).await?;

        assert!(user.is_none());

        Ok(())
    }
}
