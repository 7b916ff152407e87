use sqlx::PgPool;

use crate::auth::repo_types::{Account, NewProfile};

impl Account {
    /// Find an account by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, email, password_hash, created_at, updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(account)
    }

    /// Create an account and its profile in one transaction at ReadCommitted.
    /// A failure on either insert rolls back both rows; the unique constraint
    /// on email is the final arbiter against concurrent registrations.
    pub async fn create_with_profile(
        db: &PgPool,
        email: &str,
        password_hash: &str,
        profile: &NewProfile,
    ) -> sqlx::Result<Account> {
        let mut tx = db.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL READ COMMITTED")
            .execute(&mut *tx)
            .await?;

        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO profiles (account_id, name, age, gender, profile_image)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(account.id)
        .bind(&profile.name)
        .bind(profile.age)
        .bind(&profile.gender)
        .bind(&profile.profile_image)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(account)
    }
}
