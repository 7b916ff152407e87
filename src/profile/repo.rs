use sqlx::PgPool;
use uuid::Uuid;

use crate::profile::dto::ProfileView;
use crate::profile::repo_types::{AuditRecord, Profile, ProfileUpdate};
use crate::profile::services::{apply_updates, FieldChange};

/// Joined Account + Profile read for one account. The password hash is
/// excluded at the SQL level.
pub async fn fetch_view(db: &PgPool, account_id: Uuid) -> sqlx::Result<Option<ProfileView>> {
    let view = sqlx::query_as::<_, ProfileView>(
        r#"
        SELECT a.id, a.email, a.created_at, a.updated_at,
               p.name, p.age, p.gender, p.profile_image
        FROM accounts a
        JOIN profiles p ON p.account_id = a.id
        WHERE a.id = $1
        "#,
    )
    .bind(account_id)
    .fetch_optional(db)
    .await?;
    Ok(view)
}

impl Profile {
    /// Apply a partial update and its audit rows in a single transaction
    /// at ReadCommitted. The current row is read under `FOR UPDATE` inside
    /// the transaction, so concurrent update sets serialize on the row
    /// lock and each one diffs against the latest committed state; an
    /// unsubmitted field is never written back from a stale snapshot.
    /// Either everything commits or nothing does. Returns `None` when no
    /// profile exists for the account.
    pub async fn update_with_audit(
        db: &PgPool,
        account_id: Uuid,
        update: &ProfileUpdate,
    ) -> sqlx::Result<Option<Vec<FieldChange>>> {
        let mut tx = db.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL READ COMMITTED")
            .execute(&mut *tx)
            .await?;

        let current = sqlx::query_as::<_, Profile>(
            r#"
            SELECT account_id, name, age, gender, profile_image
            FROM profiles
            WHERE account_id = $1
            FOR UPDATE
            "#,
        )
        .bind(account_id)
        .fetch_optional(&mut *tx)
        .await?;
        let Some(current) = current else {
            return Ok(None);
        };

        let (next, changes) = apply_updates(&current, update);

        sqlx::query(
            r#"
            UPDATE profiles
            SET name = $2, age = $3, gender = $4, profile_image = $5
            WHERE account_id = $1
            "#,
        )
        .bind(next.account_id)
        .bind(&next.name)
        .bind(next.age)
        .bind(&next.gender)
        .bind(&next.profile_image)
        .execute(&mut *tx)
        .await?;

        for change in &changes {
            sqlx::query(
                r#"
                INSERT INTO audit_records (account_id, changed_field, old_value, new_value)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(next.account_id)
            .bind(change.field)
            .bind(&change.old_value)
            .bind(&change.new_value)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(Some(changes))
    }
}

impl AuditRecord {
    /// Change history for an account, oldest first.
    pub async fn list_by_account(
        db: &PgPool,
        account_id: Uuid,
    ) -> sqlx::Result<Vec<AuditRecord>> {
        let records = sqlx::query_as::<_, AuditRecord>(
            r#"
            SELECT id, account_id, changed_field, old_value, new_value, created_at
            FROM audit_records
            WHERE account_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(account_id)
        .fetch_all(db)
        .await?;
        Ok(records)
    }
}
