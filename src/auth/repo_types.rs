use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Credential record. One row per account, unique on email.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Descriptive fields inserted alongside a new account.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub profile_image: Option<String>,
}
