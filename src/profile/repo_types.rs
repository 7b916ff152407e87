use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Descriptive record, exactly one per account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub account_id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub profile_image: Option<String>,
}

/// Partial update restricted to the mutable profile attribute set.
/// `profile_image` carries an inner Option so an explicit null can
/// clear the field.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub profile_image: Option<Option<String>>,
}

/// Immutable field-level change entry. Written only inside the same
/// transaction as the profile update it describes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditRecord {
    pub id: Uuid,
    pub account_id: Uuid,
    pub changed_field: String,
    pub old_value: String,
    pub new_value: String,
    pub created_at: OffsetDateTime,
}
