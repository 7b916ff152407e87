use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::profile::repo_types::ProfileUpdate;

/// Joined Account + Profile projection returned to the client. The
/// password hash is never selected into this view.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProfileView {
    pub id: Uuid,
    pub email: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub profile_image: Option<String>,
}

/// Partial profile update. Unknown fields are rejected outright rather
/// than silently written. `profile_image` distinguishes an absent key
/// from an explicit null so the image reference can be cleared.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub profile_image: Option<Option<String>>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            name: req.name,
            age: req.age,
            gender: req.gender,
            profile_image: req.profile_image,
        }
    }
}

/// Acknowledgment returned after a profile update. No diff summary.
#[derive(Debug, Serialize)]
pub struct UpdateAck {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_are_rejected() {
        let err = serde_json::from_str::<UpdateProfileRequest>(r#"{"role":"admin"}"#).unwrap_err();
        assert!(err.to_string().contains("role"));
    }

    #[test]
    fn absent_profile_image_is_not_a_change() {
        let req: UpdateProfileRequest = serde_json::from_str(r#"{"age":21}"#).unwrap();
        assert_eq!(req.age, Some(21));
        assert!(req.profile_image.is_none());
    }

    #[test]
    fn null_profile_image_clears_the_field() {
        let req: UpdateProfileRequest =
            serde_json::from_str(r#"{"profile_image":null}"#).unwrap();
        assert_eq!(req.profile_image, Some(None));
    }

    #[test]
    fn empty_body_deserializes_to_no_updates() {
        let req: UpdateProfileRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_none());
        assert!(req.age.is_none());
        assert!(req.gender.is_none());
        assert!(req.profile_image.is_none());
    }

    #[test]
    fn view_never_contains_a_password_hash() {
        let view = ProfileView {
            id: Uuid::new_v4(),
            email: "a@x.com".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
            name: "Kim".into(),
            age: 20,
            gender: "M".into(),
            profile_image: None,
        };
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("a@x.com"));
        assert!(!json.contains("password"));
        assert!(!json.contains("hash"));
    }
}
