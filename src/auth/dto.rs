use jsonwebtoken::{DecodingKey, EncodingKey};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Token type used to distinguish Access and Refresh JWTs.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    #[serde(alias = "Access")]
    Access,
    #[serde(alias = "Refresh")]
    Refresh,
}

/// Standard JWT claims used in the app.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,       // account ID
    pub exp: usize,      // expiration time
    pub iat: usize,      // issued at
    pub iss: String,     // issuer
    pub aud: String,     // audience
    pub kind: TokenKind, // access or refresh
}

/// Holds JWT signing and verification keys with config data.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub issuer: String,
    pub audience: String,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

/// Request body for account registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub age: i32,
    pub gender: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for token refresh.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Acknowledgment returned after registration. Deliberately carries no
/// account identifier or credential material.
#[derive(Debug, Serialize)]
pub struct RegisterAck {
    pub message: String,
}

/// Token pair returned after login or refresh.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_accepts_null_profile_image() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"email":"a@x.com","password":"pw123456","name":"Kim","age":20,"gender":"M","profile_image":null}"#,
        )
        .unwrap();
        assert_eq!(req.email, "a@x.com");
        assert_eq!(req.age, 20);
        assert!(req.profile_image.is_none());
    }

    #[test]
    fn register_request_profile_image_is_optional() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"email":"a@x.com","password":"pw123456","name":"Kim","age":20,"gender":"M"}"#,
        )
        .unwrap();
        assert!(req.profile_image.is_none());
    }

    #[test]
    fn register_ack_serializes_message_only() {
        let ack = RegisterAck {
            message: "account created".into(),
        };
        let json = serde_json::to_value(&ack).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "account created" }));
    }
}
