use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, RefreshRequest, RegisterAck, RegisterRequest, TokenResponse},
        repo_types::NewProfile,
        services::{hash_password, is_valid_email, verify_password, JwtKeys},
        Account,
    },
    error::AppError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterAck>), AppError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(AppError::Validation("Invalid email".into()));
    }

    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(AppError::Validation("Password too short".into()));
    }

    // Pre-check; the unique constraint catches the race at commit time.
    if Account::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(AppError::DuplicateAccount);
    }

    let hash = hash_password(&payload.password)?;

    let profile = NewProfile {
        name: payload.name,
        age: payload.age,
        gender: payload.gender,
        profile_image: payload.profile_image,
    };
    let account = Account::create_with_profile(&state.db, &payload.email, &hash, &profile).await?;

    info!(account_id = %account.id, email = %account.email, "account registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterAck {
            message: "account created".into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    payload.email = payload.email.trim().to_lowercase();

    let account = match Account::find_by_email(&state.db, &payload.email).await? {
        Some(a) => a,
        None => {
            warn!(email = %payload.email, "login unknown email");
            return Err(AppError::InvalidCredentials);
        }
    };

    if !verify_password(&payload.password, &account.password_hash)? {
        warn!(email = %payload.email, account_id = %account.id, "login invalid password");
        return Err(AppError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign_access(account.id)?;
    let refresh_token = keys.sign_refresh(account.id)?;

    info!(account_id = %account.id, email = %account.email, "login succeeded");
    Ok(Json(TokenResponse {
        access_token,
        refresh_token,
    }))
}

#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys
        .verify_refresh(&payload.refresh_token)
        .map_err(|_| AppError::InvalidCredentials)?;

    // Issue a new pair
    let access_token = keys.sign_access(claims.sub)?;
    let refresh_token = keys.sign_refresh(claims.sub)?;

    Ok(Json(TokenResponse {
        access_token,
        refresh_token,
    }))
}
