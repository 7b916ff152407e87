use axum::{
    extract::State,
    routing::{get, patch},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::AuthUser,
    error::AppError,
    profile::{
        dto::{ProfileView, UpdateAck, UpdateProfileRequest},
        repo, AuditRecord, Profile, ProfileUpdate,
    },
    state::AppState,
};

pub fn me_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_me))
        .route("/me/profile", patch(update_profile))
        .route("/me/history", get(get_history))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(account_id): AuthUser,
) -> Result<Json<ProfileView>, AppError> {
    let view = repo::fetch_view(&state.db, account_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(view))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(account_id): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UpdateAck>, AppError> {
    let update = ProfileUpdate::from(payload);
    let changes = Profile::update_with_audit(&state.db, account_id, &update)
        .await?
        .ok_or(AppError::NotFound)?;

    info!(
        account_id = %account_id,
        changed_fields = changes.len(),
        "profile updated"
    );
    Ok(Json(UpdateAck {
        message: "profile updated".into(),
    }))
}

#[instrument(skip(state))]
pub async fn get_history(
    State(state): State<AppState>,
    AuthUser(account_id): AuthUser,
) -> Result<Json<Vec<AuditRecord>>, AppError> {
    let records = AuditRecord::list_by_account(&state.db, account_id).await?;
    Ok(Json(records))
}
