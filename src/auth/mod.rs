use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod repo;
mod repo_types;
pub mod services;

pub use repo_types::Account;
pub use services::AuthUser;

pub fn router() -> Router<AppState> {
    handlers::auth_routes()
}
