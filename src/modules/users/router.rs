use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{get_all_users, update_role};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_users))
        .route("/{id}/role", put(update_role))
}
