use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

use super::controller::{forgot_password, login, my_profile, register, reset_password, verify};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/verify", post(verify))
        .route("/login", post(login))
        .route("/me", get(my_profile))
        .route("/forgot-password", post(forgot_password))
        .route("/reset-password", put(reset_password))
}
