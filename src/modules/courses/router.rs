use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    checkout, create_course, delete_course, get_all_courses, get_my_courses, get_single_course,
};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_courses).post(create_course))
        .route("/my", get(get_my_courses))
        .route("/{id}", get(get_single_course).delete(delete_course))
        .route("/{id}/checkout", post(checkout))
}
