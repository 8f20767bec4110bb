use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{add_lecture, delete_lecture, fetch_lecture, fetch_lectures};

/// Routes nested under `/api/courses/{id}/lectures`.
pub fn init_course_lectures_router() -> Router<AppState> {
    Router::new().route("/", get(fetch_lectures).post(add_lecture))
}

/// Routes nested under `/api/lectures`.
pub fn init_lectures_router() -> Router<AppState> {
    Router::new().route("/{id}", get(fetch_lecture).delete(delete_lecture))
}
