use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    CheckoutResponse, CourseResponse, CoursesResponse, CreateCourseDto, StatsResponse,
};
use super::service::CourseService;

/// List all courses
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "All courses", body = CoursesResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_all_courses(
    State(state): State<AppState>,
) -> Result<Json<CoursesResponse>, AppError> {
    let courses = CourseService::get_all(&state.db).await?;
    Ok(Json(CoursesResponse { courses }))
}

/// Fetch a single course
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "The course", body = CourseResponse),
        (status = 404, description = "No course with this ID", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_single_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseResponse>, AppError> {
    let course = CourseService::get_single(&state.db, id).await?;
    Ok(Json(CourseResponse { course }))
}

/// Courses the requester created (admin) or subscribed to (user)
#[utoipa::path(
    get,
    path = "/api/courses/my",
    responses(
        (status = 200, description = "The requester's courses", body = CoursesResponse),
        (status = 403, description = "Missing or unresolvable token", body = ErrorResponse)
    ),
    security(("token" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, user))]
pub async fn get_my_courses(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<CoursesResponse>, AppError> {
    let courses = CourseService::get_my_courses(&state.db, &user).await?;
    Ok(Json(CoursesResponse { courses }))
}

/// Purchase a course subscription
#[utoipa::path(
    post,
    path = "/api/courses/{id}/checkout",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Purchase recorded", body = CheckoutResponse),
        (status = 400, description = "Already subscribed", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("token" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, user))]
pub async fn checkout(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<CheckoutResponse>, AppError> {
    let payment = CourseService::checkout(&state.db, &user, id).await?;
    Ok(Json(CheckoutResponse {
        message: "Course purchased successfully".to_string(),
        payment_id: payment.id,
    }))
}

/// Create a course (admin only)
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course Created Successfully", body = MessageResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse)
    ),
    security(("token" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, admin, dto))]
pub async fn create_course(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    CourseService::create_course(&state.db, dto, admin.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Course Created Successfully".to_string(),
        }),
    ))
}

/// Delete a course, its lectures, and all subscription references (admin only)
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course Deleted", body = MessageResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "No course with this ID", body = ErrorResponse)
    ),
    security(("token" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, _admin))]
pub async fn delete_course(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    CourseService::delete_course(&state.db, id).await?;
    Ok(Json(MessageResponse {
        message: "Course Deleted".to_string(),
    }))
}

/// Platform totals (admin only)
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Totals for courses, lectures, users", body = StatsResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse)
    ),
    security(("token" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, _admin))]
pub async fn get_all_stats(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = CourseService::get_stats(&state.db).await?;
    Ok(Json(StatsResponse { stats }))
}
