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

use super::model::{CreateLectureDto, LectureCreatedResponse, LectureResponse, LecturesResponse};
use super::service::LectureService;

/// List a course's lectures (subscribers and admins)
#[utoipa::path(
    get,
    path = "/api/courses/{id}/lectures",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Lectures of the course", body = LecturesResponse),
        (status = 400, description = "Not subscribed to this course", body = ErrorResponse),
        (status = 403, description = "Missing or unresolvable token", body = ErrorResponse)
    ),
    security(("token" = [])),
    tag = "Lectures"
)]
#[instrument(skip(state, user))]
pub async fn fetch_lectures(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<LecturesResponse>, AppError> {
    let lectures = LectureService::fetch_lectures(&state.db, &user, id).await?;
    Ok(Json(LecturesResponse { lectures }))
}

/// Fetch a single lecture (subscribers of its course and admins)
#[utoipa::path(
    get,
    path = "/api/lectures/{id}",
    params(("id" = Uuid, Path, description = "Lecture id")),
    responses(
        (status = 200, description = "The lecture", body = LectureResponse),
        (status = 400, description = "Not subscribed to this course", body = ErrorResponse),
        (status = 404, description = "No lecture with this ID", body = ErrorResponse)
    ),
    security(("token" = [])),
    tag = "Lectures"
)]
#[instrument(skip(state, user))]
pub async fn fetch_lecture(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<LectureResponse>, AppError> {
    let lecture = LectureService::fetch_lecture(&state.db, &user, id).await?;
    Ok(Json(LectureResponse { lecture }))
}

/// Add a lecture to a course (admin only)
#[utoipa::path(
    post,
    path = "/api/courses/{id}/lectures",
    params(("id" = Uuid, Path, description = "Course id")),
    request_body = CreateLectureDto,
    responses(
        (status = 201, description = "Lecture added successfully", body = LectureCreatedResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "No course with this ID", body = ErrorResponse)
    ),
    security(("token" = [])),
    tag = "Lectures"
)]
#[instrument(skip(state, _admin, dto))]
pub async fn add_lecture(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<CreateLectureDto>,
) -> Result<(StatusCode, Json<LectureCreatedResponse>), AppError> {
    let lecture = LectureService::add_lecture(&state.db, id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(LectureCreatedResponse {
            message: "Lecture added successfully".to_string(),
            lecture,
        }),
    ))
}

/// Delete a lecture (admin only)
#[utoipa::path(
    delete,
    path = "/api/lectures/{id}",
    params(("id" = Uuid, Path, description = "Lecture id")),
    responses(
        (status = 200, description = "Lecture Deleted", body = MessageResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "No lecture with this ID", body = ErrorResponse)
    ),
    security(("token" = [])),
    tag = "Lectures"
)]
#[instrument(skip(state, _admin))]
pub async fn delete_lecture(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    LectureService::delete_lecture(&state.db, id).await?;
    Ok(Json(MessageResponse {
        message: "Lecture Deleted".to_string(),
    }))
}
