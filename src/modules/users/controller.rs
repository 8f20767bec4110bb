use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::{RequireAdmin, RequireSuperAdmin};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::UsersResponse;
use super::service::UserService;

/// List all users except the requester (admin only)
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users without password hashes", body = UsersResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse)
    ),
    security(("token" = [])),
    tag = "Users"
)]
#[instrument(skip(state, admin))]
pub async fn get_all_users(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> Result<Json<UsersResponse>, AppError> {
    let users = UserService::get_all_users(&state.db, admin.id).await?;
    Ok(Json(UsersResponse { users }))
}

/// Toggle a user's role between user and admin (superadmin only)
#[utoipa::path(
    put,
    path = "/api/users/{id}/role",
    params(("id" = Uuid, Path, description = "Target user id")),
    responses(
        (status = 200, description = "Role updated", body = MessageResponse),
        (status = 400, description = "Target is a superadmin", body = ErrorResponse),
        (status = 403, description = "Not a superadmin", body = ErrorResponse),
        (status = 404, description = "No user with this ID", body = ErrorResponse)
    ),
    security(("token" = [])),
    tag = "Users"
)]
#[instrument(skip(state, _superadmin))]
pub async fn update_role(
    State(state): State<AppState>,
    _superadmin: RequireSuperAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = UserService::update_role(&state.db, id).await?;
    Ok(Json(MessageResponse { message }))
}
