use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::UserRole;
use crate::utils::errors::AppError;

use super::model::{PublicUser, User};

pub struct UserService;

impl UserService {
    /// All users except the requester, password excluded.
    #[instrument(skip(db))]
    pub async fn get_all_users(db: &PgPool, requester_id: Uuid) -> Result<Vec<PublicUser>, AppError> {
        let users = sqlx::query_as::<_, PublicUser>(
            "SELECT id, name, email, role, subscription, created_at, updated_at \
             FROM users WHERE id <> $1 ORDER BY created_at",
        )
        .bind(requester_id)
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    /// Toggle a user's role between `user` and `admin`. Superadmins are not
    /// toggleable; the superadmin role is only granted out of band.
    #[instrument(skip(db))]
    pub async fn update_role(db: &PgPool, target_id: Uuid) -> Result<String, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(target_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("No user with this ID")))?;

        let (new_role, message) = match UserRole::parse(&user.role)? {
            UserRole::User => (UserRole::Admin, "Role Updated to Admin"),
            UserRole::Admin => (UserRole::User, "Role Updated"),
            UserRole::SuperAdmin => {
                return Err(AppError::bad_request(anyhow!(
                    "Cannot change the role of a superadmin"
                )));
            }
        };

        sqlx::query("UPDATE users SET role = $1, updated_at = now() WHERE id = $2")
            .bind(new_role.as_str())
            .bind(user.id)
            .execute(db)
            .await?;

        Ok(message.to_string())
    }
}
