//! Session authentication.
//!
//! Session tokens travel in a request header named `token` rather than the
//! standard `Authorization: Bearer` header. This is a compatibility
//! requirement of the existing API clients, not an oversight.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::modules::users::model::User;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_session_token;

pub const TOKEN_HEADER: &str = "token";

/// Extractor that validates the session token and resolves it to the stored
/// user record, which is handed to the downstream handler.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::forbidden(anyhow::anyhow!("Token missing")))?;

        let claims = verify_session_token(token, &state.jwt_config)?;

        let user_id = uuid::Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid user ID in token")))?;

        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&state.db)
            .await?
            .ok_or_else(|| {
                AppError::forbidden(anyhow::anyhow!("Invalid Token - User Not Found"))
            })?;

        Ok(AuthUser(user))
    }
}
