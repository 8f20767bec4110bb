//! Role-based authorization.
//!
//! All role decisions go through one ordered capability set,
//! `user < admin < superadmin`, checked with [`check_min_role`]. Routers can
//! gate whole subtrees with the middleware functions ([`require_admin`],
//! [`require_superadmin`]); individual handlers can use the extractor forms
//! ([`RequireAdmin`], [`RequireSuperAdmin`]) which also hand back the
//! resolved user.

use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::User;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// The capability set. Ordering is significant: a role grants everything a
/// lower role grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UserRole {
    User,
    Admin,
    SuperAdmin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
            UserRole::SuperAdmin => "superadmin",
        }
    }

    pub fn parse(role: &str) -> Result<Self, AppError> {
        match role {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            "superadmin" => Ok(UserRole::SuperAdmin),
            other => Err(AppError::internal(anyhow!("Invalid role: {}", other))),
        }
    }
}

/// Check that the user's stored role meets the minimum required role.
pub fn check_min_role(user: &User, minimum: UserRole) -> Result<(), AppError> {
    let role = UserRole::parse(&user.role)?;

    if role < minimum {
        return Err(AppError::forbidden(anyhow!(match minimum {
            UserRole::SuperAdmin => "This endpoint is assigned to superadmin",
            _ => "You are not admin",
        })));
    }

    Ok(())
}

async fn require_min_role(
    state: AppState,
    req: Request,
    next: Next,
    minimum: UserRole,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthUser(user) = AuthUser::from_request_parts(&mut parts, &state).await?;
    check_min_role(&user, minimum)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Middleware for admin-only subrouters.
///
/// ```rust,ignore
/// let admin_routes = router.route_layer(middleware::from_fn_with_state(
///     state.clone(),
///     require_admin,
/// ));
/// ```
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_min_role(state, req, next, UserRole::Admin).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Middleware for superadmin-only routes (role management).
pub async fn require_superadmin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_min_role(state, req, next, UserRole::SuperAdmin).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Extractor form of the admin gate. Carries the resolved user so handlers
/// do not need a second `AuthUser` extraction.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub User);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;
        check_min_role(&user, UserRole::Admin)?;

        Ok(RequireAdmin(user))
    }
}

/// Extractor form of the superadmin gate.
#[derive(Debug, Clone)]
pub struct RequireSuperAdmin(pub User);

impl FromRequestParts<AppState> for RequireSuperAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;
        check_min_role(&user, UserRole::SuperAdmin)?;

        Ok(RequireSuperAdmin(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use uuid::Uuid;

    fn user_with_role(role: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            password: "hash".to_string(),
            role: role.to_string(),
            subscription: vec![],
            reset_password_expire: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_role_ordering() {
        assert!(UserRole::User < UserRole::Admin);
        assert!(UserRole::Admin < UserRole::SuperAdmin);
    }

    #[test]
    fn test_parse_role() {
        assert_eq!(UserRole::parse("user").unwrap(), UserRole::User);
        assert_eq!(UserRole::parse("admin").unwrap(), UserRole::Admin);
        assert_eq!(UserRole::parse("superadmin").unwrap(), UserRole::SuperAdmin);
        assert!(UserRole::parse("teacher").is_err());
    }

    #[test]
    fn test_user_fails_admin_gate() {
        let err = check_min_role(&user_with_role("user"), UserRole::Admin).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_admin_passes_admin_gate_but_not_superadmin() {
        let admin = user_with_role("admin");
        assert!(check_min_role(&admin, UserRole::Admin).is_ok());
        assert!(check_min_role(&admin, UserRole::User).is_ok());

        let err = check_min_role(&admin, UserRole::SuperAdmin).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_superadmin_passes_everything() {
        let superadmin = user_with_role("superadmin");
        assert!(check_min_role(&superadmin, UserRole::User).is_ok());
        assert!(check_min_role(&superadmin, UserRole::Admin).is_ok());
        assert!(check_min_role(&superadmin, UserRole::SuperAdmin).is_ok());
    }
}
