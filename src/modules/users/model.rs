//! User data models and DTOs.
//!
//! The core [`User`] entity mirrors the `users` table, including the bcrypt
//! password hash and the subscription set of course ids. [`PublicUser`] is
//! the password-free projection used by admin listings.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A user in the system.
///
/// Note: the login and profile endpoints return this struct as-is, hashed
/// password included. That matches the existing API contract and is kept
/// deliberately; see DESIGN.md before changing the shape.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Bcrypt hash, never plaintext.
    pub password: String,
    /// One of `user`, `admin`, `superadmin`. Parsed through
    /// [`crate::middleware::role::UserRole`] wherever a decision is made.
    pub role: String,
    /// Course ids the user has purchased access to.
    pub subscription: Vec<Uuid>,
    /// Server-side expiry stamp for the password-reset flow. A reset token
    /// alone does not authorize a reset; this must also be non-null and in
    /// the future.
    pub reset_password_expire: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// User projection without the password hash, for admin listings.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub subscription: Vec<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            subscription: user.subscription,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Response for the admin user listing.
#[derive(Serialize, Debug, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<PublicUser>,
}

/// Response for the authenticated profile endpoint.
#[derive(Serialize, Debug, ToSchema)]
pub struct ProfileResponse {
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "$2b$12$hash".to_string(),
            role: "user".to_string(),
            subscription: vec![],
            reset_password_expire: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_public_user_drops_password() {
        let user = sample_user();
        let public = PublicUser::from(user.clone());

        let serialized = serde_json::to_string(&public).unwrap();
        assert!(!serialized.contains("password"));
        assert!(serialized.contains("jane@example.com"));
        assert_eq!(public.id, user.id);
    }

    #[test]
    fn test_user_serializes_full_document() {
        // The full user object, hash included, is part of the login
        // response contract.
        let serialized = serde_json::to_string(&sample_user()).unwrap();
        assert!(serialized.contains("password"));
        assert!(serialized.contains("reset_password_expire"));
    }
}
