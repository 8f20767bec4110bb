use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::users::model::User;

/// Claims of a long-lived session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User id.
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}

/// A registration waiting for OTP confirmation. Never persisted: the whole
/// payload lives inside the signed activation token, so verification needs
/// no server-side pending-user table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingRegistration {
    pub name: String,
    pub email: String,
    /// Bcrypt hash, computed before the token is issued.
    pub password: String,
}

/// Claims of a short-lived activation token.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivationClaims {
    pub user: PendingRegistration,
    pub otp: u32,
    pub exp: usize,
    pub iat: usize,
}

/// Claims of a password-reset token. Deliberately has no `exp`: expiry is
/// enforced through the `reset_password_expire` stamp on the user record.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetClaims {
    pub email: String,
    pub iat: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub activation_token: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VerifyRequest {
    pub otp: u32,
    #[validate(length(min = 1))]
    pub activation_token: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Login response. `user` is the full stored document, password hash
/// included; see DESIGN.md before changing the shape.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: User,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ForgotPasswordRequest {
    #[validate(email)]
    pub email: String,
}

/// The reset token arrives as a query parameter, matching the link sent in
/// the reset mail.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ResetPasswordQuery {
    pub token: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 8))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
