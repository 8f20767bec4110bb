//! Token service: issuing and verifying the three token kinds.
//!
//! All tokens are HS256-signed with symmetric secrets from [`JwtConfig`].
//! Verification never surfaces raw jsonwebtoken errors; tampered or expired
//! tokens come back as structured [`AppError`] values with the wire message
//! the clients expect.

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::{ActivationClaims, PendingRegistration, ResetClaims, SessionClaims};
use crate::utils::errors::AppError;

/// Issue a session token binding to a user id. Valid for
/// `jwt_config.session_expiry` seconds (15 days by default).
pub fn create_session_token(user_id: Uuid, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = (now as i64 + jwt_config.session_expiry) as usize;

    let claims = SessionClaims {
        sub: user_id.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.session_secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create session token: {}", e)))
}

/// Verify a session token. Expired, tampered, and malformed tokens are all
/// rejected uniformly.
pub fn verify_session_token(
    token: &str,
    jwt_config: &JwtConfig,
) -> Result<SessionClaims, AppError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.session_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow!("Invalid or expired token")))
}

/// Issue an activation token embedding the pending registration and its OTP
/// challenge. Valid for `jwt_config.activation_expiry` seconds (5 minutes by
/// default). The server holds no state for the pending registration; the
/// client must echo this token back at verification.
pub fn create_activation_token(
    pending: &PendingRegistration,
    otp: u32,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = (now as i64 + jwt_config.activation_expiry) as usize;

    let claims = ActivationClaims {
        user: pending.clone(),
        otp,
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.activation_secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create activation token: {}", e)))
}

/// Verify an activation token, recovering the pending registration and OTP.
/// The "OTP expired" message is the established wire contract for both the
/// expired and the tampered case.
pub fn verify_activation_token(
    token: &str,
    jwt_config: &JwtConfig,
) -> Result<ActivationClaims, AppError> {
    decode::<ActivationClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.activation_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::bad_request(anyhow!("OTP expired")))
}

/// Issue a reset token binding to an email. Carries no expiry claim: the
/// 5-minute window is enforced through the `reset_password_expire` stamp on
/// the user record, and both checks must pass.
pub fn create_reset_token(email: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let claims = ResetClaims {
        email: email.to_string(),
        iat: Utc::now().timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.reset_secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create reset token: {}", e)))
}

/// Verify a reset token signature. Expiry validation is disabled here since
/// the claims carry no `exp`; callers must still check the user's stamp.
pub fn verify_reset_token(token: &str, jwt_config: &JwtConfig) -> Result<ResetClaims, AppError> {
    let mut validation = Validation::default();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<ResetClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.reset_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::bad_request(anyhow!("Invalid reset token")))
}
