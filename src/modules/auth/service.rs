use anyhow::anyhow;
use chrono::{Duration, Utc};
use sqlx::PgPool;
use tracing::{instrument, warn};

use crate::config::email::EmailConfig;
use crate::config::jwt::JwtConfig;
use crate::modules::users::model::User;
use crate::utils::email::EmailService;
use crate::utils::errors::AppError;
use crate::utils::jwt::{
    create_activation_token, create_reset_token, create_session_token, verify_activation_token,
    verify_reset_token,
};
use crate::utils::otp::generate_otp;
use crate::utils::password::{hash_password, verify_password};

use super::model::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, PendingRegistration, RegisterRequest,
    RegisterResponse, ResetPasswordRequest, VerifyRequest,
};

/// How long a reset token is honored after `forgot_password`, via the
/// server-side stamp on the user record.
const RESET_WINDOW_MINUTES: i64 = 5;

pub struct AuthService;

impl AuthService {
    /// First step of registration. No user row is created here: the pending
    /// registration (name, email, password hash) and the OTP travel inside
    /// the signed activation token, which the client must echo back at
    /// verification.
    #[instrument(skip(db, dto, jwt_config, email_config), fields(email = %dto.email))]
    pub async fn register(
        db: &PgPool,
        dto: RegisterRequest,
        jwt_config: &JwtConfig,
        email_config: &EmailConfig,
    ) -> Result<RegisterResponse, AppError> {
        let existing = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow!("User already exists")));
        }

        let pending = PendingRegistration {
            name: dto.name,
            email: dto.email,
            password: hash_password(&dto.password)?,
        };

        let otp = generate_otp();
        let activation_token = create_activation_token(&pending, otp, jwt_config)?;

        // Fire-and-forget: a lost mail is not distinguished from success.
        let mailer = EmailService::new(email_config.clone());
        if let Err(e) = mailer
            .send_otp_email(&pending.email, &pending.name, otp)
            .await
        {
            warn!(email = %pending.email, error = %e.error, "Failed to send OTP email");
        }

        Ok(RegisterResponse {
            message: "Otp sent to your mail".to_string(),
            activation_token,
        })
    }

    /// Second, terminal step of registration: consume the activation token,
    /// check the OTP against the one embedded in it, and create the user.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn verify(
        db: &PgPool,
        dto: VerifyRequest,
        jwt_config: &JwtConfig,
    ) -> Result<(), AppError> {
        let claims = verify_activation_token(&dto.activation_token, jwt_config)?;

        if claims.otp != dto.otp {
            return Err(AppError::bad_request(anyhow!("Incorrect OTP")));
        }

        sqlx::query(
            "INSERT INTO users (name, email, password) VALUES ($1, $2, $3)",
        )
        .bind(&claims.user.name)
        .bind(&claims.user.email)
        .bind(&claims.user.password)
        .execute(db)
        .await?;

        Ok(())
    }

    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::bad_request(anyhow!("Invalid User")))?;

        if !verify_password(&dto.password, &user.password)? {
            return Err(AppError::bad_request(anyhow!("Incorrect Password")));
        }

        let token = create_session_token(user.id, jwt_config)?;

        Ok(LoginResponse {
            message: format!("Welcome back {}", user.name),
            token,
            user,
        })
    }

    /// Issue a reset token and stamp the user record with the 5-minute
    /// window. The token alone does not authorize a reset; the stamp must
    /// also be unexpired when the token comes back.
    #[instrument(skip(db, dto, jwt_config, email_config), fields(email = %dto.email))]
    pub async fn forgot_password(
        db: &PgPool,
        dto: ForgotPasswordRequest,
        jwt_config: &JwtConfig,
        email_config: &EmailConfig,
    ) -> Result<(), AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("No user with this email")))?;

        let token = create_reset_token(&user.email, jwt_config)?;

        // Fire-and-forget, same contract as the OTP mail.
        let mailer = EmailService::new(email_config.clone());
        if let Err(e) = mailer.send_reset_email(&user.email, &token).await {
            warn!(email = %user.email, error = %e.error, "Failed to send reset email");
        }

        let expire = Utc::now() + Duration::minutes(RESET_WINDOW_MINUTES);
        sqlx::query(
            "UPDATE users SET reset_password_expire = $1, updated_at = now() WHERE id = $2",
        )
        .bind(expire)
        .bind(user.id)
        .execute(db)
        .await?;

        Ok(())
    }

    /// Consume a reset token. Both checks are required: a valid signature
    /// AND a non-null, unexpired stamp on the user record.
    #[instrument(skip(db, token, dto, jwt_config))]
    pub async fn reset_password(
        db: &PgPool,
        token: &str,
        dto: ResetPasswordRequest,
        jwt_config: &JwtConfig,
    ) -> Result<(), AppError> {
        let claims = verify_reset_token(token, jwt_config)?;

        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(&claims.email)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("No user with this email")))?;

        match user.reset_password_expire {
            Some(expire) if expire > Utc::now() => {}
            _ => return Err(AppError::bad_request(anyhow!("Reset token expired"))),
        }

        let hashed = hash_password(&dto.password)?;

        sqlx::query(
            "UPDATE users SET password = $1, reset_password_expire = NULL, updated_at = now() \
             WHERE id = $2",
        )
        .bind(&hashed)
        .bind(user.id)
        .execute(db)
        .await?;

        Ok(())
    }
}
