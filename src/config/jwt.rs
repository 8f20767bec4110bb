use std::env;

/// Secrets and lifetimes for the three token kinds. Loaded once at startup
/// and carried in [`crate::state::AppState`]; business logic never reads the
/// environment directly.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// Secret for long-lived session tokens.
    pub session_secret: String,
    /// Secret for activation tokens issued at registration.
    pub activation_secret: String,
    /// Secret for password-reset tokens. Reset tokens carry no expiry claim;
    /// expiry is enforced through the stamp on the user record.
    pub reset_secret: String,
    /// Session token lifetime in seconds.
    pub session_expiry: i64,
    /// Activation token lifetime in seconds.
    pub activation_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            session_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            activation_secret: env::var("JWT_ACTIVATION_SECRET")
                .unwrap_or_else(|_| "your-activation-secret-change-in-production".to_string()),
            reset_secret: env::var("JWT_RESET_SECRET")
                .unwrap_or_else(|_| "your-reset-secret-change-in-production".to_string()),
            session_expiry: env::var("JWT_SESSION_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1_296_000), // 15 days
            activation_expiry: env::var("JWT_ACTIVATION_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(300), // 5 minutes
        }
    }
}
