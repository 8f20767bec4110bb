//! Application configuration.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables once at startup and carried in
//! [`crate::state::AppState`].
//!
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`email`]: SMTP settings for OTP and password-reset mail
//! - [`jwt`]: token secrets and lifetimes

pub mod cors;
pub mod database;
pub mod email;
pub mod jwt;
