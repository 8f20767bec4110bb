//! Shared utilities.
//!
//! - [`email`]: SMTP mail collaborator (OTP and reset mail)
//! - [`errors`]: application error type and response mapping
//! - [`jwt`]: token service (activation, session, reset tokens)
//! - [`otp`]: one-time code generation
//! - [`password`]: bcrypt hashing and verification

pub mod email;
pub mod errors;
pub mod jwt;
pub mod otp;
pub mod password;
