//! Request guards.
//!
//! - [`auth`]: resolves the `token` header to a stored user ([`auth::AuthUser`])
//! - [`role`]: minimum-role checks over the `user < admin < superadmin`
//!   capability set, as both router middleware and extractors
//!
//! # Flow
//!
//! 1. Client sends a request with a `token` header
//! 2. [`auth::AuthUser`] verifies the JWT and loads the user row
//! 3. Role gates compare the stored role against the route's minimum
//! 4. The handler runs with the resolved [`crate::modules::users::model::User`]

pub mod auth;
pub mod role;
