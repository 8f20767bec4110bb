//! Feature modules.
//!
//! Each module follows the same structure: `model.rs` (entities and DTOs),
//! `service.rs` (business logic), `controller.rs` (HTTP handlers),
//! `router.rs` (route wiring).
//!
//! - [`auth`]: registration (OTP-gated), login, password reset, profile
//! - [`users`]: admin user listing and role management
//! - [`courses`]: course catalog, checkout, admin course management, stats
//! - [`lectures`]: subscription-gated lecture access, admin lecture management

pub mod auth;
pub mod courses;
pub mod lectures;
pub mod users;
