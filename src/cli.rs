//! Out-of-band administration commands.
//!
//! Superadmins cannot be created through the API; the only way in is the
//! `create-superadmin` process argument handled in `main`.

use anyhow::{Context, Result, anyhow};
use sqlx::PgPool;

use crate::utils::password::hash_password;

/// Create a superadmin account. Fails if the email is already taken.
pub async fn create_superadmin(
    pool: &PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> Result<()> {
    let existing: Option<(uuid::Uuid,)> =
        sqlx::query_as("SELECT id FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
            .context("Failed to look up existing user")?;

    if existing.is_some() {
        return Err(anyhow!("A user with email {} already exists", email));
    }

    let hashed = hash_password(password).map_err(|e| e.error)?;

    sqlx::query("INSERT INTO users (name, email, password, role) VALUES ($1, $2, $3, 'superadmin')")
        .bind(name)
        .bind(email)
        .bind(&hashed)
        .execute(pool)
        .await
        .context("Failed to insert superadmin")?;

    Ok(())
}
