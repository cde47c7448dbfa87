//! One-time admin seed
//!
//! Ensures exactly one default admin account exists so the back office is
//! reachable on a fresh database. Skips silently when any admin is present.

use tracing::info;

use crate::error::ApiResult;
use crate::models::{RegisterUserInput, User, UserRole};
use crate::repositories::UserRepository;

const DEFAULT_ADMIN_EMAIL: &str = "admin@demo.com";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Create the default admin user if no admin exists yet
///
/// Returns the created user (password scrubbed) or `None` when seeding was
/// skipped. Idempotent across restarts.
pub async fn seed_admin_user(users: &UserRepository) -> ApiResult<Option<User>> {
    if users.admin_exists().await? {
        info!("Admin user already exists, skipping seed");
        return Ok(None);
    }

    info!("Creating default admin user: {}", DEFAULT_ADMIN_EMAIL);

    let admin = users
        .create(&RegisterUserInput {
            email: DEFAULT_ADMIN_EMAIL.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
            name: "Admin User".to_string(),
            phone: None,
            role: UserRole::Admin,
        })
        .await?;

    info!("Default admin user created (change the password in production)");

    Ok(Some(admin.scrubbed()))
}
