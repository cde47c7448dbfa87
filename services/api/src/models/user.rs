//! User model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User role stored in the `user_role` Postgres enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Customer,
    Admin,
}

/// User entity
///
/// The `password` field holds the argon2 hash at rest; responses scrub it to
/// an empty string before serialization.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Blank out the password hash before the user leaves the API boundary
    pub fn scrubbed(mut self) -> Self {
        self.password = String::new();
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Registration payload
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserInput {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

/// Login payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Profile update payload
///
/// `phone` is double-optional: absent leaves the column untouched, explicit
/// null clears it.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateUserInput {
    pub email: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub phone: Option<Option<String>>,
}

/// Response for register and login
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}
