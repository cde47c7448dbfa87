//! User repository for database operations

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::models::{RegisterUserInput, UpdateUserInput, User, UserRole};

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user with a hashed password
    pub async fn create(&self, input: &RegisterUserInput) -> ApiResult<User> {
        info!("Creating new user: {}", input.email);

        let password_hash = hash_password(&input.password)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password, name, phone, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, password, name, phone, role, created_at, updated_at
            "#,
        )
        .bind(&input.email)
        .bind(&password_hash)
        .bind(&input.name)
        .bind(&input.phone)
        .bind(input.role)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by email
    pub async fn find_by_email(&self, email: &str) -> ApiResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, name, phone, role, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: i32) -> ApiResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, name, phone, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Verify a user's password against the stored argon2 hash
    pub fn verify_password(&self, user: &User, password: &str) -> ApiResult<bool> {
        let parsed_hash = PasswordHash::new(&user.password)
            .map_err(|e| anyhow::anyhow!("Failed to parse password hash: {}", e))?;

        let argon2 = Argon2::default();
        let result = argon2.verify_password(password.as_bytes(), &parsed_hash);

        Ok(result.is_ok())
    }

    /// Apply a partial profile update, refreshing `updated_at`
    ///
    /// Absent fields are left untouched; an explicit null phone clears the
    /// column. Returns `None` when the user does not exist.
    pub async fn update(&self, id: i32, input: &UpdateUserInput) -> ApiResult<Option<User>> {
        info!("Updating user profile: {}", id);

        let mut query: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET updated_at = now()");

        if let Some(email) = &input.email {
            query.push(", email = ").push_bind(email);
        }
        if let Some(name) = &input.name {
            query.push(", name = ").push_bind(name);
        }
        if let Some(phone) = &input.phone {
            query.push(", phone = ").push_bind(phone.clone());
        }

        query.push(" WHERE id = ").push_bind(id);
        query.push(" RETURNING id, email, password, name, phone, role, created_at, updated_at");

        let user = query
            .build_query_as::<User>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// True when at least one admin user exists
    pub async fn admin_exists(&self) -> ApiResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = $1")
            .bind(UserRole::Admin)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}

/// Hash a plaintext password with a freshly generated salt
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
        .to_string();

    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_never_stores_plaintext() {
        let hash = hash_password("admin123").unwrap();
        assert_ne!(hash, "admin123");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("admin123").unwrap();
        let b = hash_password("admin123").unwrap();
        assert_ne!(a, b);
    }
}
