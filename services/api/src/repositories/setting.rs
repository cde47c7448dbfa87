//! Settings repository for database operations

use sqlx::PgPool;
use tracing::info;

use crate::error::ApiResult;
use crate::models::Setting;

/// Settings repository
#[derive(Clone)]
pub struct SettingRepository {
    pool: PgPool,
}

impl SettingRepository {
    /// Create a new settings repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a setting by key; callers decide the fallback default
    pub async fn get(&self, key: &str) -> ApiResult<Option<Setting>> {
        let setting = sqlx::query_as::<_, Setting>(
            r#"
            SELECT id, key, value, created_at, updated_at
            FROM settings
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(setting)
    }

    /// Insert a setting or overwrite its value, refreshing `updated_at`
    pub async fn upsert(&self, key: &str, value: &str) -> ApiResult<Setting> {
        info!("Upserting setting: {}", key);

        let setting = sqlx::query_as::<_, Setting>(
            r#"
            INSERT INTO settings (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key)
            DO UPDATE SET value = EXCLUDED.value, updated_at = now()
            RETURNING id, key, value, created_at, updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .fetch_one(&self.pool)
        .await?;

        Ok(setting)
    }
}
