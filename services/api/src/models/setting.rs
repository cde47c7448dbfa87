//! Key/value configuration settings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Setting key holding the admin WhatsApp contact number
pub const ADMIN_WHATSAPP_KEY: &str = "admin_whatsapp";

/// Configuration row, one value per unique key
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Setting {
    pub id: i32,
    pub key: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Setting upsert payload; the key comes from the request path
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSettingInput {
    pub value: String,
}
