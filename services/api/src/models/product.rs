//! Product model and related functionality

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Product entity
///
/// Products are never hard-deleted; `is_active = false` marks them as removed
/// while historical order items keep a valid reference.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Product update payload
///
/// Absent fields leave columns untouched; `description` and `image_url` are
/// double-optional so explicit null clears them.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub description: Option<Option<String>>,
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub image_url: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl UpdateProductInput {
    /// True when the payload carries no field at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.image_url.is_none()
            && self.is_active.is_none()
    }
}
