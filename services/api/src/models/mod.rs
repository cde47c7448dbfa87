//! Storefront service models

use serde::{Deserialize, Deserializer};

pub mod order;
pub mod product;
pub mod setting;
pub mod user;

// Re-export for convenience
pub use order::{
    CreateOrderInput, Order, OrderItem, OrderItemInput, OrderStatus, OrderWithItems,
    UpdateOrderStatusInput,
};
pub use product::{CreateProductInput, Product, UpdateProductInput};
pub use setting::{Setting, UpdateSettingInput};
pub use user::{AuthResponse, LoginInput, RegisterUserInput, UpdateUserInput, User, UserRole};

/// Deserialize a field that distinguishes "absent" from "explicit null"
///
/// Absent fields stay `None` via `#[serde(default)]`; a present field becomes
/// `Some(None)` for JSON null or `Some(Some(value))` otherwise. Partial update
/// payloads use this to clear nullable columns.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
