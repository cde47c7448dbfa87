//! Order and order item models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Order status stored in the `order_status` Postgres enum
///
/// A closed set with no enforced transition graph: any status may follow any
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Delivered,
    Completed,
}

/// Order entity
///
/// Customer name/phone/address are snapshots captured at order time and stay
/// decoupled from later profile edits. `total_amount` is computed once at
/// creation and stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub notes: Option<String>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Order line item
///
/// `product_name` and `price` are immutable snapshots of the product at order
/// time; later product edits must not alter them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// An order together with its line items
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// One requested line in an order creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemInput {
    pub product_id: i32,
    pub quantity: i32,
}

/// Order creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderInput {
    pub user_id: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub notes: Option<String>,
    pub items: Vec<OrderItemInput>,
}

/// Order status update payload
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatusInput {
    pub status: OrderStatus,
}
