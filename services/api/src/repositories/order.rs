//! Order repository for database operations
//!
//! Order creation is the one multi-statement unit in the system: the order
//! row and all of its items commit in a single transaction so readers never
//! observe a partial order.

use rust_decimal::Decimal;
use sqlx::PgPool;
use std::collections::HashMap;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::models::{CreateOrderInput, Order, OrderItem, OrderStatus, OrderWithItems, Product};

/// Order repository
#[derive(Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Create a new order repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create an order with its line items
    ///
    /// Every referenced product must exist and be active. The total is the
    /// sum of current product prices times quantities; each item captures the
    /// product name and price as of this moment.
    pub async fn create(&self, input: &CreateOrderInput) -> ApiResult<OrderWithItems> {
        info!("Creating order for user: {}", input.user_id);

        let mut tx = self.pool.begin().await?;

        // Batch-load every referenced product
        let product_ids: Vec<i32> = input.items.iter().map(|item| item.product_id).collect();
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, image_url, is_active, created_at, updated_at
            FROM products
            WHERE id = ANY($1)
            "#,
        )
        .bind(&product_ids)
        .fetch_all(&mut *tx)
        .await?;

        let product_map: HashMap<i32, &Product> = products.iter().map(|p| (p.id, p)).collect();

        for item in &input.items {
            let product = product_map
                .get(&item.product_id)
                .ok_or(ApiError::ProductNotFound(item.product_id))?;
            if !product.is_active {
                return Err(ApiError::ProductInactive(product.name.clone()));
            }
        }

        // Total from current prices; items snapshot the same values below
        let total_amount: Decimal = input
            .items
            .iter()
            .map(|item| product_map[&item.product_id].price * Decimal::from(item.quantity))
            .sum();

        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (user_id, customer_name, customer_phone, customer_address, notes, total_amount)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, customer_name, customer_phone, customer_address, notes,
                      total_amount, status, created_at, updated_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.customer_name)
        .bind(&input.customer_phone)
        .bind(&input.customer_address)
        .bind(&input.notes)
        .bind(total_amount)
        .fetch_one(&mut *tx)
        .await?;

        let mut items = Vec::with_capacity(input.items.len());
        for item in &input.items {
            let product = product_map[&item.product_id];
            let order_item = sqlx::query_as::<_, OrderItem>(
                r#"
                INSERT INTO order_items (order_id, product_id, product_name, quantity, price)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, order_id, product_id, product_name, quantity, price, created_at
                "#,
            )
            .bind(order.id)
            .bind(item.product_id)
            .bind(&product.name)
            .bind(item.quantity)
            .bind(product.price)
            .fetch_one(&mut *tx)
            .await?;
            items.push(order_item);
        }

        tx.commit().await?;

        Ok(OrderWithItems { order, items })
    }

    /// List every order with its items attached (admin view)
    ///
    /// Orders without items keep an empty item list.
    pub async fn list_all(&self) -> ApiResult<Vec<OrderWithItems>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, user_id, customer_name, customer_phone, customer_address, notes,
                   total_amount, status, created_at, updated_at
            FROM orders
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, product_id, product_name, quantity, price, created_at
            FROM order_items
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(attach_items(orders, items))
    }

    /// List one user's orders with items, newest first
    pub async fn list_for_user(&self, user_id: i32) -> ApiResult<Vec<OrderWithItems>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, user_id, customer_name, customer_phone, customer_address, notes,
                   total_amount, status, created_at, updated_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let order_ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, product_id, product_name, quantity, price, created_at
            FROM order_items
            WHERE order_id = ANY($1)
            "#,
        )
        .bind(&order_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(attach_items(orders, items))
    }

    /// Set an order's status, refreshing `updated_at`
    ///
    /// No transition graph is enforced: any status may follow any other.
    /// Returns `None` when the order does not exist.
    pub async fn update_status(&self, id: i32, status: OrderStatus) -> ApiResult<Option<Order>> {
        info!("Updating order {} status", id);

        let order = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET status = $2, updated_at = now()
            WHERE id = $1
            RETURNING id, user_id, customer_name, customer_phone, customer_address, notes,
                      total_amount, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }
}

/// Group items by order id, preserving the incoming order of `orders`
fn attach_items(orders: Vec<Order>, items: Vec<OrderItem>) -> Vec<OrderWithItems> {
    let mut items_by_order: HashMap<i32, Vec<OrderItem>> = HashMap::new();
    for item in items {
        items_by_order.entry(item.order_id).or_default().push(item);
    }

    orders
        .into_iter()
        .map(|order| {
            let items = items_by_order.remove(&order.id).unwrap_or_default();
            OrderWithItems { order, items }
        })
        .collect()
}
