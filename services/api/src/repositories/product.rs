//! Product repository for database operations

use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::info;

use crate::error::ApiResult;
use crate::models::{CreateProductInput, Product, UpdateProductInput};

/// Product repository
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all active products (the storefront view)
    pub async fn list_active(&self) -> ApiResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, image_url, is_active, created_at, updated_at
            FROM products
            WHERE is_active = true
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Find a product by ID, inactive products included
    pub async fn find_by_id(&self, id: i32) -> ApiResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, image_url, is_active, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Create a new product
    pub async fn create(&self, input: &CreateProductInput) -> ApiResult<Product> {
        info!("Creating new product: {}", input.name);

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, price, image_url, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, image_url, is_active, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(&input.image_url)
        .bind(input.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    /// Apply a partial update, refreshing `updated_at`
    ///
    /// Absent fields are left untouched; explicit null clears `description`
    /// or `image_url`. Returns `None` when the product does not exist.
    pub async fn update(&self, id: i32, input: &UpdateProductInput) -> ApiResult<Option<Product>> {
        info!("Updating product: {}", id);

        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE products SET updated_at = now()");

        if let Some(name) = &input.name {
            query.push(", name = ").push_bind(name);
        }
        if let Some(description) = &input.description {
            query.push(", description = ").push_bind(description.clone());
        }
        if let Some(price) = input.price {
            query.push(", price = ").push_bind(price);
        }
        if let Some(image_url) = &input.image_url {
            query.push(", image_url = ").push_bind(image_url.clone());
        }
        if let Some(is_active) = input.is_active {
            query.push(", is_active = ").push_bind(is_active);
        }

        query.push(" WHERE id = ").push_bind(id);
        query.push(
            " RETURNING id, name, description, price, image_url, is_active, created_at, updated_at",
        );

        let product = query
            .build_query_as::<Product>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Soft-delete a product by clearing its active flag
    ///
    /// Idempotent: already-inactive and non-existent ids are not errors.
    pub async fn soft_delete(&self, id: i32) -> ApiResult<()> {
        info!("Soft-deleting product: {}", id);

        sqlx::query(
            r#"
            UPDATE products
            SET is_active = false, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
