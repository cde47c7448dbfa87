//! Application state shared across handlers

use sqlx::PgPool;

use crate::jwt::JwtService;
use crate::repositories::{OrderRepository, ProductRepository, SettingRepository, UserRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_service: JwtService,
    pub user_repository: UserRepository,
    pub product_repository: ProductRepository,
    pub order_repository: OrderRepository,
    pub setting_repository: SettingRepository,
}

impl AppState {
    /// Build the full application state from a connection pool
    pub fn new(pool: PgPool, jwt_service: JwtService) -> Self {
        Self {
            user_repository: UserRepository::new(pool.clone()),
            product_repository: ProductRepository::new(pool.clone()),
            order_repository: OrderRepository::new(pool.clone()),
            setting_repository: SettingRepository::new(pool.clone()),
            db_pool: pool,
            jwt_service,
        }
    }
}
