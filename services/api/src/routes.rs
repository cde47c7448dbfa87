//! Storefront API routes
//!
//! Public routes cover registration, login, the catalog, order placement,
//! and per-user order history. Back-office routes live under `/admin` and
//! are guarded by the admin session middleware.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use tracing::{error, info};

use crate::{
    error::ApiError,
    middleware::require_admin,
    models::{
        CreateOrderInput, CreateProductInput, LoginInput, RegisterUserInput, UpdateOrderStatusInput,
        UpdateProductInput, UpdateSettingInput, UpdateUserInput,
        user::AuthResponse,
    },
    state::AppState,
    validation,
};

/// Create the router for the storefront API
pub fn create_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/admin/products", post(create_product))
        .route("/admin/products/:id", put(update_product))
        .route("/admin/products/:id", delete(delete_product))
        .route("/admin/orders", get(get_orders))
        .route("/admin/orders/:id/status", put(update_order_status))
        .route("/admin/settings/:key", put(update_setting))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/users/:id", get(get_user_profile))
        .route("/users/:id", put(update_user_profile))
        .route("/users/:id/orders", get(get_user_orders))
        .route("/products", get(get_products))
        .route("/products/:id", get(get_product_by_id))
        .route("/orders", post(create_order))
        .route("/settings/:key", get(get_setting))
        .merge(admin_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "storefront-api"
    }))
}

/// Register a new customer (or admin) account
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserInput>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Registration attempt for: {}", payload.email);

    validation::validate_registration(&payload).map_err(ApiError::Validation)?;

    if state
        .user_repository
        .find_by_email(&payload.email)
        .await?
        .is_some()
    {
        return Err(ApiError::DuplicateEmail);
    }

    let user = state.user_repository.create(&payload).await?;
    let token = state.jwt_service.generate_token(&user).map_err(|e| {
        error!("Failed to generate session token: {}", e);
        ApiError::Internal(e)
    })?;

    let response = AuthResponse {
        user: user.scrubbed(),
        token,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Log a user in
///
/// Unknown email and wrong password yield the same undifferentiated failure.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginInput>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Login attempt for: {}", payload.email);

    let user = state
        .user_repository
        .find_by_email(&payload.email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !state
        .user_repository
        .verify_password(&user, &payload.password)?
    {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.jwt_service.generate_token(&user).map_err(|e| {
        error!("Failed to generate session token: {}", e);
        ApiError::Internal(e)
    })?;

    let response = AuthResponse {
        user: user.scrubbed(),
        token,
    };

    Ok(Json(response))
}

/// Fetch a user profile, password scrubbed
pub async fn get_user_profile(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .user_repository
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(user.scrubbed()))
}

/// Apply a partial profile update
pub async fn update_user_profile(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserInput>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(email) = &payload.email {
        validation::validate_email(email).map_err(ApiError::Validation)?;
    }
    if let Some(name) = &payload.name {
        if name.trim().is_empty() {
            return Err(ApiError::Validation("Name must not be empty".to_string()));
        }
    }

    let user = state
        .user_repository
        .update(id, &payload)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(user.scrubbed()))
}

/// List active products (the storefront catalog)
pub async fn get_products(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let products = state.product_repository.list_active().await?;
    Ok(Json(products))
}

/// Fetch any product by id, inactive products included
pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .product_repository
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("Product"))?;

    Ok(Json(product))
}

/// Create a product (admin)
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductInput>,
) -> Result<impl IntoResponse, ApiError> {
    validation::validate_new_product(&payload).map_err(ApiError::Validation)?;

    let product = state.product_repository.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Apply a partial product update (admin)
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductInput>,
) -> Result<impl IntoResponse, ApiError> {
    validation::validate_product_update(&payload).map_err(ApiError::Validation)?;

    let product = state
        .product_repository
        .update(id, &payload)
        .await?
        .ok_or(ApiError::NotFound("Product"))?;

    Ok(Json(product))
}

/// Soft-delete a product (admin); idempotent
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state.product_repository.soft_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Place an order; the total is computed server-side
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderInput>,
) -> Result<impl IntoResponse, ApiError> {
    validation::validate_new_order(&payload).map_err(ApiError::Validation)?;

    let order = state.order_repository.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// List every order with items (admin)
pub async fn get_orders(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let orders = state.order_repository.list_all().await?;
    Ok(Json(orders))
}

/// List one user's orders with items, newest first
pub async fn get_user_orders(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let orders = state.order_repository.list_for_user(id).await?;
    Ok(Json(orders))
}

/// Set an order's status (admin); any transition is permitted
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusInput>,
) -> Result<impl IntoResponse, ApiError> {
    let order = state
        .order_repository
        .update_status(id, payload.status)
        .await?
        .ok_or(ApiError::NotFound("Order"))?;

    Ok(Json(order))
}

/// Fetch a setting by key
pub async fn get_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let setting = state
        .setting_repository
        .get(&key)
        .await?
        .ok_or(ApiError::NotFound("Setting"))?;

    Ok(Json(setting))
}

/// Create or overwrite a setting (admin)
pub async fn update_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(payload): Json<UpdateSettingInput>,
) -> Result<impl IntoResponse, ApiError> {
    validation::validate_setting(&key, &payload.value).map_err(ApiError::Validation)?;

    let setting = state.setting_repository.upsert(&key, &payload.value).await?;

    Ok(Json(setting))
}
