//! Input validation utilities

use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;

use crate::models::{CreateOrderInput, CreateProductInput, RegisterUserInput, UpdateProductInput};

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.len() < 6 {
        return Err("Password must be at least 6 characters long".to_string());
    }

    if password.len() > 128 {
        return Err("Password must be at most 128 characters long".to_string());
    }

    Ok(())
}

/// Validate a registration payload
pub fn validate_registration(input: &RegisterUserInput) -> Result<(), String> {
    validate_email(&input.email)?;
    validate_password(&input.password)?;

    if input.name.trim().is_empty() {
        return Err("Name is required".to_string());
    }

    Ok(())
}

/// Validate a product creation payload
pub fn validate_new_product(input: &CreateProductInput) -> Result<(), String> {
    if input.name.trim().is_empty() {
        return Err("Product name is required".to_string());
    }

    validate_price(input.price)
}

/// Validate a product update payload
pub fn validate_product_update(input: &UpdateProductInput) -> Result<(), String> {
    if input.is_empty() {
        return Err("At least one field must be provided".to_string());
    }

    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err("Product name must not be empty".to_string());
        }
    }

    if let Some(price) = input.price {
        validate_price(price)?;
    }

    Ok(())
}

fn validate_price(price: Decimal) -> Result<(), String> {
    if price <= Decimal::ZERO {
        return Err("Price must be positive".to_string());
    }
    Ok(())
}

/// Validate an order creation payload
pub fn validate_new_order(input: &CreateOrderInput) -> Result<(), String> {
    if input.customer_name.trim().is_empty() {
        return Err("Customer name is required".to_string());
    }

    if input.customer_phone.trim().is_empty() {
        return Err("Customer phone is required".to_string());
    }

    if input.customer_address.trim().is_empty() {
        return Err("Customer address is required".to_string());
    }

    if input.items.is_empty() {
        return Err("Order must contain at least one item".to_string());
    }

    for item in &input.items {
        if item.quantity <= 0 {
            return Err("Item quantity must be positive".to_string());
        }
    }

    Ok(())
}

/// Validate a setting upsert
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    if key.trim().is_empty() {
        return Err("Setting key is required".to_string());
    }

    if value.trim().is_empty() {
        return Err("Setting value is required".to_string());
    }

    Ok(())
}
