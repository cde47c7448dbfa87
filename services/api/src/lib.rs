//! Storefront and back-office API for the Nucless water delivery shop
//!
//! Customers register, browse the catalog, and place orders; administrators
//! manage products, orders, and the WhatsApp contact setting.

pub mod error;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod seed;
pub mod state;
pub mod validation;

pub use state::AppState;
