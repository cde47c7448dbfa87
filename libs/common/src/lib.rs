//! Common library for the Nucless storefront
//!
//! This crate provides shared functionality used across the storefront
//! services, including database connectivity and error handling.

pub mod database;
pub mod error;
