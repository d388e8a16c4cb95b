//! Shared types, errors, and configuration for Taxline.
//!
//! This crate provides common pieces used across all other crates:
//! - Decimal helpers (half-up rounding, forgiving text coercion, guarded division)
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::numeric::{
    checked_percent_of, checked_product, checked_ratio, checked_sum, coerce, round2,
};
