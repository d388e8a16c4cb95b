//! Common types used across the application.

pub mod numeric;
