//! Line items and their reconciliation.
//!
//! This module implements the per-line half of the engine:
//! - Line item types (product/service rows, the edited-field marker)
//! - Reconciliation of quantity, price, amount, tax and total after an edit

pub mod reconcile;
pub mod types;

#[cfg(test)]
mod reconcile_props;

pub use reconcile::{LineReconciler, reconcile};
pub use types::{EditedField, ItemType, LineDefaults, LineItem};
