//! Documents: ordered lines, edit tracking, and totals.
//!
//! This module implements the document half of the engine:
//! - Edit-source tracking per line
//! - Aggregation of reconciled lines into document totals
//! - The editing session that drives reconcile-then-aggregate on every change
//! - Error types for session operations

pub mod aggregate;
pub mod edit_source;
pub mod error;
pub mod session;

#[cfg(test)]
mod aggregate_props;
#[cfg(test)]
mod scenarios;

pub use aggregate::{DocumentTotals, aggregate};
pub use edit_source::EditSourceTracker;
pub use error::DocumentError;
pub use session::Document;
