//! Line-item tax reconciliation engine for Taxline.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! Every operation is synchronous and works only on the values passed in; a
//! [`document::Document`] holds all per-session state.
//!
//! # Modules
//!
//! - `line_item` - Line types and per-line reconciliation
//! - `document` - Edit tracking, totals, and the editing session

pub mod document;
pub mod line_item;
