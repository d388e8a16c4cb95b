//! Per-line memory of the field the user edited last.
//!
//! Keyed by line index. Only quantity, price, amount and line total edits are
//! recorded; a line with no entry reconciles on the quantity/price path.

use std::collections::BTreeMap;

use crate::line_item::EditedField;

/// Tracks the most recently edited field of each line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSourceTracker {
    sources: BTreeMap<usize, EditedField>,
}

impl EditSourceTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `field` was edited on line `index`.
    ///
    /// Untracked fields (tax rate, `None`) leave the entry unchanged.
    pub fn record(&mut self, index: usize, field: EditedField) {
        if field.is_tracked() {
            self.sources.insert(index, field);
        }
    }

    /// Returns the field last edited on line `index`, or `EditedField::None`.
    #[must_use]
    pub fn source_for(&self, index: usize) -> EditedField {
        self.sources.get(&index).copied().unwrap_or_default()
    }

    /// Drops the entry of a removed line and moves later entries down by one.
    pub fn forget(&mut self, index: usize) {
        self.sources = std::mem::take(&mut self.sources)
            .into_iter()
            .filter(|(i, _)| *i != index)
            .map(|(i, field)| if i > index { (i - 1, field) } else { (i, field) })
            .collect();
    }

    /// Opens a gap at `index` for an inserted line, moving that entry and later ones up.
    pub fn shift_from(&mut self, index: usize) {
        self.sources = std::mem::take(&mut self.sources)
            .into_iter()
            .map(|(i, field)| if i >= index { (i + 1, field) } else { (i, field) })
            .collect();
    }

    /// Forgets every entry.
    pub fn clear(&mut self) {
        self.sources.clear();
    }

    /// Number of lines with a recorded edit.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if no edit is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
