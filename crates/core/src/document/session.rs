//! The editing session of one transaction document.
//!
//! Owns the ordered lines, the tax switch, and the edit-source tracker. Every
//! mutation reconciles the affected line(s) and then recomputes the totals with
//! a full pass, so `totals()` is always current.

use taxline_shared::coerce;
use tracing::{debug, trace};

use super::aggregate::{DocumentTotals, aggregate};
use super::edit_source::EditSourceTracker;
use super::error::DocumentError;
use crate::line_item::{EditedField, LineDefaults, LineItem, LineReconciler, reconcile};

/// A transaction document being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<LineItem>,
    tax_enabled: bool,
    edit_sources: EditSourceTracker,
    defaults: LineDefaults,
    totals: DocumentTotals,
}

impl Document {
    /// Creates a document holding one default product line.
    #[must_use]
    pub fn new(tax_enabled: bool) -> Self {
        Self::with_defaults(tax_enabled, LineDefaults::default())
    }

    /// Creates a document holding one product line built from `defaults`.
    #[must_use]
    pub fn with_defaults(tax_enabled: bool, defaults: LineDefaults) -> Self {
        let lines = vec![defaults.product()];
        let totals = aggregate(&lines, tax_enabled);
        Self {
            lines,
            tax_enabled,
            edit_sources: EditSourceTracker::new(),
            defaults,
            totals,
        }
    }

    /// Loads previously saved lines; lines added later are built from `defaults`.
    ///
    /// With tax enabled the lines are taken as stored. With tax disabled every
    /// line is re-reconciled on the rate path so no stored tax survives.
    #[must_use]
    pub fn load(lines: Vec<LineItem>, tax_enabled: bool, defaults: LineDefaults) -> Self {
        let lines = if tax_enabled {
            lines
        } else {
            LineReconciler::new(false).reconcile_all(&lines, EditedField::GstPercentage)
        };
        let totals = aggregate(&lines, tax_enabled);
        debug!(lines = lines.len(), tax_enabled, "document loaded");
        Self {
            lines,
            tax_enabled,
            edit_sources: EditSourceTracker::new(),
            defaults,
            totals,
        }
    }

    /// Starts over: one default product line, no recorded edits.
    pub fn reset(&mut self, tax_enabled: bool) {
        self.lines = vec![self.defaults.product()];
        self.tax_enabled = tax_enabled;
        self.edit_sources.clear();
        self.refresh_totals();
        debug!(tax_enabled, "document reset");
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Lines in display order.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Returns the line at `index`.
    pub fn line(&self, index: usize) -> Result<&LineItem, DocumentError> {
        self.lines.get(index).ok_or(DocumentError::LineOutOfRange {
            index,
            len: self.lines.len(),
        })
    }

    /// Current document totals.
    #[must_use]
    pub fn totals(&self) -> DocumentTotals {
        self.totals
    }

    /// Whether tax applies to this document.
    #[must_use]
    pub fn tax_enabled(&self) -> bool {
        self.tax_enabled
    }

    /// Field last edited on line `index` (`EditedField::None` if nothing recorded).
    #[must_use]
    pub fn edit_source(&self, index: usize) -> EditedField {
        self.edit_sources.source_for(index)
    }

    /// Defaults used for newly added lines.
    #[must_use]
    pub fn line_defaults(&self) -> &LineDefaults {
        &self.defaults
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the document has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consumes the session, returning its lines for submission.
    #[must_use]
    pub fn into_lines(self) -> Vec<LineItem> {
        self.lines
    }

    // ========================================================================
    // Line list changes
    // ========================================================================

    /// Appends a default product line and returns its index.
    pub fn add_product(&mut self) -> usize {
        let line = self.defaults.product();
        self.push_line(line)
    }

    /// Appends a default service line and returns its index.
    pub fn add_service(&mut self) -> usize {
        let line = self.defaults.service();
        self.push_line(line)
    }

    /// Appends a line as given and returns its index.
    pub fn push_line(&mut self, line: LineItem) -> usize {
        self.lines.push(line);
        self.refresh_totals();
        let index = self.lines.len() - 1;
        debug!(index, "line appended");
        index
    }

    /// Removes the line at `index` and returns it.
    pub fn remove_line(&mut self, index: usize) -> Result<LineItem, DocumentError> {
        self.line(index)?;
        let removed = self.lines.remove(index);
        self.edit_sources.forget(index);
        self.refresh_totals();
        debug!(index, remaining = self.lines.len(), "line removed");
        Ok(removed)
    }

    /// Copies the line at `index` directly after it and returns the copy's index.
    ///
    /// The copy starts with no recorded edit.
    pub fn duplicate_line(&mut self, index: usize) -> Result<usize, DocumentError> {
        let copy = self.line(index)?.clone();
        let at = index + 1;
        self.edit_sources.shift_from(at);
        self.lines.insert(at, copy);
        self.refresh_totals();
        debug!(index, copy = at, "line duplicated");
        Ok(at)
    }

    // ========================================================================
    // Field edits
    // ========================================================================

    /// Sets the quantity from entry text and reconciles the line.
    pub fn set_quantity(&mut self, index: usize, text: &str) -> Result<&LineItem, DocumentError> {
        self.line_mut(index)?.quantity = coerce(text);
        self.mark_edited(index, EditedField::Quantity)
    }

    /// Sets the unit price from entry text and reconciles the line.
    pub fn set_price_per_unit(
        &mut self,
        index: usize,
        text: &str,
    ) -> Result<&LineItem, DocumentError> {
        self.line_mut(index)?.price_per_unit = coerce(text);
        self.mark_edited(index, EditedField::PricePerUnit)
    }

    /// Sets the pre-tax amount from entry text and reconciles the line.
    pub fn set_amount(&mut self, index: usize, text: &str) -> Result<&LineItem, DocumentError> {
        self.line_mut(index)?.amount = coerce(text);
        self.mark_edited(index, EditedField::Amount)
    }

    /// Sets the tax-inclusive total from entry text and reconciles the line.
    pub fn set_line_total(&mut self, index: usize, text: &str) -> Result<&LineItem, DocumentError> {
        self.line_mut(index)?.line_total = coerce(text);
        self.mark_edited(index, EditedField::LineTotal)
    }

    /// Sets the tax rate from entry text; tax and total follow the existing amount.
    pub fn set_gst_percentage(
        &mut self,
        index: usize,
        text: &str,
    ) -> Result<&LineItem, DocumentError> {
        self.line_mut(index)?.gst_percentage = coerce(text);
        self.mark_edited(index, EditedField::GstPercentage)
    }

    /// Writes `text` into the numeric field named by `field` and reconciles.
    ///
    /// `EditedField::None` writes nothing and reconciles with the recorded source.
    pub fn apply_edit(
        &mut self,
        index: usize,
        field: EditedField,
        text: &str,
    ) -> Result<&LineItem, DocumentError> {
        match field {
            EditedField::Quantity => self.set_quantity(index, text),
            EditedField::PricePerUnit => self.set_price_per_unit(index, text),
            EditedField::Amount => self.set_amount(index, text),
            EditedField::LineTotal => self.set_line_total(index, text),
            EditedField::GstPercentage => self.set_gst_percentage(index, text),
            EditedField::None => self.mark_edited(index, EditedField::None),
        }
    }

    /// Records that `field` changed on line `index`, then reconciles and re-totals.
    ///
    /// Use when the new value is already in the line. `EditedField::None`
    /// reconciles with whatever field was recorded last for the line.
    pub fn mark_edited(
        &mut self,
        index: usize,
        field: EditedField,
    ) -> Result<&LineItem, DocumentError> {
        self.line(index)?;
        self.edit_sources.record(index, field);
        let source = match field {
            EditedField::None => self.edit_sources.source_for(index),
            edited => edited,
        };

        let reconciled = reconcile(&self.lines[index], source, self.tax_enabled);
        self.lines[index] = reconciled;
        self.refresh_totals();
        debug!(index, field = ?source, "line reconciled");

        self.line(index)
    }

    /// Sets the description. No recomputation.
    pub fn set_description(
        &mut self,
        index: usize,
        description: impl Into<String>,
    ) -> Result<(), DocumentError> {
        self.line_mut(index)?.description = description.into();
        Ok(())
    }

    /// Sets the unit label. No recomputation.
    pub fn set_unit_type(
        &mut self,
        index: usize,
        unit_type: impl Into<String>,
    ) -> Result<(), DocumentError> {
        self.line_mut(index)?.unit_type = unit_type.into();
        Ok(())
    }

    /// Sets the free-text unit label. No recomputation.
    pub fn set_other_unit(
        &mut self,
        index: usize,
        other_unit: Option<String>,
    ) -> Result<(), DocumentError> {
        self.line_mut(index)?.other_unit = other_unit;
        Ok(())
    }

    /// Switches tax on or off for the whole document.
    ///
    /// Every line keeps its amount; tax and total are recomputed from it.
    pub fn set_tax_enabled(&mut self, tax_enabled: bool) {
        self.tax_enabled = tax_enabled;
        self.lines = LineReconciler::new(tax_enabled)
            .reconcile_all(&self.lines, EditedField::GstPercentage);
        self.refresh_totals();
        debug!(tax_enabled, "tax switch changed");
    }

    fn line_mut(&mut self, index: usize) -> Result<&mut LineItem, DocumentError> {
        let len = self.lines.len();
        self.lines
            .get_mut(index)
            .ok_or(DocumentError::LineOutOfRange { index, len })
    }

    fn refresh_totals(&mut self) {
        self.totals = aggregate(&self.lines, self.tax_enabled);
        trace!(
            sub_total = %self.totals.sub_total,
            tax_amount = %self.totals.tax_amount,
            invoice_total = %self.totals.invoice_total,
            "totals recomputed"
        );
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(true)
    }
}
