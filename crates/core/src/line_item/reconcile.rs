//! Line reconciliation: keep quantity, price, amount, tax and total consistent.
//!
//! Exactly one of {quantity/price, amount, line total} is authoritative per call,
//! chosen by the field the user edited last. Everything else is derived from it.
//!
//! Every derived value is rounded with [`round2`] on its own. The resulting
//! ±0.01 noise between fields is expected; document totals re-sum the rounded
//! per-line values.

use rust_decimal::Decimal;
use taxline_shared::{checked_percent_of, checked_product, checked_ratio, checked_sum, round2};

use super::types::{EditedField, ItemType, LineItem};

/// Recomputes the derived fields of a line after `edited` changed.
///
/// Pure: the input line is not modified. Never fails; malformed values have
/// already been coerced to zero and every division is guarded.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxline_core::line_item::{EditedField, LineItem, reconcile};
///
/// let mut line = LineItem::product(dec!(18), "Piece");
/// line.quantity = dec!(3);
/// line.price_per_unit = dec!(100);
///
/// let line = reconcile(&line, EditedField::Quantity, true);
/// assert_eq!(line.amount, dec!(300.00));
/// assert_eq!(line.line_tax, dec!(54.00));
/// assert_eq!(line.line_total, dec!(354.00));
/// ```
#[must_use]
pub fn reconcile(line: &LineItem, edited: EditedField, tax_enabled: bool) -> LineItem {
    let rate = line.effective_rate(tax_enabled);
    let mut next = line.clone();

    match (line.item_type, edited) {
        (_, EditedField::LineTotal) => {
            apply_line_total(&mut next, rate);
            if next.is_product() {
                derive_price(&mut next);
            }
        }
        (_, EditedField::GstPercentage) => apply_rate(&mut next, rate),
        (ItemType::Product, EditedField::Amount) => {
            apply_amount(&mut next, rate);
            derive_price(&mut next);
        }
        (
            ItemType::Product,
            EditedField::Quantity | EditedField::PricePerUnit | EditedField::None,
        ) => {
            next.amount = checked_product(next.quantity, next.price_per_unit);
            apply_amount(&mut next, rate);
        }
        // Services carry no quantity or price: the amount is the base.
        (ItemType::Service, _) => apply_amount(&mut next, rate),
    }

    next
}

/// Amount is authoritative: round it, then derive tax and total.
fn apply_amount(line: &mut LineItem, rate: Decimal) {
    line.amount = round2(line.amount);
    line.line_tax = round2(checked_percent_of(line.amount, rate));
    line.line_total = round2(checked_sum(line.amount, line.line_tax));
}

/// Line total is authoritative: back out the pre-tax amount, tax is the rest.
///
/// A zero divisor (rate of -100) keeps the existing amount.
fn apply_line_total(line: &mut LineItem, rate: Decimal) {
    line.line_total = round2(line.line_total);
    let divisor = checked_sum(Decimal::ONE, rate / Decimal::ONE_HUNDRED);
    if let Some(amount) = checked_ratio(line.line_total, divisor) {
        line.amount = round2(amount);
    }
    line.line_tax = round2(checked_sum(line.line_total, -line.amount));
}

/// Rate changed: tax and total follow the existing amount, which is left as is.
fn apply_rate(line: &mut LineItem, rate: Decimal) {
    line.line_tax = round2(checked_percent_of(line.amount, rate));
    line.line_total = round2(checked_sum(line.amount, line.line_tax));
}

/// Keeps quantity authoritative and derives the unit price from the amount.
///
/// Skipped for a zero quantity; the previous price is retained.
fn derive_price(line: &mut LineItem) {
    if let Some(price) = checked_ratio(line.amount, line.quantity) {
        line.price_per_unit = round2(price);
    }
}

/// Reconciles lines against one document-level tax switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineReconciler {
    tax_enabled: bool,
}

impl LineReconciler {
    /// Creates a reconciler for a document with the given tax switch.
    #[must_use]
    pub const fn new(tax_enabled: bool) -> Self {
        Self { tax_enabled }
    }

    /// Returns the tax switch this reconciler applies.
    #[must_use]
    pub const fn tax_enabled(&self) -> bool {
        self.tax_enabled
    }

    /// Reconciles one line.
    #[must_use]
    pub fn reconcile(&self, line: &LineItem, edited: EditedField) -> LineItem {
        reconcile(line, edited, self.tax_enabled)
    }

    /// Reconciles every line with the same edited field, keeping order.
    #[must_use]
    pub fn reconcile_all(&self, lines: &[LineItem], edited: EditedField) -> Vec<LineItem> {
        lines
            .iter()
            .map(|line| reconcile(line, edited, self.tax_enabled))
            .collect()
    }
}
