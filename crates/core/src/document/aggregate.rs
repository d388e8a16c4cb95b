//! Document totals.
//!
//! A full pass over every line on each call; there is no running total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use taxline_shared::round2;
use tracing::debug;

use crate::line_item::LineItem;

/// Totals of a whole document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTotals {
    /// Sum of line amounts.
    pub sub_total: Decimal,
    /// Sum of line taxes (zero when tax is disabled).
    pub tax_amount: Decimal,
    /// `sub_total + tax_amount`.
    pub invoice_total: Decimal,
}

impl DocumentTotals {
    /// Totals of an empty document.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            sub_total: round2(Decimal::ZERO),
            tax_amount: round2(Decimal::ZERO),
            invoice_total: round2(Decimal::ZERO),
        }
    }
}

/// Sums reconciled lines into document totals.
///
/// Lines are summed in document order. With tax disabled the tax amount is zero
/// regardless of any stored line tax.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxline_core::document::aggregate;
/// use taxline_core::line_item::{EditedField, LineItem, reconcile};
///
/// let mut line = LineItem::service(dec!(18));
/// line.amount = dec!(100);
/// let line = reconcile(&line, EditedField::Amount, true);
///
/// let totals = aggregate(&[line], true);
/// assert_eq!(totals.invoice_total, dec!(118.00));
/// ```
#[must_use]
pub fn aggregate(lines: &[LineItem], tax_enabled: bool) -> DocumentTotals {
    let (amounts, taxes) = lines
        .iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(amounts, taxes), line| {
            (
                accumulate(amounts, line.amount, "amount"),
                accumulate(taxes, line.line_tax, "line_tax"),
            )
        });

    let sub_total = round2(amounts);
    let tax_amount = if tax_enabled {
        round2(taxes)
    } else {
        round2(Decimal::ZERO)
    };

    DocumentTotals {
        sub_total,
        tax_amount,
        invoice_total: round2(accumulate(sub_total, tax_amount, "invoice_total")),
    }
}

/// Adds `value` to a running total, pinning it at the `Decimal` bound on overflow.
fn accumulate(total: Decimal, value: Decimal, field: &'static str) -> Decimal {
    total.checked_add(value).unwrap_or_else(|| {
        debug!(field, %total, %value, "document total overflowed; saturating");
        total.saturating_add(value)
    })
}
