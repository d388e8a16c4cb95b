//! Property-based tests for document aggregation.
//!
//! - Property 6: Aggregation Additivity
//! - Property 7: Order Independence
//! - Property 8: Tax Switch

use proptest::prelude::*;
use rust_decimal::Decimal;
use taxline_shared::round2;

use super::aggregate::aggregate;
use crate::line_item::{EditedField, LineItem, reconcile};

/// Strategy to generate money amounts (0.00 to 100,000.00).
fn money() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate reconciled service or product lines.
fn reconciled_line() -> impl Strategy<Value = LineItem> {
    (any::<bool>(), money(), 0i64..=2_800i64, 0i64..1_000i64).prop_map(
        |(is_product, amount, basis, units)| {
            let gst = Decimal::new(basis, 2);
            let mut line = if is_product {
                LineItem::product(gst, "Piece")
            } else {
                LineItem::service(gst)
            };
            line.quantity = Decimal::from(units);
            line.price_per_unit = amount;
            line.amount = amount;
            let edited = if is_product {
                EditedField::Quantity
            } else {
                EditedField::Amount
            };
            reconcile(&line, edited, true)
        },
    )
}

/// Strategy to generate a document and a shuffled copy of it.
fn lines_and_permutation() -> impl Strategy<Value = (Vec<LineItem>, Vec<LineItem>)> {
    prop::collection::vec(reconciled_line(), 0..20)
        .prop_flat_map(|lines| (Just(lines.clone()), Just(lines).prop_shuffle()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 6: Aggregation Additivity
    // =========================================================================

    /// Property 6.1: sub_total is the rounded sum of line amounts.
    #[test]
    fn prop_sub_total_is_sum_of_amounts(lines in prop::collection::vec(reconciled_line(), 0..20)) {
        let totals = aggregate(&lines, true);
        let expected: Decimal = lines.iter().map(|line| line.amount).sum();
        prop_assert_eq!(totals.sub_total, round2(expected));
    }

    /// Property 6.2: invoice_total is sub_total plus tax_amount.
    #[test]
    fn prop_invoice_total_is_sub_total_plus_tax(
        lines in prop::collection::vec(reconciled_line(), 0..20),
        tax_enabled in any::<bool>(),
    ) {
        let totals = aggregate(&lines, tax_enabled);
        prop_assert_eq!(totals.invoice_total, totals.sub_total + totals.tax_amount);
    }

    // =========================================================================
    // Property 7: Order Independence
    // =========================================================================

    /// Property 7.1: any permutation of the lines gives the same totals.
    #[test]
    fn prop_order_does_not_change_totals((lines, shuffled) in lines_and_permutation()) {
        prop_assert_eq!(aggregate(&lines, true), aggregate(&shuffled, true));
    }

    // =========================================================================
    // Property 8: Tax Switch
    // =========================================================================

    /// Property 8.1: with tax disabled, tax_amount is zero and the total equals sub_total.
    #[test]
    fn prop_tax_disabled_totals(lines in prop::collection::vec(reconciled_line(), 0..20)) {
        let totals = aggregate(&lines, false);
        prop_assert_eq!(totals.tax_amount, Decimal::ZERO);
        prop_assert_eq!(totals.invoice_total, totals.sub_total);
    }
}
