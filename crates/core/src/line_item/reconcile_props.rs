//! Property-based tests for line reconciliation.
//!
//! - Property 1: Amount/Tax/Total Consistency
//! - Property 2: Tax Follows Rate
//! - Property 3: Idempotence
//! - Property 4: Line Total Round-Trip
//! - Property 5: Totality (never panics)

use proptest::prelude::*;
use rust_decimal::Decimal;
use taxline_shared::round2;

use super::reconcile::reconcile;
use super::types::{EditedField, ItemType, LineItem};

/// Strategy to generate money amounts (0.00 to 1,000,000.00).
fn money() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate quantities (0.000 to 10,000.000).
fn quantity() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|milli| Decimal::new(milli, 3))
}

/// Strategy to generate realistic tax rates (0.00% to 28.00%).
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..=2_800i64).prop_map(|basis| Decimal::new(basis, 2))
}

/// Strategy to generate any edited field.
fn edited_field() -> impl Strategy<Value = EditedField> {
    prop_oneof![
        Just(EditedField::Quantity),
        Just(EditedField::PricePerUnit),
        Just(EditedField::Amount),
        Just(EditedField::LineTotal),
        Just(EditedField::GstPercentage),
        Just(EditedField::None),
    ]
}

/// Strategy to generate an arbitrary, possibly inconsistent line.
fn line() -> impl Strategy<Value = LineItem> {
    (
        prop_oneof![Just(ItemType::Product), Just(ItemType::Service)],
        quantity(),
        money(),
        money(),
        rate(),
        money(),
    )
        .prop_map(|(item_type, quantity, price, amount, gst, line_total)| {
            let mut line = match item_type {
                ItemType::Product => LineItem::product(gst, "Piece"),
                ItemType::Service => LineItem::service(gst),
            };
            line.quantity = quantity;
            line.price_per_unit = price;
            line.amount = amount;
            line.line_total = line_total;
            line
        })
}

/// Strategy to generate unbounded signed values, including negatives.
fn wild() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..=6).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn tolerance() -> Decimal {
    Decimal::new(1, 2)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 1: Amount/Tax/Total Consistency
    // =========================================================================

    /// Property 1.1: line_total equals amount plus line_tax within one cent.
    #[test]
    fn prop_total_is_amount_plus_tax(
        line in line(),
        edited in edited_field(),
        tax_enabled in any::<bool>(),
    ) {
        let out = reconcile(&line, edited, tax_enabled);
        let drift = (out.line_total - (out.amount + out.line_tax)).abs();
        prop_assert!(drift < tolerance(), "drift {} on {:?}", drift, out);
    }

    /// Property 1.2: on the default path a product's amount is quantity times price.
    #[test]
    fn prop_product_amount_is_quantity_times_price(
        line in line(),
        tax_enabled in any::<bool>(),
    ) {
        prop_assume!(line.item_type == ItemType::Product);
        let out = reconcile(&line, EditedField::Quantity, tax_enabled);
        prop_assert_eq!(out.amount, round2(line.quantity * line.price_per_unit));
    }

    // =========================================================================
    // Property 2: Tax Follows Rate
    // =========================================================================

    /// Property 2.1: with tax enabled, line_tax is amount * rate / 100 within one cent.
    #[test]
    fn prop_tax_follows_rate(line in line(), edited in edited_field()) {
        let out = reconcile(&line, edited, true);
        let expected = out.amount * out.gst_percentage / Decimal::ONE_HUNDRED;
        let drift = (out.line_tax - expected).abs();
        prop_assert!(drift < tolerance(), "tax drift {} on {:?}", drift, out);
    }

    /// Property 2.2: with tax disabled, line_tax is zero whatever the stored rate.
    #[test]
    fn prop_tax_disabled_means_zero_tax(line in line(), edited in edited_field()) {
        let out = reconcile(&line, edited, false);
        prop_assert_eq!(out.line_tax, Decimal::ZERO);
        prop_assert_eq!(out.gst_percentage, line.gst_percentage);
    }

    // =========================================================================
    // Property 3: Idempotence
    // =========================================================================

    /// Property 3.1: reconciling a consistent line again with the same field changes nothing.
    #[test]
    fn prop_reconcile_is_idempotent(
        line in line(),
        edited in edited_field(),
        tax_enabled in any::<bool>(),
    ) {
        let once = reconcile(&line, edited, tax_enabled);
        let twice = reconcile(&once, edited, tax_enabled);
        prop_assert_eq!(once, twice);
    }

    // =========================================================================
    // Property 4: Line Total Round-Trip
    // =========================================================================

    /// Property 4.1: editing the total of a two-unit product backs out amount and price.
    #[test]
    fn prop_line_total_round_trip(
        total in money(),
        gst in rate(),
        price in money(),
    ) {
        let mut line = LineItem::product(gst, "Piece");
        line.quantity = Decimal::TWO;
        line.price_per_unit = price;
        line.line_total = total;

        let out = reconcile(&line, EditedField::LineTotal, true);

        let divisor = Decimal::ONE + gst / Decimal::ONE_HUNDRED;
        let expected_amount = round2(total / divisor);
        prop_assert_eq!(out.amount, expected_amount);
        prop_assert_eq!(out.price_per_unit, round2(expected_amount / Decimal::TWO));
        prop_assert_eq!(out.line_total, total);
    }

    // =========================================================================
    // Property 5: Totality
    // =========================================================================

    /// Property 5.1: any structurally valid line reconciles without panicking.
    #[test]
    fn prop_never_panics(
        quantity in wild(),
        price in wild(),
        amount in wild(),
        gst in wild(),
        line_total in wild(),
        edited in edited_field(),
        tax_enabled in any::<bool>(),
    ) {
        let mut line = LineItem::product(gst, "Piece");
        line.quantity = quantity;
        line.price_per_unit = price;
        line.amount = amount;
        line.line_total = line_total;

        let _ = reconcile(&line, edited, tax_enabled);

        line.item_type = ItemType::Service;
        let _ = reconcile(&line, edited, tax_enabled);
    }
}
