//! Worked examples: one product line, one service line, and their document.

use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::aggregate::aggregate;
use crate::line_item::{EditedField, LineItem, reconcile};

/// 3 x 100 at 18%, reconciled after a quantity edit.
#[fixture]
fn product_line() -> LineItem {
    let mut line = LineItem::product(dec!(18), "Piece");
    line.quantity = dec!(3);
    line.price_per_unit = dec!(100);
    reconcile(&line, EditedField::Quantity, true)
}

/// Flat 1000 at 0%.
#[fixture]
fn service_line() -> LineItem {
    let mut line = LineItem::service(Decimal::ZERO);
    line.amount = dec!(1000);
    reconcile(&line, EditedField::Amount, true)
}

#[rstest]
fn test_product_from_quantity(product_line: LineItem) {
    assert_eq!(product_line.amount, dec!(300.00));
    assert_eq!(product_line.line_tax, dec!(54.00));
    assert_eq!(product_line.line_total, dec!(354.00));
}

#[rstest]
fn test_product_from_line_total(product_line: LineItem) {
    let mut line = product_line;
    line.line_total = dec!(400);

    let line = reconcile(&line, EditedField::LineTotal, true);

    assert_eq!(line.amount, dec!(338.98));
    assert_eq!(line.line_tax, dec!(61.02));
    assert_eq!(line.price_per_unit, dec!(112.99));
}

#[rstest]
fn test_service_without_tax(service_line: LineItem) {
    assert_eq!(service_line.line_tax, Decimal::ZERO);
    assert_eq!(service_line.line_total, dec!(1000.00));
}

#[rstest]
#[case(true, dec!(1300.00), dec!(54.00), dec!(1354.00))]
#[case(false, dec!(1300.00), dec!(0), dec!(1300.00))]
fn test_document_totals(
    product_line: LineItem,
    service_line: LineItem,
    #[case] tax_enabled: bool,
    #[case] sub_total: Decimal,
    #[case] tax_amount: Decimal,
    #[case] invoice_total: Decimal,
) {
    let totals = aggregate(&[product_line, service_line], tax_enabled);

    assert_eq!(totals.sub_total, sub_total);
    assert_eq!(totals.tax_amount, tax_amount);
    assert_eq!(totals.invoice_total, invoice_total);
}
