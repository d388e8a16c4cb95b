//! Submission payload handed to the persistence backend.
//!
//! Lines are split by item type. Service entries drop the quantity, price
//! and unit fields that only make sense for products.

use rust_decimal::Decimal;
use serde::Serialize;
use taxline_core::document::aggregate;
use taxline_core::line_item::{EditedField, ItemType, LineItem, LineReconciler};

/// A product line as the backend stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntry {
    /// Free-text description.
    pub description: String,
    /// Units sold.
    pub quantity: Decimal,
    /// Price of one unit, before tax.
    pub price_per_unit: Decimal,
    /// Unit label.
    pub unit_type: String,
    /// Custom unit label, when the unit type is "Other".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_unit: Option<String>,
    /// Pre-tax amount.
    pub amount: Decimal,
    /// Tax rate in percent.
    pub gst_percentage: Decimal,
    /// Tax on the line.
    pub line_tax: Decimal,
    /// Amount plus tax.
    pub line_total: Decimal,
}

impl From<&LineItem> for ProductEntry {
    fn from(line: &LineItem) -> Self {
        Self {
            description: line.description.clone(),
            quantity: line.quantity,
            price_per_unit: line.price_per_unit,
            unit_type: line.unit_type.clone(),
            other_unit: line.other_unit.clone(),
            amount: line.amount,
            gst_percentage: line.gst_percentage,
            line_tax: line.line_tax,
            line_total: line.line_total,
        }
    }
}

/// A service line as the backend stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntry {
    /// Free-text description.
    pub description: String,
    /// Pre-tax amount.
    pub amount: Decimal,
    /// Tax rate in percent.
    pub gst_percentage: Decimal,
    /// Tax on the line.
    pub line_tax: Decimal,
    /// Amount plus tax.
    pub line_total: Decimal,
}

impl From<&LineItem> for ServiceEntry {
    fn from(line: &LineItem) -> Self {
        Self {
            description: line.description.clone(),
            amount: line.amount,
            gst_percentage: line.gst_percentage,
            line_tax: line.line_tax,
            line_total: line.line_total,
        }
    }
}

/// The finalized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    /// Product lines, in document order.
    pub products: Vec<ProductEntry>,
    /// Service lines, in document order.
    pub services: Vec<ServiceEntry>,
    /// Sum of line amounts.
    pub sub_total: Decimal,
    /// Sum of line taxes.
    pub tax_amount: Decimal,
    /// Same value as `invoice_total`; the backend reads both names.
    pub total_amount: Decimal,
    /// Amount due.
    pub invoice_total: Decimal,
}

impl SubmissionPayload {
    /// Builds the payload from reconciled lines, keeping line order within each group.
    ///
    /// With tax disabled every line is first re-reconciled on the rate path, so
    /// the entries carry no tax and agree with the totals.
    #[must_use]
    pub fn from_lines(lines: &[LineItem], tax_enabled: bool) -> Self {
        let untaxed;
        let lines = if tax_enabled {
            lines
        } else {
            untaxed = LineReconciler::new(false).reconcile_all(lines, EditedField::GstPercentage);
            untaxed.as_slice()
        };

        let totals = aggregate(lines, tax_enabled);
        let mut products = Vec::new();
        let mut services = Vec::new();

        for line in lines {
            match line.item_type {
                ItemType::Product => products.push(ProductEntry::from(line)),
                ItemType::Service => services.push(ServiceEntry::from(line)),
            }
        }

        Self {
            products,
            services,
            sub_total: totals.sub_total,
            tax_amount: totals.tax_amount,
            total_amount: totals.invoice_total,
            invoice_total: totals.invoice_total,
        }
    }
}
