//! Line item domain types.
//!
//! A line is one product or service row of a transaction. Numeric fields are
//! forgiving on input: anything that is not a number deserializes as zero, the
//! same way an in-progress entry field is read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};
use taxline_shared::config::EngineConfig;

/// Kind of line: a counted product or a flat-priced service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Product line, priced as quantity times unit price.
    #[default]
    Product,
    /// Service line, priced by a flat amount.
    Service,
}

/// The field a user changed last, which decides what is authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditedField {
    /// Quantity was edited; quantity and price drive the amount.
    Quantity,
    /// Unit price was edited; quantity and price drive the amount.
    PricePerUnit,
    /// Pre-tax amount was edited directly.
    Amount,
    /// Tax-inclusive total was edited; amount and tax are backed out of it.
    LineTotal,
    /// Tax rate was edited; the existing amount is kept.
    GstPercentage,
    /// Nothing recorded; behaves like a quantity/price edit.
    #[default]
    None,
}

impl EditedField {
    /// Returns true if edits to this field are remembered per line.
    ///
    /// Tax rate edits are not: they never change which value is authoritative.
    #[must_use]
    pub fn is_tracked(&self) -> bool {
        matches!(
            self,
            Self::Quantity | Self::PricePerUnit | Self::Amount | Self::LineTotal
        )
    }
}

/// One row of a transaction.
///
/// Invariants after reconciliation:
/// - `line_total == amount + line_tax`
/// - `line_tax == amount * gst_percentage / 100` (zero when tax is disabled)
/// - products on the default path: `amount == quantity * price_per_unit`
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product or service.
    #[serde(default)]
    pub item_type: ItemType,
    /// Number of units (products only).
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub quantity: Decimal,
    /// Price of one unit (products only).
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub price_per_unit: Decimal,
    /// Unit label, e.g. "Piece". Not used in arithmetic.
    #[serde(default)]
    pub unit_type: String,
    /// Free-text unit label used when `unit_type` is "Other".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_unit: Option<String>,
    /// Pre-tax line value.
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub amount: Decimal,
    /// Tax rate in percent.
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub gst_percentage: Decimal,
    /// Tax on `amount`.
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub line_tax: Decimal,
    /// `amount + line_tax`.
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub line_total: Decimal,
    /// Free text. Not used in arithmetic.
    #[serde(default)]
    pub description: String,
}

impl LineItem {
    /// Creates an empty product line: one unit at zero price.
    #[must_use]
    pub fn product(gst_percentage: Decimal, unit_type: impl Into<String>) -> Self {
        Self {
            item_type: ItemType::Product,
            quantity: Decimal::ONE,
            price_per_unit: Decimal::ZERO,
            unit_type: unit_type.into(),
            other_unit: None,
            amount: Decimal::ZERO,
            gst_percentage,
            line_tax: Decimal::ZERO,
            line_total: Decimal::ZERO,
            description: String::new(),
        }
    }

    /// Creates an empty service line.
    #[must_use]
    pub fn service(gst_percentage: Decimal) -> Self {
        Self {
            item_type: ItemType::Service,
            quantity: Decimal::ZERO,
            price_per_unit: Decimal::ZERO,
            unit_type: String::new(),
            other_unit: None,
            amount: Decimal::ZERO,
            gst_percentage,
            line_tax: Decimal::ZERO,
            line_total: Decimal::ZERO,
            description: String::new(),
        }
    }

    /// Returns true for product lines.
    #[must_use]
    pub fn is_product(&self) -> bool {
        self.item_type == ItemType::Product
    }

    /// Tax rate actually applied: the stored rate, or zero when tax is disabled.
    #[must_use]
    pub fn effective_rate(&self, tax_enabled: bool) -> Decimal {
        if tax_enabled {
            self.gst_percentage
        } else {
            Decimal::ZERO
        }
    }
}

/// Values given to newly created lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDefaults {
    /// Tax rate in percent.
    pub gst_percentage: Decimal,
    /// Unit label for product lines.
    pub unit_type: String,
}

impl LineDefaults {
    /// Creates a default product line.
    #[must_use]
    pub fn product(&self) -> LineItem {
        LineItem::product(self.gst_percentage, self.unit_type.clone())
    }

    /// Creates a default service line.
    #[must_use]
    pub fn service(&self) -> LineItem {
        LineItem::service(self.gst_percentage)
    }
}

impl Default for LineDefaults {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

impl From<&EngineConfig> for LineDefaults {
    fn from(config: &EngineConfig) -> Self {
        Self {
            gst_percentage: config.default_gst_percentage,
            unit_type: config.default_unit_type.clone(),
        }
    }
}
