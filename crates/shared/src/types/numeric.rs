//! Decimal helpers shared by every calculation in the engine.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! - Every stored derived value goes through [`round2`] (half-up, 2 places)
//! - Text from entry fields goes through [`coerce`] and never fails
//! - Division goes through [`checked_ratio`] so a zero divisor is a value, not a panic

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept for every derived monetary value.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a value to 2 decimal places using half-up rounding.
///
/// Midpoints are rounded away from zero (`2.345 -> 2.35`, `-2.345 -> -2.35`).
/// The result always carries a scale of exactly 2, so `300` comes back as `300.00`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxline_shared::round2;
///
/// assert_eq!(round2(dec!(338.9830508)), dec!(338.98));
/// assert_eq!(round2(dec!(0.125)).to_string(), "0.13");
/// ```
#[must_use]
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded
}

/// Parses free-form numeric text, treating anything unparsable as zero.
///
/// Entry fields hold in-progress text (`""`, `"-"`, `"12."`), so this never fails.
/// Plain and scientific notation are accepted; surrounding whitespace is ignored.
#[must_use]
pub fn coerce(text: &str) -> Decimal {
    let text = text.trim();
    if text.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .unwrap_or(Decimal::ZERO)
}

/// Divides `numerator` by `denominator`, or `None` when the divisor is zero.
///
/// Also returns `None` if the quotient would overflow.
#[must_use]
pub fn checked_ratio(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        return None;
    }
    numerator.checked_div(denominator)
}

/// Multiplies two values, coercing an overflowing product to zero.
#[must_use]
pub fn checked_product(left: Decimal, right: Decimal) -> Decimal {
    left.checked_mul(right).unwrap_or(Decimal::ZERO)
}

/// Adds two values, coercing an overflowing sum to zero.
#[must_use]
pub fn checked_sum(left: Decimal, right: Decimal) -> Decimal {
    left.checked_add(right).unwrap_or(Decimal::ZERO)
}

/// Computes `amount * rate / 100`, coercing overflow to zero.
#[must_use]
pub fn checked_percent_of(amount: Decimal, rate: Decimal) -> Decimal {
    checked_ratio(checked_product(amount, rate), Decimal::ONE_HUNDRED).unwrap_or(Decimal::ZERO)
}
