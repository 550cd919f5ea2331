//! Currency conversion arithmetic.
//!
//! CRITICAL: Rounding strategy:
//! - Converted amounts are rounded to 2 decimal places
//! - Use banker's rounding (round half to even)
//! - All arithmetic is decimal; rates never pass through floats

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use super::error::ConversionError;

/// Decimal places of every converted amount.
pub const DISPLAY_PLACES: u32 = 2;

/// Rounds a converted amount to [`DISPLAY_PLACES`] using banker's rounding.
#[must_use]
pub fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_PLACES, RoundingStrategy::MidpointNearestEven)
}

/// Converts an amount through the base currency.
///
/// `from_rate` and `to_rate` are both expressed relative to the base, so the
/// amount is first normalized to base (`amount / from_rate`) and then
/// scaled into the target (`* to_rate`). Returns `None` on overflow or a
/// zero `from_rate`.
#[must_use]
pub fn convert_via_base(amount: Decimal, from_rate: Decimal, to_rate: Decimal) -> Option<Decimal> {
    let in_base = amount.checked_div(from_rate)?;
    in_base.checked_mul(to_rate).map(round_amount)
}

/// Rejects negative amounts.
pub fn validate_amount(amount: Decimal) -> Result<(), ConversionError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ConversionError::negative_amount());
    }
    Ok(())
}

/// Parses a user-supplied amount.
///
/// Accepts plain decimals (`"10"`, `"2.50"`, `"-1"`) and scientific notation
/// (`"1e3"`), ignoring surrounding whitespace. A finite number that does not
/// fit a `Decimal` (`"1e30"`) is an invalid amount, not a malformed one.
pub fn parse_amount(raw: &str) -> Result<Decimal, ConversionError> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => ConversionError::out_of_range(trimmed),
            _ => ConversionError::malformed_amount(raw),
        })
}

/// Formats an amount with exactly [`DISPLAY_PLACES`] decimals.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", round_amount(amount))
}
