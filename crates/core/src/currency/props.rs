//! Property-based tests for conversion.
//!
//! - Identity: converting a currency to itself returns the amount
//! - Base relations: base -> Y multiplies, Y -> base divides
//! - Rejections: negative amounts and unknown codes always fail

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{round_amount, validate_amount};
use super::error::ConversionError;
use super::table::RateTable;

const CODES: [&str; 4] = ["EUR", "GBP", "JPY", "IDR"];

/// Strategy to generate non-negative amounts (0.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate a USD-based table with every code in `CODES`.
fn table() -> impl Strategy<Value = RateTable> {
    prop::collection::vec(positive_rate(), CODES.len()).prop_map(|rates| {
        RateTable::from_rates(
            "USD",
            CODES
                .iter()
                .zip(rates)
                .map(|(code, rate)| ((*code).to_string(), rate)),
        )
    })
}

/// Strategy to pick any code in the table, base included.
fn known_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["USD", "EUR", "GBP", "JPY", "IDR"])
}

/// Strategy to generate codes that never appear in the table.
fn unknown_code() -> impl Strategy<Value = String> {
    "[K-Q]{3}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_same_currency_is_identity(
        table in table(),
        code in known_code(),
        value in amount(),
    ) {
        prop_assert_eq!(table.convert(code, code, value), Ok(value));
    }

    #[test]
    fn prop_from_base_multiplies(
        table in table(),
        code in known_code(),
        value in amount(),
    ) {
        let rate = table.rate(code).expect("known code");
        prop_assert_eq!(table.convert("USD", code, value), Ok(round_amount(value * rate)));
    }

    #[test]
    fn prop_to_base_divides(
        table in table(),
        code in known_code(),
        value in amount(),
    ) {
        let rate = table.rate(code).expect("known code");
        prop_assert_eq!(table.convert(code, "USD", value), Ok(round_amount(value / rate)));
    }

    #[test]
    fn prop_result_has_at_most_2_decimals(
        table in table(),
        from in known_code(),
        to in known_code(),
        value in amount(),
    ) {
        prop_assume!(from != to);
        let result = table.convert(from, to, value).expect("known codes");
        prop_assert!(result.scale() <= 2, "Result {} should have at most 2 decimals", result);
    }

    #[test]
    fn prop_negative_amount_is_invalid(cents in 1i64..100_000_000i64) {
        let value = Decimal::new(-cents, 2);
        prop_assert_eq!(validate_amount(value), Err(ConversionError::negative_amount()));
    }

    #[test]
    fn prop_unknown_code_fails_on_either_side(
        table in table(),
        known in known_code(),
        unknown in unknown_code(),
        value in amount(),
    ) {
        prop_assert_eq!(
            table.convert(known, &unknown, value),
            Err(ConversionError::UnknownCurrency(unknown.clone()))
        );
        prop_assert_eq!(
            table.convert(&unknown, known, value),
            Err(ConversionError::UnknownCurrency(unknown.clone()))
        );
    }
}
