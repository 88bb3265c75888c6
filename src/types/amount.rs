use crate::types::errors::AmountError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

const CURRENCY_SYMBOL: char = '$';
const THOUSANDS_SEPARATOR: char = ',';

/// Normalizes a currency-formatted amount (`$-77.00`, `$1,234.50`, `9839.64`) into a plain `f64`.
///
/// The value is parsed as an exact decimal first so that formatted inputs and plain
/// numeric inputs land on the same float.
pub fn parse_amount(value: &str) -> Result<f64, AmountError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AmountError::Empty);
    }

    let cleaned: String = value.chars()
        .filter(|c| *c != CURRENCY_SYMBOL && *c != THOUSANDS_SEPARATOR && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Err(AmountError::Invalid(format!("Value '{value}' has no digits")));
    }

    let decimal = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|error| AmountError::Invalid(format!("Value '{value}' is not a number: {error}")))?;

    decimal.to_f64()
        .ok_or_else(|| AmountError::Invalid(format!("Value '{value}' does not fit in a float")))
}
