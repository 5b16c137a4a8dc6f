//! Amount type for representing expense values
//!
//! Wraps a `rust_decimal::Decimal` so that sums are exact and fractional
//! cents survive a load/save cycle. Amounts are persisted as plain JSON
//! numbers and always displayed with two decimal places.
//!
//! An amount read from the data file remembers the number exactly as it was
//! written there, so saving never rewrites `10` as `10.0`.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// A monetary amount in currency units (no currency code)
///
/// Representable values are those of `Decimal`: magnitudes up to about
/// 7.9e28 with at most 28 fractional digits.
#[derive(Debug, Clone)]
pub struct Amount {
    value: Decimal,
    /// Number as it appeared in the data file; `None` for new amounts
    stored: Option<Number>,
}

impl Amount {
    /// Create an Amount from a decimal value
    pub const fn new(value: Decimal) -> Self {
        Self {
            value,
            stored: None,
        }
    }

    /// Create a zero Amount
    pub const fn zero() -> Self {
        Self::new(Decimal::ZERO)
    }

    /// Amount for a JSON number, or `None` if it is outside the decimal range
    pub fn from_number(number: &Number) -> Option<Self> {
        let value = if let Some(n) = number.as_u64() {
            Decimal::from(n)
        } else if let Some(n) = number.as_i64() {
            Decimal::from(n)
        } else {
            let f = number.as_f64()?;
            Decimal::from_str(&f.to_string())
                .ok()
                .or_else(|| Decimal::from_f64(f))?
        };

        Some(Self {
            value,
            stored: Some(number.clone()),
        })
    }

    /// Get the underlying decimal value
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// Check if the amount is strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.value > Decimal::ZERO
    }

    /// Parse an amount typed on the command line
    ///
    /// Accepts plain decimals ("12.50", "8") and scientific notation ("1e3").
    /// Numbers outside the representable range are reported as too large or
    /// too small; anything else, including "nan" and "inf", is not a number.
    pub fn parse(s: &str) -> Result<Self, TrackerError> {
        let s = s.trim();
        if let Ok(value) = Decimal::from_str(s).or_else(|_| Decimal::from_scientific(s)) {
            return Ok(Self::new(value));
        }

        match s.parse::<f64>() {
            Ok(f) if f.is_finite() => match Decimal::from_f64(f) {
                Some(value) => Ok(Self::new(value)),
                None if f.abs() >= 1.0 => {
                    Err(TrackerError::Validation("amount is too large".into()))
                }
                None => Err(TrackerError::Validation("amount is too small".into())),
            },
            _ => Err(TrackerError::Validation("amount must be a number".into())),
        }
    }

    /// Parse an amount and require it to be greater than zero
    pub fn parse_positive(s: &str) -> Result<Self, TrackerError> {
        let amount = Self::parse(s)?;
        if !amount.is_positive() {
            return Err(TrackerError::Validation(
                "amount must be greater than 0".into(),
            ));
        }
        Ok(amount)
    }

    /// Sum of two amounts, or `None` if it leaves the decimal range
    pub fn checked_add(&self, other: &Amount) -> Option<Amount> {
        self.value.checked_add(other.value).map(Self::new)
    }

    /// Sum of all amounts, or `None` if any partial sum overflows
    pub fn checked_sum<'a, I>(amounts: I) -> Option<Amount>
    where
        I: IntoIterator<Item = &'a Amount>,
    {
        amounts
            .into_iter()
            .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount.value))
            .map(Self::new)
    }

    /// The value rounded half-to-even to two decimal places
    pub fn rounded(&self) -> Decimal {
        self.value
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
    }

    /// Plain textual form without trailing zeros ("12.5", "8", "0.125")
    pub fn to_plain_string(&self) -> String {
        self.value.normalize().to_string()
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Amount {}

impl FromStr for Amount {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.rounded())
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.stored {
            Some(number) => number.serialize(serializer),
            None => {
                let value = self.value.to_f64().ok_or_else(|| {
                    <S::Error as ser::Error>::custom("amount cannot be written as a JSON number")
                })?;
                serializer.serialize_f64(value)
            }
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = Number::deserialize(deserializer)?;
        Self::from_number(&number).ok_or_else(|| de::Error::custom("amount is out of range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        Amount::parse(s).unwrap()
    }

    fn validation_message(input: &str) -> String {
        Amount::parse(input).unwrap_err().to_string()
    }

    #[test]
    fn test_display_always_two_places() {
        assert_eq!(amount("12.50").to_string(), "$12.50");
        assert_eq!(amount("8").to_string(), "$8.00");
        assert_eq!(amount("0.1").to_string(), "$0.10");
        assert_eq!(Amount::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_display_rounds_half_to_even() {
        assert_eq!(amount("2.675").to_string(), "$2.68");
        assert_eq!(amount("2.665").to_string(), "$2.66");
        assert_eq!(amount("3.14159").to_string(), "$3.14");
    }

    #[test]
    fn test_parse() {
        assert_eq!(amount("12.50").value(), Decimal::new(1250, 2));
        assert_eq!(amount(" 7 ").value(), Decimal::new(7, 0));
        assert_eq!(amount("1e3").value(), Decimal::new(1000, 0));
        assert_eq!(amount("0.005").value(), Decimal::new(5, 3));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        for input in ["abc", "", "nan", "inf", "12,50", "$5"] {
            assert_eq!(
                validation_message(input),
                "amount must be a number",
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(validation_message("1e40"), "amount is too large");
        assert_eq!(validation_message("-1e40"), "amount is too large");
        assert!(Amount::parse_positive("5e28").is_ok());
    }

    #[test]
    fn test_parse_positive() {
        assert!(Amount::parse_positive("0.01").is_ok());

        let err = Amount::parse_positive("0").unwrap_err();
        assert_eq!(err.to_string(), "amount must be greater than 0");

        let err = Amount::parse_positive("-4.5").unwrap_err();
        assert_eq!(err.to_string(), "amount must be greater than 0");
    }

    #[test]
    fn test_checked_sum_is_exact() {
        let amounts = [amount("0.1"), amount("0.2"), amount("0.3")];
        let total = Amount::checked_sum(&amounts).unwrap();
        assert_eq!(total.value(), Decimal::new(6, 1));
        assert_eq!(total.to_string(), "$0.60");

        let empty = Amount::checked_sum(&Vec::<Amount>::new()).unwrap();
        assert_eq!(empty.to_string(), "$0.00");
    }

    #[test]
    fn test_checked_sum_overflow() {
        let big = amount("5e28");
        assert_eq!(big.checked_add(&big), None);
        assert_eq!(Amount::checked_sum(&[big.clone(), big]), None);
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(amount("12.50").to_plain_string(), "12.5");
        assert_eq!(amount("8").to_plain_string(), "8");
        assert_eq!(amount("8.00").to_plain_string(), "8");
    }

    #[test]
    fn test_new_amount_is_written_as_float() {
        assert_eq!(serde_json::to_string(&amount("3.25")).unwrap(), "3.25");
        assert_eq!(serde_json::to_string(&amount("8")).unwrap(), "8.0");
    }

    #[test]
    fn test_stored_number_is_written_back_unchanged() {
        for text in ["10", "12.5", "8.0", "-3"] {
            let loaded: Amount = serde_json::from_str(text).unwrap();
            assert_eq!(serde_json::to_string(&loaded).unwrap(), text);
        }

        let from_int: Amount = serde_json::from_str("10").unwrap();
        assert_eq!(from_int, amount("10"));
    }

    #[test]
    fn test_stored_number_out_of_range() {
        assert!(Amount::from_number(&Number::from_f64(1e30).unwrap()).is_none());
        assert!(serde_json::from_str::<Amount>("1e30").is_err());
        assert!(Amount::from_number(&Number::from(u64::MAX)).is_some());
    }
}
