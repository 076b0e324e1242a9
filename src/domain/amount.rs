use std::fmt;
use std::ops::{Add, Sub};

use super::error::DomainError;

/// Fixed-point monetary amount in the base currency unit.
///
/// Stored as an i64 count of minor units (two decimal places, so a raw
/// value of 150 is "1.50"). All balances and ledger amounts use this
/// representation; conversion to other currencies happens only at read
/// time and never feeds back into stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i64);

impl Amount {
    const SCALE: i64 = 100;

    /// Largest amount accepted per operation (999999.99 in minor units)
    pub const MAX: Amount = Amount(99_999_999);

    /// Create from a raw minor-unit value
    pub fn from_minor(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw minor-unit value
    pub fn minor(&self) -> i64 {
        self.0
    }

    /// Zero value
    pub fn zero() -> Self {
        Self(0)
    }

    /// True for amounts strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checked addition, None on overflow
    pub fn checked_add(&self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction, None on underflow
    pub fn checked_sub(&self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Parse from a decimal string (e.g. "10", "5.99").
    ///
    /// Rejects negative values, more than two decimal places, and values
    /// above [`Amount::MAX`].
    pub fn from_decimal_str(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();

        if s.is_empty() || s.starts_with('-') || s.starts_with('+') {
            return Err(DomainError::InvalidAmount);
        }

        let parts: Vec<&str> = s.split('.').collect();
        let (integer_part, decimal_part) = match parts.len() {
            1 => (parts[0], ""),
            2 => (parts[0], parts[1]),
            _ => return Err(DomainError::InvalidAmount),
        };

        if decimal_part.len() > 2 {
            return Err(DomainError::InvalidAmount);
        }

        let integer: i64 = integer_part
            .parse()
            .map_err(|_| DomainError::InvalidAmount)?;

        let decimal_str = format!("{:0<2}", decimal_part);
        let decimal: i64 = decimal_str
            .parse()
            .map_err(|_| DomainError::InvalidAmount)?;

        let scaled = integer
            .checked_mul(Self::SCALE)
            .and_then(|v| v.checked_add(decimal))
            .ok_or(DomainError::Overflow)?;

        let amount = Self(scaled);
        if amount > Self::MAX {
            return Err(DomainError::InvalidAmount);
        }

        Ok(amount)
    }

    /// Format as a decimal string with two decimal places
    pub fn to_decimal_string(&self) -> String {
        let integer_part = self.0 / Self::SCALE;
        let decimal_part = self.0 % Self::SCALE;
        format!("{}.{:02}", integer_part, decimal_part)
    }

    /// Lossy float view, for display-currency conversion only
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_integers() {
        assert_eq!(Amount::from_decimal_str("1").unwrap(), Amount(100));
        assert_eq!(Amount::from_decimal_str("10").unwrap(), Amount(1_000));
        assert_eq!(Amount::from_decimal_str("0").unwrap(), Amount(0));
    }

    #[test]
    fn parse_decimals() {
        assert_eq!(Amount::from_decimal_str("1.0").unwrap(), Amount(100));
        assert_eq!(Amount::from_decimal_str("1.5").unwrap(), Amount(150));
        assert_eq!(Amount::from_decimal_str("5.99").unwrap(), Amount(599));
        assert_eq!(Amount::from_decimal_str("0.01").unwrap(), Amount(1));
        assert_eq!(Amount::from_decimal_str("123.45").unwrap(), Amount(12_345));
    }

    #[test]
    fn parse_with_whitespace() {
        assert_eq!(Amount::from_decimal_str("  1.5  ").unwrap(), Amount(150));
    }

    #[test]
    fn reject_negative_amounts() {
        assert!(Amount::from_decimal_str("-1.5").is_err());
        assert!(Amount::from_decimal_str("-10").is_err());
    }

    #[test]
    fn reject_too_many_decimal_places() {
        assert!(Amount::from_decimal_str("1.001").is_err());
        assert!(Amount::from_decimal_str("1.12345").is_err());
    }

    #[test]
    fn reject_invalid_formats() {
        assert!(Amount::from_decimal_str("").is_err());
        assert!(Amount::from_decimal_str("abc").is_err());
        assert!(Amount::from_decimal_str("1.2.3").is_err());
        assert!(Amount::from_decimal_str("1..2").is_err());
    }

    #[test]
    fn reject_amount_over_limit() {
        assert_eq!(Amount::from_decimal_str("999999.99").unwrap(), Amount::MAX);
        assert!(Amount::from_decimal_str("1000000").is_err());
        assert!(Amount::from_decimal_str("1000000.00").is_err());
    }

    #[test]
    fn to_string_formats_correctly() {
        assert_eq!(Amount(100).to_decimal_string(), "1.00");
        assert_eq!(Amount(150).to_decimal_string(), "1.50");
        assert_eq!(Amount(1).to_decimal_string(), "0.01");
        assert_eq!(Amount(0).to_decimal_string(), "0.00");
        assert_eq!(Amount(12_345).to_decimal_string(), "123.45");
    }

    #[test]
    fn round_trip_parsing() {
        let values = vec!["1.00", "1.50", "0.01", "123.45", "0.00"];

        for val in values {
            let parsed = Amount::from_decimal_str(val).unwrap();
            assert_eq!(parsed.to_decimal_string(), val);
        }
    }

    #[test]
    fn checked_add_works() {
        let a = Amount(100);
        let b = Amount(50);
        assert_eq!(a.checked_add(b), Some(Amount(150)));
    }

    #[test]
    fn checked_add_detects_overflow() {
        let max = Amount(i64::MAX);
        let one = Amount(1);
        assert_eq!(max.checked_add(one), None);
    }

    #[test]
    fn checked_sub_works() {
        let a = Amount(100);
        let b = Amount(50);
        assert_eq!(a.checked_sub(b), Some(Amount(50)));
    }

    #[test]
    fn is_positive_excludes_zero() {
        assert!(Amount(1).is_positive());
        assert!(!Amount(0).is_positive());
        assert!(!Amount(-1).is_positive());
    }

    #[test]
    fn to_f64_scales_to_major_units() {
        assert_eq!(Amount(150).to_f64(), 1.5);
        assert_eq!(Amount(0).to_f64(), 0.0);
    }

    #[test]
    fn operators_and_ordering() {
        assert_eq!(Amount(100) + Amount(50), Amount(150));
        assert_eq!(Amount(100) - Amount(50), Amount(50));
        assert!(Amount(100) > Amount(50));
        assert_eq!(Amount::default(), Amount::zero());
    }
}
