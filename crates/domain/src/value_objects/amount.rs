use primitive_types::U256;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw token amount paired with its display decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Amount {
    pub raw: U256,
    pub decimals: u8,
}

impl Amount {
    pub fn new(raw: U256, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    pub fn zero(decimals: u8) -> Self {
        Self {
            raw: U256::zero(),
            decimals,
        }
    }

    /// Converts a human-readable value into raw units, flooring fractional dust
    /// below the smallest unit. Negative or unrepresentable values collapse to
    /// zero.
    pub fn from_decimal(value: Decimal, decimals: u8) -> Self {
        let scale = Decimal::from(10u64.pow(u32::from(decimals)));
        let raw = value
            .checked_mul(scale)
            .and_then(|scaled| scaled.floor().to_u128())
            .unwrap_or(0);
        Self {
            raw: U256::from(raw),
            decimals,
        }
    }

    /// Parses free-form user input. Anything that is not a non-negative number
    /// becomes zero rather than an error, so a half-typed amount never breaks
    /// the quoting flow.
    pub fn parse_input(input: &str, decimals: u8) -> Self {
        match Decimal::from_str(input.trim()) {
            Ok(value) => Self::from_decimal(value, decimals),
            Err(_) => Self::zero(decimals),
        }
    }

    pub fn to_decimal(&self) -> Decimal {
        let divisor = Decimal::from(10u64.pow(u32::from(self.decimals)));
        Decimal::from_str(&self.raw.to_string()).map_or(Decimal::ZERO, |d| d / divisor)
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_decimal_scales_to_raw_units() {
        let amount = Amount::from_decimal(dec!(1234.56), 6);
        assert_eq!(amount.raw, U256::from(1_234_560_000u64));
        assert_eq!(amount.to_decimal(), dec!(1234.56));
    }

    #[test]
    fn test_from_decimal_floors_sub_unit_dust() {
        let amount = Amount::from_decimal(dec!(0.0000019), 6);
        assert_eq!(amount.raw, U256::from(1u64));
    }

    #[test]
    fn test_parse_input_accepts_plain_number() {
        let amount = Amount::parse_input("1000", 6);
        assert_eq!(amount.raw, U256::from(1_000_000_000u64));
    }

    #[test]
    fn test_parse_input_coerces_garbage_to_zero() {
        assert!(Amount::parse_input("", 6).is_zero());
        assert!(Amount::parse_input("abc", 6).is_zero());
        assert!(Amount::parse_input("1.2.3", 6).is_zero());
    }

    #[test]
    fn test_parse_input_coerces_negative_to_zero() {
        assert!(Amount::parse_input("-5", 6).is_zero());
    }
}
