use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Annualized yield rate expressed in percent (5.25 means 5.25% APY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rate(pub Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    pub fn new(percent: Decimal) -> Self {
        Self(percent)
    }

    /// Builds a rate from basis points (525 bps is 5.25%).
    pub fn from_bps(bps: u32) -> Self {
        Self(Decimal::from(bps) / Decimal::from(100))
    }

    pub fn to_bps(&self) -> u32 {
        (self.0 * Decimal::from(100)).to_u32().unwrap_or(0)
    }

    /// The rate as a unit fraction (5.25% is 0.0525).
    pub fn fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    pub fn percent(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_bps() {
        let rate = Rate::from_bps(525);
        assert_eq!(rate.percent(), dec!(5.25));
        assert_eq!(rate.to_bps(), 525);
    }

    #[test]
    fn test_fraction() {
        assert_eq!(Rate::new(dec!(4.80)).fraction(), dec!(0.048));
    }
}
