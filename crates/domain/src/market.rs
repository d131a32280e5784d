use crate::token::Token;
use crate::value_objects::Rate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Seconds in the 365-day year used for annualization.
pub const SECONDS_PER_YEAR: u64 = 365 * 86_400;

/// A fixed-maturity yield swap market.
///
/// Pairs the settlement asset with its yield-bearing counter-asset and the
/// maturity the swap settles at. Reserves and rates are observed separately;
/// this type only carries the static market description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Market {
    pub address: String,
    pub base: Token,
    pub quote: Token,
    pub fee_bps: u32,
    /// Maturity as unix seconds.
    pub maturity: u64,
}

impl Market {
    pub fn new(
        address: impl Into<String>,
        base: Token,
        quote: Token,
        fee_bps: u32,
        maturity: u64,
    ) -> Self {
        Self {
            address: address.into(),
            base,
            quote,
            fee_bps,
            maturity,
        }
    }

    /// Year fraction remaining until maturity, zero once expired.
    pub fn years_to_maturity(&self, now: u64) -> Decimal {
        if now >= self.maturity {
            return Decimal::ZERO;
        }
        Decimal::from(self.maturity - now) / Decimal::from(SECONDS_PER_YEAR)
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.maturity
    }
}

/// Derives the annualized implied rate from the yield token spot price.
///
/// A yield token priced at 0.05 base with one year to run implies 5% APY.
/// Non-positive year fractions map to a zero rate.
pub fn implied_rate_from_price(spot_price: Decimal, years: Decimal) -> Rate {
    if years <= Decimal::ZERO {
        return Rate::ZERO;
    }
    Rate::new(spot_price / years * Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn usdc() -> Token {
        Token::new("0xbase", "USDC", 6, "USD Coin")
    }

    fn yt_usdc() -> Token {
        Token::new("0xquote", "ytUSDC", 6, "Yield Token USDC")
    }

    #[test]
    fn test_years_to_maturity_half_year() {
        let market = Market::new("0xmarket", usdc(), yt_usdc(), 30, SECONDS_PER_YEAR);
        let years = market.years_to_maturity(SECONDS_PER_YEAR / 2);
        assert_eq!(years, dec!(0.5));
    }

    #[test]
    fn test_years_to_maturity_after_expiry() {
        let market = Market::new("0xmarket", usdc(), yt_usdc(), 30, 1_000);
        assert_eq!(market.years_to_maturity(2_000), Decimal::ZERO);
        assert!(market.is_expired(1_000));
        assert!(!market.is_expired(999));
    }

    #[test]
    fn test_implied_rate_from_price() {
        let rate = implied_rate_from_price(dec!(0.05), dec!(1));
        assert_eq!(rate.percent(), dec!(5));

        // Same price with half the time left implies twice the rate.
        let rate = implied_rate_from_price(dec!(0.05), dec!(0.5));
        assert_eq!(rate.percent(), dec!(10));
    }

    #[test]
    fn test_implied_rate_zero_years() {
        assert!(implied_rate_from_price(dec!(0.05), Decimal::ZERO).is_zero());
    }
}
