//! Hypothetical swap positions derived from a quote.
//!
//! A position is rebuilt from scratch on every input change. It carries no
//! identity and is never persisted; all risk math downstream is a pure
//! function of the values captured here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use yieldswap_domain::Rate;

/// Which side of the fixed rate the trader takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Pay the notional now, receive the yield leg at maturity.
    Long,
    /// Collect the premium now, owe the yield leg at maturity.
    Short,
}

/// A hypothetical position priced off the current quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Long or short the yield leg.
    pub direction: Direction,
    /// Base-asset notional the trader pays in.
    pub notional_in: Decimal,
    /// Yield-token amount quoted out for that notional.
    pub quote_out: Decimal,
    /// Implied market rate at quote time.
    pub implied_rate: Rate,
    /// Year fraction until the market matures.
    pub years_to_maturity: Decimal,
    /// Upfront premium credited to short positions.
    pub premium_received: Decimal,
}

impl Position {
    /// Creates a long position (buy the yield leg).
    #[must_use]
    pub fn long(
        notional_in: Decimal,
        quote_out: Decimal,
        implied_rate: Rate,
        years_to_maturity: Decimal,
    ) -> Self {
        Self {
            direction: Direction::Long,
            notional_in,
            quote_out,
            implied_rate,
            years_to_maturity,
            premium_received: Decimal::ZERO,
        }
    }

    /// Creates a short position (sell the yield leg).
    ///
    /// The premium defaults to the fair value of the yield leg at the implied
    /// rate. Override it with [`Position::with_premium`] when the venue
    /// reports the actual credit.
    #[must_use]
    pub fn short(
        notional_in: Decimal,
        quote_out: Decimal,
        implied_rate: Rate,
        years_to_maturity: Decimal,
    ) -> Self {
        let premium_received = quote_out * implied_rate.fraction() * years_to_maturity;
        Self {
            direction: Direction::Short,
            notional_in,
            quote_out,
            implied_rate,
            years_to_maturity,
            premium_received,
        }
    }

    /// Sets the upfront premium.
    #[must_use]
    pub fn with_premium(mut self, premium_received: Decimal) -> Self {
        self.premium_received = premium_received;
        self
    }

    /// Profit or loss if the floating yield settles at `rate`.
    ///
    /// Long pays `notional_in` today for a yield leg worth
    /// `quote_out * rate / 100 * years` at settlement. Short keeps the
    /// premium and owes `notional_in * rate / 100 * years`. An empty
    /// position always settles flat.
    #[must_use]
    pub fn pnl_at(&self, rate: Rate) -> Decimal {
        if self.notional_in.is_zero() {
            return Decimal::ZERO;
        }

        let accrual = rate.fraction() * self.years_to_maturity;
        match self.direction {
            Direction::Long => self.quote_out * accrual - self.notional_in,
            Direction::Short => self.premium_received - self.notional_in * accrual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_long_pnl_settles_flat_at_entry_rate() {
        // 1000 in buys 20_000 of the yield leg over one year.
        let position = Position::long(dec!(1000), dec!(20000), Rate::new(dec!(5)), dec!(1));

        assert_eq!(position.pnl_at(Rate::new(dec!(5))), Decimal::ZERO);
        assert_eq!(position.pnl_at(Rate::new(dec!(10))), dec!(1000));
        assert_eq!(position.pnl_at(Rate::new(dec!(2.5))), dec!(-500));
    }

    #[test]
    fn test_short_pnl_is_premium_minus_accrued_debt() {
        let position = Position::short(dec!(1000), dec!(20000), Rate::new(dec!(5)), dec!(1))
            .with_premium(dec!(1000));

        // Debt accrues on the notional paid in.
        assert_eq!(position.pnl_at(Rate::new(dec!(4))), dec!(960));
        assert_eq!(position.pnl_at(Rate::new(dec!(10))), dec!(900));
    }

    #[test]
    fn test_short_premium_defaults_to_fair_value() {
        let position = Position::short(dec!(1000), dec!(20000), Rate::new(dec!(5.25)), dec!(1));
        assert_eq!(position.premium_received, dec!(1050));
    }

    #[test]
    fn test_empty_position_settles_flat() {
        let position = Position::long(Decimal::ZERO, Decimal::ZERO, Rate::new(dec!(5)), dec!(1));
        assert_eq!(position.pnl_at(Rate::new(dec!(9))), Decimal::ZERO);
    }
}
