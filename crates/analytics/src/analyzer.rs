//! Breakeven and collateral analysis for a priced position.

use crate::collateral::{self, CollateralRequirement};
use crate::position::{Direction, Position};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use yieldswap_domain::Rate;

/// Risk summary for a position at the current quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionAnalysis {
    /// The position under analysis.
    pub position: Position,
    /// Rate at which the position settles flat.
    pub breakeven_rate: Rate,
    /// Collateral check, present on shorts only.
    pub collateral: Option<CollateralRequirement>,
}

impl PositionAnalysis {
    /// Profit or loss if the floating yield settles at `rate`.
    #[must_use]
    pub fn pnl_at(&self, rate: Rate) -> Decimal {
        self.position.pnl_at(rate)
    }

    /// Whether the caller may submit this trade.
    ///
    /// Longs always pass. Shorts pass only with adequate collateral.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.collateral.is_none_or(|check| check.is_adequate)
    }
}

/// Derives the full risk summary for a position.
#[must_use]
pub fn analyze(position: &Position) -> PositionAnalysis {
    PositionAnalysis {
        position: *position,
        breakeven_rate: breakeven_rate(position),
        collateral: collateral::requirement(position),
    }
}

/// Rate at which the position P&L crosses zero.
///
/// A long recovers its notional once the yield leg accrues back to
/// `notional_in`; a short burns through its premium the same way. With a
/// zero quote or an expired market there is no crossing, so the implied
/// rate comes back as the fallback instead of a division blowup.
#[must_use]
pub fn breakeven_rate(position: &Position) -> Rate {
    let denominator = position.quote_out * position.years_to_maturity;
    if denominator.is_zero() {
        debug!(
            direction = ?position.direction,
            "Breakeven undefined, falling back to implied rate"
        );
        return position.implied_rate;
    }

    let cost = match position.direction {
        Direction::Long => position.notional_in,
        Direction::Short => position.premium_received,
    };

    Rate::new(cost / denominator * Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_long_breakeven_rate() {
        // 1000 in for 20_000 out over a year breaks even at 5%.
        let position = Position::long(dec!(1000), dec!(20000), Rate::new(dec!(5.25)), dec!(1));
        let analysis = analyze(&position);

        assert_eq!(analysis.breakeven_rate.percent(), dec!(5));
        assert_eq!(analysis.pnl_at(analysis.breakeven_rate), Decimal::ZERO);
        assert!(analysis.collateral.is_none());
        assert!(analysis.can_submit());
    }

    #[test]
    fn test_short_breakeven_with_defaulted_premium_is_implied_rate() {
        let position = Position::short(dec!(1000), dec!(20000), Rate::new(dec!(5.25)), dec!(0.5));
        assert_eq!(breakeven_rate(&position).percent(), dec!(5.25));
    }

    #[test]
    fn test_short_pnl_settles_flat_at_breakeven() {
        // Notional matching the yield-leg size, so premium accrual and debt
        // accrual cross exactly at the breakeven rate.
        let position = Position::short(dec!(1000), dec!(1000), Rate::new(dec!(5.25)), dec!(1));
        let analysis = analyze(&position);

        assert_eq!(analysis.breakeven_rate.percent(), dec!(5.25));
        assert_eq!(analysis.pnl_at(analysis.breakeven_rate), Decimal::ZERO);
    }

    #[test]
    fn test_breakeven_falls_back_to_implied_on_expired_market() {
        let implied = Rate::new(dec!(5.25));
        let position = Position::long(dec!(1000), dec!(20000), implied, Decimal::ZERO);
        assert_eq!(breakeven_rate(&position), implied);
    }

    #[test]
    fn test_breakeven_falls_back_to_implied_on_zero_quote() {
        let implied = Rate::new(dec!(4.80));
        let position = Position::short(dec!(1000), Decimal::ZERO, implied, dec!(1));
        assert_eq!(breakeven_rate(&position), implied);
    }

    #[test]
    fn test_short_without_collateral_cannot_submit() {
        let position = Position::short(dec!(50), dec!(1000), Rate::new(dec!(5)), dec!(1));
        let analysis = analyze(&position);

        assert!(!analysis.can_submit());
        assert!(analysis.collateral.is_some());
    }
}
