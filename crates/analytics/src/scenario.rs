//! Scenario sampling over the position P&L function.
//!
//! Everything here is a pure map over [`Position::pnl_at`]. Results are
//! ephemeral and recomputed per render or slider move; there is nothing to
//! cache or debounce.

use crate::position::Position;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use yieldswap_domain::Rate;

/// P&L evaluated at one sampled rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// The rate this scenario settles at.
    pub sampled_rate: Rate,
    /// Signed profit or loss at that rate.
    pub profit_and_loss: Decimal,
}

/// Evaluates the position P&L at each given rate.
///
/// Output order and length mirror the input exactly.
#[must_use]
pub fn sample(position: &Position, rates: &[Rate]) -> Vec<ScenarioResult> {
    rates.iter().map(|rate| sample_at(position, *rate)).collect()
}

/// Single-point sample backing the what-if slider.
#[must_use]
pub fn sample_at(position: &Position, rate: Rate) -> ScenarioResult {
    ScenarioResult {
        sampled_rate: rate,
        profit_and_loss: position.pnl_at(rate),
    }
}

/// Sweeps the P&L curve over `steps` even intervals between two rates.
///
/// Returns `steps + 1` points including both endpoints. Zero steps collapse
/// to a single sample at `min_rate`.
#[must_use]
pub fn pnl_curve(
    position: &Position,
    min_rate: Rate,
    max_rate: Rate,
    steps: u32,
) -> Vec<ScenarioResult> {
    if steps == 0 {
        return vec![sample_at(position, min_rate)];
    }

    let step = (max_rate.percent() - min_rate.percent()) / Decimal::from(steps);

    (0..=steps)
        .map(|i| sample_at(position, Rate::new(min_rate.percent() + step * Decimal::from(i))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn long_fixture() -> Position {
        Position::long(dec!(1000), dec!(20000), Rate::new(dec!(5)), dec!(1))
    }

    #[test]
    fn test_sample_preserves_order_and_length() {
        let position = long_fixture();
        let rates = [Rate::new(dec!(3)), Rate::new(dec!(5)), Rate::new(dec!(7))];

        let results = sample(&position, &rates);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].sampled_rate.percent(), dec!(3));
        assert_eq!(results[1].sampled_rate.percent(), dec!(5));
        assert_eq!(results[2].sampled_rate.percent(), dec!(7));
        // P&L rises with the rate on a long.
        assert_eq!(results[0].profit_and_loss, dec!(-400));
        assert_eq!(results[1].profit_and_loss, Decimal::ZERO);
        assert_eq!(results[2].profit_and_loss, dec!(400));
    }

    #[test]
    fn test_sample_at_matches_pnl() {
        let position = long_fixture();
        let result = sample_at(&position, Rate::new(dec!(10)));

        assert_eq!(result.sampled_rate.percent(), dec!(10));
        assert_eq!(result.profit_and_loss, position.pnl_at(Rate::new(dec!(10))));
    }

    #[test]
    fn test_pnl_curve_spans_endpoints() {
        let position = long_fixture();
        let curve = pnl_curve(&position, Rate::new(dec!(1)), Rate::new(dec!(9)), 8);

        assert_eq!(curve.len(), 9);
        assert_eq!(curve[0].sampled_rate.percent(), dec!(1));
        assert_eq!(curve[8].sampled_rate.percent(), dec!(9));
        // Long curve is monotonically increasing in the rate.
        for pair in curve.windows(2) {
            assert!(pair[1].profit_and_loss > pair[0].profit_and_loss);
        }
    }

    #[test]
    fn test_pnl_curve_zero_steps_is_single_point() {
        let position = long_fixture();
        let curve = pnl_curve(&position, Rate::new(dec!(4)), Rate::new(dec!(6)), 0);

        assert_eq!(curve.len(), 1);
        assert_eq!(curve[0].sampled_rate.percent(), dec!(4));
    }
}
