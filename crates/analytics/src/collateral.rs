//! Collateral policy for short positions.

use crate::position::{Direction, Position};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use yieldswap_domain::math::swap_quote::BPS_SCALE;

/// Collateral required on the short side, in basis points of the quoted
/// yield-leg size.
pub const COLLATERAL_RATIO_BPS: u32 = 1_000;

/// Result of the short-side collateral check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollateralRequirement {
    /// Minimum collateral the position must post.
    pub required_amount: Decimal,
    /// Collateral actually supplied (the notional paid in).
    pub supplied_amount: Decimal,
    /// Whether supplied covers required.
    pub is_adequate: bool,
}

/// Evaluates the collateral rule for a position.
///
/// Only shorts carry a requirement; longs return `None`. Inadequate
/// collateral is a business signal the caller gates trade submission on,
/// never an error.
#[must_use]
pub fn requirement(position: &Position) -> Option<CollateralRequirement> {
    if position.direction != Direction::Short {
        return None;
    }

    let ratio = Decimal::from(COLLATERAL_RATIO_BPS) / Decimal::from(BPS_SCALE);
    let required_amount = position.quote_out * ratio;
    let supplied_amount = position.notional_in;

    Some(CollateralRequirement {
        required_amount,
        supplied_amount,
        is_adequate: supplied_amount >= required_amount,
    })
}
