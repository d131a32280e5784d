use crate::error::MathError;
use crate::math::swap_quote;
use crate::token::TokenAmount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reserve snapshot of a yield market pool.
///
/// `reserve_base` holds the settlement asset (USDC style), `reserve_quote`
/// holds the yield-bearing counter-asset. Freshness is the caller's problem;
/// the snapshot carries the observation timestamp along for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PoolReserves {
    pub reserve_base: TokenAmount,
    pub reserve_quote: TokenAmount,
    pub timestamp: u64,
}

impl PoolReserves {
    pub fn new(reserve_base: TokenAmount, reserve_quote: TokenAmount, timestamp: u64) -> Self {
        Self {
            reserve_base,
            reserve_quote,
            timestamp,
        }
    }

    /// Both sides must be funded before any quote is meaningful.
    pub fn is_ready(&self) -> bool {
        !self.reserve_base.is_zero() && !self.reserve_quote.is_zero()
    }

    /// Price of one quote-side token in base units.
    pub fn quote_token_price(&self) -> Result<Decimal, MathError> {
        swap_quote::spot_price(self.reserve_quote, self.reserve_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_is_ready_requires_both_sides() {
        let ready = PoolReserves::new(
            TokenAmount::from(1_000u64),
            TokenAmount::from(2_000u64),
            0,
        );
        assert!(ready.is_ready());

        let empty = PoolReserves::new(TokenAmount::zero(), TokenAmount::from(2_000u64), 0);
        assert!(!empty.is_ready());
    }

    #[test]
    fn test_quote_token_price() {
        // 1M base units against 20M quote units prices the quote token at 0.05.
        let reserves = PoolReserves::new(
            TokenAmount::from(1_000_000_000_000u64),
            TokenAmount::from(20_000_000_000_000u64),
            0,
        );
        assert_eq!(reserves.quote_token_price().unwrap(), dec!(0.05));
    }
}
