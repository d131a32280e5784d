use crate::error::MathError;
use crate::token::TokenAmount;
use primitive_types::U256;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Basis point denominator (1 bps = 0.01%).
pub const BPS_SCALE: u32 = 10_000;

/// Quotes the output amount for an exact input against a constant reserve
/// ratio.
///
/// formula: amount_out = floor(amount_in * reserve_out / reserve_in)
///
/// This is the on-chain-equivalent integer path on smallest units. A zero
/// input or an unfunded reserve quotes zero rather than erroring; the price
/// is simply undefined until both sides hold liquidity.
pub fn quote_exact_in(
    amount_in: TokenAmount,
    reserve_in: TokenAmount,
    reserve_out: TokenAmount,
) -> Result<TokenAmount, MathError> {
    let amount_in = amount_in.0;
    let reserve_in = reserve_in.0;
    let reserve_out = reserve_out.0;

    if amount_in.is_zero() || reserve_in.is_zero() || reserve_out.is_zero() {
        return Ok(TokenAmount::zero());
    }

    let numerator = amount_in
        .checked_mul(reserve_out)
        .ok_or(MathError::Overflow)?;
    let amount_out = numerator / reserve_in;

    Ok(TokenAmount(amount_out))
}

/// Decimal variant of [`quote_exact_in`] for display estimates.
///
/// Operates on human-readable values and keeps fractional precision, so it
/// can drift from the integer path by sub-unit dust. Never use it to build
/// amounts that go on chain.
pub fn quote_display(amount_in: Decimal, reserve_in: Decimal, reserve_out: Decimal) -> Decimal {
    if amount_in <= Decimal::ZERO || reserve_in <= Decimal::ZERO || reserve_out <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    amount_in * reserve_out / reserve_in
}

/// Spot price of the input token in terms of the output token.
///
/// Price = reserve_out / reserve_in. An unfunded input reserve prices at
/// zero, the same "not ready" sentinel the quote path uses.
pub fn spot_price(reserve_in: TokenAmount, reserve_out: TokenAmount) -> Result<Decimal, MathError> {
    if reserve_in.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let r_in = to_decimal(reserve_in.0)?;
    let r_out = to_decimal(reserve_out.0)?;

    Ok(r_out / r_in)
}

/// Applies a slippage tolerance floor to a quoted amount.
///
/// Returns floor(quote * (BPS_SCALE - slippage_bps) / BPS_SCALE), the minimum
/// the caller should accept from the router. A tolerance of one hundred
/// percent or more floors to zero.
pub fn min_amount_out(quote: TokenAmount, slippage_bps: u32) -> Result<TokenAmount, MathError> {
    if slippage_bps >= BPS_SCALE {
        return Ok(TokenAmount::zero());
    }

    let keep = quote
        .0
        .checked_mul(U256::from(BPS_SCALE - slippage_bps))
        .ok_or(MathError::Overflow)?;

    Ok(TokenAmount(keep / U256::from(BPS_SCALE)))
}

fn to_decimal(value: U256) -> Result<Decimal, MathError> {
    // U256 to Decimal via string parsing; direct conversion would silently
    // truncate above 128 bits.
    Decimal::from_str(&value.to_string()).map_err(|_| MathError::Conversion)
}
