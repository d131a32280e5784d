//! Typed errors for the quote math.

/// Errors raised by the exact integer quote path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// An intermediate product exceeded 256 bits.
    #[error("Arithmetic overflow")]
    Overflow,
    /// A raw amount could not be represented as a decimal.
    #[error("Decimal conversion failed")]
    Conversion,
}
