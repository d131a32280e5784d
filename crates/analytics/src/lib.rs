//! Position risk analytics for yield swap markets.
//!
//! This crate turns a swap quote into risk numbers a trading surface can
//! render directly:
//! - Breakeven rate for long and short positions
//! - Collateral requirement checks on the short side
//! - P&L sampled at arbitrary rate scenarios or swept into a curve
//!
//! All functions are pure and synchronous; the caller supplies reserves,
//! rates and maturities and decides when to recompute.

/// Prelude module for convenient imports.
pub mod prelude;

/// Breakeven and collateral analysis.
pub mod analyzer;
/// Short-side collateral policy.
pub mod collateral;
/// Positions derived from quotes.
pub mod position;
/// Scenario sampling and P&L curves.
pub mod scenario;

pub use analyzer::{PositionAnalysis, analyze};
pub use collateral::CollateralRequirement;
pub use position::{Direction, Position};
pub use scenario::{ScenarioResult, pnl_curve, sample, sample_at};
