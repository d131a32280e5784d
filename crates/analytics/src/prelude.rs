//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use yieldswap_analytics::prelude::*;
//! ```

// Positions
pub use crate::position::{Direction, Position};

// Analysis
pub use crate::analyzer::{PositionAnalysis, analyze, breakeven_rate};

// Collateral policy
pub use crate::collateral::{COLLATERAL_RATIO_BPS, CollateralRequirement, requirement};

// Scenario sampling
pub use crate::scenario::{ScenarioResult, pnl_curve, sample, sample_at};

// Domain types callers almost always need alongside
pub use yieldswap_domain::{PoolReserves, Rate, TokenAmount};
