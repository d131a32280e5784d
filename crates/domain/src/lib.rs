//! Core domain types and swap math for yield swap markets.
//!
//! This crate provides the pure building blocks shared by every layer:
//! - Tokens and raw amounts on smallest fixed-point units
//! - Defensive conversion between user input and raw units
//! - Annualized rates and market maturity accounting
//! - Constant-ratio quote math with typed overflow errors
//!
//! Everything here is synchronous and side-effect free. Reserves, rates and
//! maturities are observed by the caller and passed in as arguments.

/// Typed math errors.
pub mod error;
/// Market description and maturity accounting.
pub mod market;
/// Swap quote math.
pub mod math;
/// Pool reserve snapshots.
pub mod pool;
/// Token metadata and raw amounts.
pub mod token;
/// Amount and rate value objects.
pub mod value_objects;

pub use error::MathError;
pub use market::{Market, SECONDS_PER_YEAR, implied_rate_from_price};
pub use pool::PoolReserves;
pub use token::{Token, TokenAmount};
pub use value_objects::{Amount, Rate};
