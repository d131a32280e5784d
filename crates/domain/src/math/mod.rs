//! Pure swap math on raw reserve amounts.

pub mod swap_quote;
