//! # Reading of numbers
//!
//! This module turns textual representations of numbers into exact values. Decimal text is
//! expanded over a power of ten, so nothing is lost before the approximation starts.
pub mod decimal;
pub mod error;
