//! # Algorithms
//!
//! The continued fraction expansion and the bounded denominator approximation built on top of it.
pub mod approximation;
pub mod continued_fraction;
