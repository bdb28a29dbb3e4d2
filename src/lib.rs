//! # Best rational approximation
//!
//! Approximate an exact value by the closest fraction whose denominator does not exceed a given
//! bound. The algorithm expands the value into a continued fraction and compares the last
//! convergent that respects the bound with the best semiconvergent, as described in
//! Khinchin's "Continued Fractions".
//!
//! ```
//! use best_rational::{approximate, ExactRational};
//!
//! let value: ExactRational = "3.14159265358979".parse().unwrap();
//! assert_eq!(approximate(&value, 113).unwrap(), ExactRational::new(355, 113));
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

pub use crate::algorithm::approximation::{
    approximate, approximate_f64, approximate_str, ApproximationError, DenominatorBound,
    InvalidBound,
};
pub use crate::data::number_types::rational::ExactRational;
