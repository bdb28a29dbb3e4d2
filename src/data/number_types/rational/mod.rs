//! # Rational numbers
//!
//! Primary way to do exact computation. Values that are read as decimals or floats are turned into
//! one of these without rounding, after which the approximation algorithms work on them.
pub use exact::Exact as ExactRational;
pub use exact::NonFiniteError;

mod exact;
mod macros;
