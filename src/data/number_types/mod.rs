//! # Number types
//!
//! The exact rational type that the approximation algorithms consume and produce, along with the
//! helper traits used to compare approximation errors.
pub mod traits;
pub mod rational;
