//! # Errors of the approximation entry points
//!
//! The algorithm itself only rejects bounds smaller than one. The entry points that first need to
//! turn a float or a piece of text into an exact value wrap the errors of those conversions.
use num::BigInt;

use crate::data::number_types::rational::NonFiniteError;
use crate::io::error::ParseError;

/// The denominator bound was smaller than one.
///
/// Contains the rejected value.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("denominator bound must be at least 1, got {0}")]
pub struct InvalidBound(pub BigInt);

/// An `ApproximationError` is returned by the entry points that accept something other than an
/// exact rational.
///
/// It is the highest error in the hierarchy.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApproximationError {
    /// The denominator bound is not a positive integer.
    #[error(transparent)]
    InvalidBound(#[from] InvalidBound),
    /// The float to approximate is infinite or not a number.
    #[error(transparent)]
    NonFinite(#[from] NonFiniteError),
    /// The text could not be read as a decimal number.
    #[error("could not read the value to approximate: {0}")]
    Parse(#[from] ParseError),
}
