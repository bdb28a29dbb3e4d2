//! # An exact, arbitrary precision rational type
//!
//! At the moment, this is wrapping the `num::BigRational` type, following the newtype pattern.
//! The inner type keeps its values in lowest terms with a positive denominator, so every value of
//! this type is in reduced form. The extra methods are the ones needed by the continued fraction
//! code, which the inner type either lacks or defines with a different rounding direction.
use num::{BigInt, BigRational, Integer};
use num_traits::{One, Zero};

mod wrapping;

/// An exact rational number `numer / denom` with `denom > 0` and `gcd(numer, denom) = 1`.
#[derive(
    Clone,
    Ord, PartialOrd, Eq, PartialEq,
    Hash,
    Debug,
)]
pub struct Exact(BigRational);

/// Conversion from a floating point value that is infinite or not a number.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("only finite values have an exact rational representation, got {0}")]
pub struct NonFiniteError(pub f64);

impl Exact {
    /// Create a new instance from a numerator and a denominator, reducing the fraction.
    ///
    /// # Panics
    ///
    /// If the denominator is zero.
    pub fn new<N: Into<BigInt>, D: Into<BigInt>>(numer: N, denom: D) -> Self {
        Self(BigRational::new(numer.into(), denom.into()))
    }

    /// Create a new instance, if the denominator is not zero.
    ///
    /// # Return value
    ///
    /// `None` if the denominator is zero, the reduced fraction otherwise.
    pub fn try_new<N: Into<BigInt>, D: Into<BigInt>>(numer: N, denom: D) -> Option<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            None
        } else {
            Some(Self::new(numer, denom))
        }
    }

    /// Create a new instance with denominator 1.
    pub fn from_integer<N: Into<BigInt>>(value: N) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    /// Wrap a pair that is already known to be in reduced form.
    ///
    /// Used for convergents, which are coprime by construction.
    pub(crate) fn new_raw(numer: BigInt, denom: BigInt) -> Self {
        debug_assert!(denom > BigInt::zero());
        debug_assert!(numer.gcd(&denom).is_one());

        Self(BigRational::new_raw(numer, denom))
    }

    /// The numerator, carrying the sign of the value.
    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    /// The denominator, always positive.
    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Split into the numerator and the denominator.
    pub fn into_parts(self) -> (BigInt, BigInt) {
        self.0.into()
    }

    /// The largest integer not larger than this value.
    ///
    /// Rounds towards negative infinity, also for negative values.
    pub fn floor(&self) -> BigInt {
        self.numer().div_floor(self.denom())
    }

    /// The value minus its floor, always in `[0, 1)`.
    pub fn fract(&self) -> Self {
        Self::new_raw(self.numer().mod_floor(self.denom()), self.denom().clone())
    }

    /// The nearest integer, rounding half-way cases away from zero.
    pub fn round(&self) -> Self {
        Self(self.0.round())
    }
}

impl TryFrom<f64> for Exact {
    type Error = NonFiniteError;

    /// Every finite float is a dyadic rational; the conversion is exact, no rounding happens.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        BigRational::from_float(value)
            .map(Self)
            .ok_or(NonFiniteError(value))
    }
}
