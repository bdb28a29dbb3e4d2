//! # Best rational approximation with a bounded denominator
//!
//! Given an exact value `x` and a bound `N >= 1`, find the fraction `p / q` with `1 <= q <= N`
//! that is closest to `x`.
//!
//! The convergents of the continued fraction of `x` are computed until the first one with a
//! denominator larger than `N`. The answer is then either the last convergent within the bound,
//! or the largest semiconvergent between that convergent and the one before it that still fits
//! the bound. Among equally close candidates the one with the smaller denominator is returned.
use std::cmp::Ordering;
use std::fmt;

use num::{BigInt, Integer};
use num_traits::One;
use tracing::{debug, trace};

use crate::algorithm::continued_fraction::Convergent;
use crate::data::number_types::rational::ExactRational;
use crate::data::number_types::traits::Abs;

pub use error::{ApproximationError, InvalidBound};

mod error;

/// The largest denominator an approximation may have.
///
/// Always at least one.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct DenominatorBound(BigInt);

impl DenominatorBound {
    /// Create a new bound.
    ///
    /// # Errors
    ///
    /// If the value is smaller than one.
    pub fn new<B: Into<BigInt>>(value: B) -> Result<Self, InvalidBound> {
        let value = value.into();
        if value < BigInt::one() {
            Err(InvalidBound(value))
        } else {
            Ok(Self(value))
        }
    }

    /// The bound as an integer.
    pub fn get(&self) -> &BigInt {
        &self.0
    }

    /// Whether a denominator respects this bound.
    pub fn admits(&self, denominator: &BigInt) -> bool {
        denominator <= &self.0
    }
}

impl fmt::Display for DenominatorBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Approximate a value by the closest fraction with a denominator not exceeding `bound`.
///
/// # Arguments
///
/// * `value`: Exact value to approximate.
/// * `bound`: Largest allowed denominator.
///
/// # Return value
///
/// The closest fraction in reduced form, preferring the smaller denominator on ties.
///
/// # Errors
///
/// If the bound is smaller than one.
pub fn approximate<B: Into<BigInt>>(
    value: &ExactRational,
    bound: B,
) -> Result<ExactRational, InvalidBound> {
    let bound = DenominatorBound::new(bound)?;

    Ok(value.limit_denominator(&bound))
}

/// Approximate a float after converting it to a rational without any rounding.
///
/// Note that the float closest to a decimal like `0.1` is not exactly that decimal, so the result
/// can differ from approximating the decimal when the bound is large.
///
/// # Errors
///
/// If the bound is smaller than one, or if the value is infinite or not a number.
pub fn approximate_f64<B: Into<BigInt>>(
    value: f64,
    bound: B,
) -> Result<ExactRational, ApproximationError> {
    let bound = DenominatorBound::new(bound)?;
    let value = ExactRational::try_from(value)?;

    Ok(value.limit_denominator(&bound))
}

/// Approximate a decimal number that is read from text without any rounding.
///
/// # Errors
///
/// If the bound is smaller than one, or if the text is not a decimal number.
pub fn approximate_str<B: Into<BigInt>>(
    text: &str,
    bound: B,
) -> Result<ExactRational, ApproximationError> {
    let bound = DenominatorBound::new(bound)?;
    let value = text.parse::<ExactRational>()?;

    Ok(value.limit_denominator(&bound))
}

impl ExactRational {
    /// The closest fraction to this value with a denominator not exceeding `bound`.
    ///
    /// Among equally close candidates, the smaller denominator is returned. The only case in which
    /// two equally close candidates have the same denominator is a bound of one with a value
    /// exactly halfway between two integers; that case rounds away from zero.
    pub fn limit_denominator(&self, bound: &DenominatorBound) -> Self {
        let (mut before, mut last) = Convergent::seeds();

        for coefficient in self.continued_fraction() {
            let next = last.following(&before, &coefficient);
            trace!(%coefficient, convergent = %next, "expanded continued fraction");

            // The first convergent has denominator one, so `last` is not a seed from here on.
            if !bound.admits(&next.denominator) {
                return closest_candidate(self, bound, before, last);
            }

            before = std::mem::replace(&mut last, next);
        }

        // The expansion terminated within the bound, the last convergent is the value itself.
        let value = last.into_exact();
        debug_assert_eq!(&value, self);
        value
    }
}

/// Choose between the last convergent within the bound and the best semiconvergent.
///
/// # Arguments
///
/// * `value`: Value being approximated.
/// * `bound`: Largest allowed denominator.
/// * `before`: Convergent `h_{i - 2} / k_{i - 2}`, possibly the seed `1 / 0`.
/// * `last`: Convergent `h_{i - 1} / k_{i - 1}`, the last one respecting the bound.
fn closest_candidate(
    value: &ExactRational,
    bound: &DenominatorBound,
    before: Convergent,
    last: Convergent,
) -> ExactRational {
    // The largest `m` with `k_{i - 2} + m k_{i - 1} <= N`. It is smaller than `a_i`, because the
    // full step `a_i` overshoots the bound.
    let multiplier = (bound.get() - &before.denominator).div_floor(&last.denominator);
    let semiconvergent = Convergent {
        numerator: &before.numerator + &multiplier * &last.numerator,
        denominator: &before.denominator + &multiplier * &last.denominator,
    };
    debug!(
        %bound, %multiplier, convergent = %last, %semiconvergent,
        "comparing convergent with semiconvergent"
    );

    let convergent = last.into_exact();
    let semiconvergent = semiconvergent.into_exact();

    let convergent_error = (value - &convergent).abs();
    let semiconvergent_error = (value - &semiconvergent).abs();

    let semiconvergent_wins = match semiconvergent_error.cmp(&convergent_error) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => match semiconvergent.denom().cmp(convergent.denom()) {
            Ordering::Less => true,
            Ordering::Greater => false,
            // Bound one, value halfway between two integers.
            Ordering::Equal => semiconvergent.clone().abs() > convergent.clone().abs(),
        },
    };

    if semiconvergent_wins {
        semiconvergent
    } else {
        convergent
    }
}
