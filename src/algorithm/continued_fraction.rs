//! # Continued fractions
//!
//! Every rational number has a finite continued fraction expansion
//! `a0 + 1 / (a1 + 1 / (a2 + ...))`. The coefficients are the quotients of the Euclidean algorithm
//! on the numerator and denominator. Truncating the expansion after each coefficient gives the
//! convergents, which are the best approximations among all fractions with a denominator no larger
//! than their own.
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use itertools::Itertools;
use num::{BigInt, Integer};
use num_traits::{One, Zero};

use crate::data::number_types::rational::ExactRational;

/// Lazily computed coefficients `a0, a1, ...` of the continued fraction of a rational number.
///
/// Only `a0` can be negative or zero; the following coefficients are at least one, and the last
/// one is at least two unless it is `a0`.
#[derive(Clone, Debug)]
pub struct ContinuedFraction {
    numer: BigInt,
    /// Zero once the expansion is exhausted.
    denom: BigInt,
}

impl ContinuedFraction {
    /// Start expanding a value.
    pub fn new(value: &ExactRational) -> Self {
        Self {
            numer: value.numer().clone(),
            denom: value.denom().clone(),
        }
    }
}

impl Iterator for ContinuedFraction {
    type Item = BigInt;

    fn next(&mut self) -> Option<Self::Item> {
        if self.denom.is_zero() {
            return None;
        }

        // Writing r_i = numer / denom, a_i = floor(r_i) and r_{i + 1} = 1 / (r_i - a_i), which is
        // denom / (numer - a_i * denom).
        let (coefficient, remainder) = self.numer.div_mod_floor(&self.denom);
        self.numer = mem::replace(&mut self.denom, remainder);

        Some(coefficient)
    }
}

impl FusedIterator for ContinuedFraction {}

/// One step `h_i / k_i` of the expansion, or one of the two seeds preceding it.
///
/// The numerator and denominator are coprime by the structure of the recurrence, and the
/// denominator is positive for every convergent that is not a seed.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Convergent {
    /// `h_i`
    pub numerator: BigInt,
    /// `k_i`
    pub denominator: BigInt,
}

impl Convergent {
    /// The seeds `h_{-2} / k_{-2} = 0 / 1` and `h_{-1} / k_{-1} = 1 / 0` of the recurrence.
    pub fn seeds() -> (Self, Self) {
        (
            Self { numerator: BigInt::zero(), denominator: BigInt::one() },
            Self { numerator: BigInt::one(), denominator: BigInt::zero() },
        )
    }

    /// Compute the convergent following `self`.
    ///
    /// # Arguments
    ///
    /// * `before`: The convergent preceding `self`.
    /// * `coefficient`: The next coefficient of the continued fraction.
    ///
    /// # Return value
    ///
    /// `(coefficient * h_i + h_{i - 1}) / (coefficient * k_i + k_{i - 1})`.
    pub fn following(&self, before: &Self, coefficient: &BigInt) -> Self {
        Self {
            numerator: coefficient * &self.numerator + &before.numerator,
            denominator: coefficient * &self.denominator + &before.denominator,
        }
    }

    /// The value of a convergent produced by the recurrence, which is coprime with a positive
    /// denominator.
    pub(crate) fn into_exact(self) -> ExactRational {
        ExactRational::new_raw(self.numerator, self.denominator)
    }
}

/// Reduces the pair, as the fields are public and need not come from the recurrence.
///
/// # Panics
///
/// If the denominator is zero, as for the seed `1 / 0`.
impl From<Convergent> for ExactRational {
    fn from(convergent: Convergent) -> Self {
        let Convergent { numerator, denominator } = convergent;
        Self::new(numerator, denominator)
    }
}

impl fmt::Display for Convergent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Lazily computed convergents `h_0 / k_0, h_1 / k_1, ...` of a rational number.
///
/// The last convergent equals the value that was expanded.
#[derive(Clone, Debug)]
pub struct Convergents {
    coefficients: ContinuedFraction,
    before: Convergent,
    last: Convergent,
}

impl Convergents {
    /// Start expanding a value.
    pub fn new(value: &ExactRational) -> Self {
        let (before, last) = Convergent::seeds();

        Self { coefficients: ContinuedFraction::new(value), before, last }
    }
}

impl Iterator for Convergents {
    type Item = Convergent;

    fn next(&mut self) -> Option<Self::Item> {
        let coefficient = self.coefficients.next()?;
        let next = self.last.following(&self.before, &coefficient);
        self.before = mem::replace(&mut self.last, next.clone());

        Some(next)
    }
}

impl FusedIterator for Convergents {}

/// Fold a list of continued fraction coefficients back into a single rational number.
///
/// # Arguments
///
/// * `coefficients`: `a0, a1, ...`, for which `a1` and onwards are typically positive.
///
/// # Return value
///
/// `None` if there are no coefficients, or if the expansion has a zero denominator (for example
/// for `[1; 0]`).
pub fn evaluate<I: IntoIterator<Item=BigInt>>(coefficients: I) -> Option<ExactRational> {
    let (before, last) = Convergent::seeds();
    let (_, last) = coefficients.into_iter()
        .fold((before, last), |(before, last), coefficient| {
            let next = last.following(&before, &coefficient);
            (last, next)
        });

    let Convergent { numerator, denominator } = last;
    ExactRational::try_new(numerator, denominator)
}

/// The conventional `[a0; a1, a2, ...]` notation of the continued fraction of a value.
pub fn notation(value: &ExactRational) -> String {
    let mut coefficients = ContinuedFraction::new(value);
    let first = match coefficients.next() {
        Some(first) => first,
        // Unreachable, a value has a positive denominator and thus at least one coefficient.
        None => return "[]".to_string(),
    };
    let rest = coefficients.join(", ");

    if rest.is_empty() {
        format!("[{}]", first)
    } else {
        format!("[{}; {}]", first, rest)
    }
}

impl ExactRational {
    /// The coefficients of the continued fraction of this value.
    pub fn continued_fraction(&self) -> ContinuedFraction {
        ContinuedFraction::new(self)
    }

    /// The convergents of the continued fraction of this value.
    pub fn convergents(&self) -> Convergents {
        Convergents::new(self)
    }
}
