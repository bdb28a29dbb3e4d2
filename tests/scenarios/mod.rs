//! # Fixed scenarios
//!
//! Values with a known best approximation, checked bit for bit.
use num::BigInt;

use best_rational::{approximate, approximate_f64, approximate_str, ApproximationError, DenominatorBound, ExactRational, InvalidBound};
use best_rational::algorithm::continued_fraction::{notation, Convergent};
use best_rational::io::error::ParseError;

fn exact(text: &str) -> ExactRational {
    text.parse().unwrap()
}

#[test]
fn decimal_with_bound_2323() {
    let value = exact("3232.45622121");
    assert_eq!(value, ExactRational::new(323_245_622_121_i64, 100_000_000));

    let approximation = approximate(&value, 2323).unwrap();
    assert_eq!(approximation.numer(), &BigInt::from(701_443));
    assert_eq!(approximation.denom(), &BigInt::from(217));
    assert_eq!(approximation.to_string(), "701443/217");

    assert_eq!(approximate_str("3232.45622121", 2323), Ok(approximation.clone()));
    assert_eq!(approximate_f64(3232.45622121, 2323), Ok(approximation));
}

#[test]
fn already_within_bound() {
    let value = ExactRational::new(22, 7);
    assert_eq!(approximate(&value, 100), Ok(value));
}

#[test]
fn pi() {
    assert_eq!(approximate(&exact("3.14159265358979"), 113), Ok(ExactRational::new(355, 113)));
    assert_eq!(approximate(&exact("-3.14159265358979"), 113), Ok(ExactRational::new(-355, 113)));
}

#[test]
fn negative_exact() {
    let approximation = approximate(&exact("-7.5"), 2).unwrap();
    assert_eq!(approximation, ExactRational::new(-15, 2));
    assert_eq!(approximation.to_string(), "-15/2");
}

#[test]
fn nearest_integer() {
    assert_eq!(approximate(&exact("2.4"), 1), Ok(ExactRational::from(2)));
    assert_eq!(approximate(&exact("2.5"), 1), Ok(ExactRational::from(3)));
    assert_eq!(approximate(&exact("-2.5"), 1), Ok(ExactRational::from(-3)));
    assert_eq!(approximate(&exact("-2.6"), 1), Ok(ExactRational::from(-3)));
    assert_eq!(approximate(&exact("0.49"), 1), Ok(ExactRational::from(0)));
}

#[test]
fn tie_break() {
    assert_eq!(approximate(&ExactRational::new(5, 12), 4), Ok(ExactRational::new(1, 2)));
    assert_eq!(approximate(&ExactRational::new(7, 24), 5), Ok(ExactRational::new(1, 3)));
}

#[test]
fn invalid_bound() {
    let value = exact("0.333");
    assert_eq!(approximate(&value, 0), Err(InvalidBound(BigInt::from(0))));
    assert_eq!(approximate(&value, -5), Err(InvalidBound(BigInt::from(-5))));
    assert_eq!(
        approximate_str("0.333", 0),
        Err(ApproximationError::InvalidBound(InvalidBound(BigInt::from(0)))),
    );
    assert_eq!(
        approximate_str("1/3", 3),
        Err(ApproximationError::Parse(ParseError::InvalidCharacter { character: '/', position: 1 })),
    );
}

#[test]
fn bound_as_value() {
    let bound = DenominatorBound::new(113).unwrap();
    let value = exact("3.14159265358979");
    assert_eq!(value.limit_denominator(&bound), ExactRational::new(355, 113));
    // Bounds beyond the range of the primitive integers are fine.
    let bound = DenominatorBound::new(BigInt::from(u128::MAX) * 7).unwrap();
    assert_eq!(value.limit_denominator(&bound), value);
}

#[test]
fn continued_fraction() {
    let value = ExactRational::new(10, 23);
    let coefficients = value.continued_fraction().collect::<Vec<_>>();
    assert_eq!(coefficients, [0, 2, 3, 3].map(BigInt::from));
    assert_eq!(notation(&value), "[0; 2, 3, 3]");

    let convergents = value.convergents().collect::<Vec<_>>();
    let expected = [(0, 1), (1, 2), (3, 7), (10, 23)]
        .map(|(numerator, denominator)| Convergent {
            numerator: BigInt::from(numerator),
            denominator: BigInt::from(denominator),
        });
    assert_eq!(convergents, expected);
}

#[test]
fn convergents_are_best_within_their_denominator() {
    let value = exact("3232.45622121");
    for convergent in value.convergents() {
        let denominator = convergent.denominator.clone();
        let expected = ExactRational::from(convergent);
        assert_eq!(approximate(&value, denominator), Ok(expected));
    }
}
