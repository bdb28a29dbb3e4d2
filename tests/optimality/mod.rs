//! # Property-based tests
//!
//! The approximation is compared against an exhaustive search over all denominators.
use num::{BigInt, Integer};
use num_traits::One;
use proptest::prelude::*;

use best_rational::{approximate, approximate_f64, ExactRational};
use best_rational::data::number_types::traits::Abs;

/// The closest fraction with a denominator up to `bound`, found by trying all denominators.
///
/// Returns the error of the best candidate and the smallest denominator achieving it.
fn best_by_search(value: &ExactRational, bound: i64) -> (ExactRational, BigInt) {
    (1..=bound)
        .flat_map(|denominator| {
            let floor = (value * &ExactRational::from(denominator)).floor();
            [floor.clone(), floor + 1].map(move |numerator| ExactRational::new(numerator, denominator))
        })
        .map(|candidate| (distance(value, &candidate), candidate.denom().clone()))
        .min()
        .unwrap()
}

fn distance(x: &ExactRational, y: &ExactRational) -> ExactRational {
    (x - y).abs()
}

fn exact_value() -> impl Strategy<Value = ExactRational> {
    (-100_000i64..100_000i64, 1i64..100_000i64)
        .prop_map(|(numer, denom)| ExactRational::new(numer, denom))
}

proptest! {
    #[test]
    fn reduced_and_within_bound(value in exact_value(), bound in 1i64..1_000) {
        let result = approximate(&value, bound).unwrap();
        prop_assert!(result.denom() >= &BigInt::one());
        prop_assert!(result.denom() <= &BigInt::from(bound));
        prop_assert!(result.numer().gcd(result.denom()).is_one());
    }

    #[test]
    fn no_closer_fraction(value in exact_value(), bound in 1i64..=50) {
        let result = approximate(&value, bound).unwrap();
        let (error, denominator) = best_by_search(&value, bound);
        prop_assert_eq!(distance(&value, &result), error);
        prop_assert_eq!(result.denom(), &denominator);
    }

    #[test]
    fn exact_when_representable(numer in -1_000i64..1_000, denom in 1i64..1_000, slack in 0i64..1_000) {
        let value = ExactRational::new(numer, denom);
        let bound = value.denom() + slack;
        prop_assert_eq!(approximate(&value, bound), Ok(value));
    }

    #[test]
    fn symmetric_under_negation(value in exact_value(), bound in 1i64..1_000) {
        let result = approximate(&value, bound).unwrap();
        let negated = approximate(&-&value, bound).unwrap();
        prop_assert_eq!(negated, -result);
    }

    #[test]
    fn float_is_taken_exactly(float in -1e6f64..1e6f64, bound in 1i64..100_000) {
        let exact = ExactRational::try_from(float).unwrap();
        prop_assert_eq!(approximate_f64(float, bound), Ok(approximate(&exact, bound).unwrap()));
    }
}
