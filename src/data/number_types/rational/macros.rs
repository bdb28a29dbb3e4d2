/// Shorthand for creating an exact rational number in tests.
///
/// A single argument creates an integer, two arguments a reduced fraction.
#[macro_export]
macro_rules! ER {
    ($value:expr) => {
        $crate::ExactRational::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::ExactRational::new($numer, $denom)
    };
}
