//! # Wrapping existing methods
//!
//! Standard operations on the exact type, simply wrapping the operations already defined on the
//! inner type.
use std::fmt;

use crate::data::number_types::rational::exact::Exact;

mod creation {
    use num::BigInt;

    use crate::data::number_types::rational::exact::Exact;

    impl From<BigInt> for Exact {
        fn from(value: BigInt) -> Self {
            Self::from_integer(value)
        }
    }

    macro_rules! from_primitive_integer {
        ($($t:ty),*) => {
            $(
                impl From<$t> for Exact {
                    fn from(value: $t) -> Self {
                        Self::from_integer(value)
                    }
                }
            )*
        };
    }
    from_primitive_integer!(i32, i64, i128, u32, u64, u128);

    impl From<&Exact> for Exact {
        fn from(value: &Exact) -> Self {
            value.clone()
        }
    }
}

mod field {
    use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

    use crate::data::number_types::rational::exact::Exact;

    /// All four combinations of owned and borrowed operands, plus the assigning variants.
    macro_rules! forward_operation {
        ($operation:ident, $method:ident, $assign_operation:ident, $assign_method:ident) => {
            impl $operation for Exact {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self::Output {
                    Self($operation::$method(self.0, rhs.0))
                }
            }

            impl $operation<&Exact> for Exact {
                type Output = Self;

                fn $method(self, rhs: &Self) -> Self::Output {
                    Self($operation::$method(self.0, &rhs.0))
                }
            }

            impl $operation<Exact> for &Exact {
                type Output = Exact;

                fn $method(self, rhs: Exact) -> Self::Output {
                    Exact($operation::$method(&self.0, rhs.0))
                }
            }

            impl $operation for &Exact {
                type Output = Exact;

                fn $method(self, rhs: Self) -> Self::Output {
                    Exact($operation::$method(&self.0, &rhs.0))
                }
            }

            impl $assign_operation for Exact {
                fn $assign_method(&mut self, rhs: Self) {
                    $assign_operation::$assign_method(&mut self.0, rhs.0)
                }
            }

            impl $assign_operation<&Exact> for Exact {
                fn $assign_method(&mut self, rhs: &Self) {
                    $assign_operation::$assign_method(&mut self.0, &rhs.0)
                }
            }
        };
    }

    forward_operation!(Add, add, AddAssign, add_assign);
    forward_operation!(Sub, sub, SubAssign, sub_assign);
    forward_operation!(Mul, mul, MulAssign, mul_assign);
    // Panics on a zero divisor, like the inner type.
    forward_operation!(Div, div, DivAssign, div_assign);

    mod neg {
        use std::ops::Neg;

        use crate::data::number_types::rational::exact::Exact;

        impl Neg for Exact {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl Neg for &Exact {
            type Output = Exact;

            fn neg(self) -> Self::Output {
                Exact(-&self.0)
            }
        }
    }

    mod identities {
        use num_traits::{One, Zero};

        use crate::data::number_types::rational::exact::Exact;

        impl Zero for Exact {
            fn zero() -> Self {
                Self(Zero::zero())
            }

            fn is_zero(&self) -> bool {
                self.0.is_zero()
            }
        }

        impl One for Exact {
            fn one() -> Self {
                Self(One::one())
            }

            fn is_one(&self) -> bool {
                self.0.is_one()
            }
        }
    }
}

impl fmt::Display for Exact {
    /// Formats as `numer/denom`, or only as `numer` when the value is an integer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
