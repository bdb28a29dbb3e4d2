//! # Values in memory
//!
//! This module provides the number types used to represent the values being approximated.
//! Types that only make sense inside one algorithm, like `Convergent`, live next to it in `algorithm`.

pub mod number_types;
