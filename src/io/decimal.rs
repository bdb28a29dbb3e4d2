//! # Decimal number parsing
//!
//! Reading decimal numbers such as `"3232.45622121"` or `"-1.5e-3"` from text into an exact
//! rational, without any rounding.
use std::str::FromStr;

use num::BigInt;

use crate::data::number_types::rational::ExactRational;
use crate::io::error::ParseError;

/// Largest magnitude of an explicit exponent.
///
/// Keeps `"1e999999999"` from expanding into a gigantic integer.
const EXPONENT_LIMIT: u64 = 100_000;

impl FromStr for ExactRational {
    type Err = ParseError;

    /// Read a string representation of a decimal (`[+-]abc.xyz[eE][+-]n`) number.
    ///
    /// Either the digits before or the digits after the decimal point may be left out, but not
    /// both. Fractions (`"22/7"`), digit separators, `inf` and `nan` are rejected.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Raw::try_from(text).map(Self::from)
    }
}

impl From<Raw> for ExactRational {
    fn from(value: Raw) -> Self {
        let Raw { sign, digits, exponent } = value;

        let numerator = match sign {
            Sign::Positive => digits,
            Sign::Negative => -digits,
        };
        // Bounded by the exponent limit plus the length of the text.
        let power = num_traits::pow(BigInt::from(10), exponent.unsigned_abs() as usize);

        if exponent < 0 {
            Self::new(numerator, power)
        } else {
            Self::from_integer(numerator * power)
        }
    }
}

/// Intermediate form of a read number, `sign * digits * 10^exponent`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub(crate) struct Raw {
    sign: Sign,
    /// All digits of the mantissa, without the decimal point.
    digits: BigInt,
    exponent: i64,
}

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub(crate) enum Sign {
    Positive,
    Negative,
}

impl TryFrom<&str> for Raw {
    type Error = ParseError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let text = text.trim();
        let (sign, unsigned) = match text.chars().next() {
            None => return Err(ParseError::Empty),
            Some('-') => (Sign::Negative, &text[1..]),
            Some('+') => (Sign::Positive, &text[1..]),
            Some(_) => (Sign::Positive, text),
        };
        let offset = text.len() - unsigned.len();

        let (mantissa, exponent_text) = match unsigned.find(|character: char| matches!(character, 'e' | 'E')) {
            None => (unsigned, None),
            Some(index) => (&unsigned[..index], Some(&unsigned[(index + 1)..])),
        };

        let mut point = None;
        for (index, character) in mantissa.char_indices() {
            match character {
                '0'..='9' => {},
                '.' if point.is_none() => point = Some(index),
                _ => return Err(ParseError::InvalidCharacter { character, position: offset + index }),
            }
        }

        let (integer_part, fraction_part) = match point {
            None => (mantissa, ""),
            Some(index) => (&mantissa[..index], &mantissa[(index + 1)..]),
        };
        if integer_part.is_empty() && fraction_part.is_empty() {
            return Err(ParseError::MissingDigits);
        }

        let digits = [integer_part, fraction_part].concat()
            .parse::<BigInt>()
            .map_err(|_| ParseError::MissingDigits)?;
        let exponent = match exponent_text {
            None => 0,
            Some(exponent_text) => parse_exponent(exponent_text)?,
        };

        Ok(Self {
            sign,
            digits,
            exponent: exponent - fraction_part.len() as i64,
        })
    }
}

/// Read the integer after the `e` of a number in scientific notation.
fn parse_exponent(text: &str) -> Result<i64, ParseError> {
    let invalid = || ParseError::InvalidExponent(text.to_string());

    // Also accepts an explicit plus sign.
    let exponent = text.parse::<i64>().map_err(|_| invalid())?;
    if exponent.unsigned_abs() > EXPONENT_LIMIT {
        Err(invalid())
    } else {
        Ok(exponent)
    }
}
