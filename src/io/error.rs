//! # Error reporting for reading of numbers
//!
//! Describes any problems encountered while reading a decimal number from text.

/// A `ParseError` represents all errors encountered during parsing.
///
/// Positions are byte offsets into the text after surrounding whitespace was trimmed.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// There was nothing but whitespace.
    #[error("no number to read, the text is empty")]
    Empty,
    /// There are no digits before or after the decimal point, for example in `"-."` or `"e3"`.
    #[error("the number has no digits before or after the decimal point")]
    MissingDigits,
    /// A character that can't be part of a decimal number.
    #[error("unexpected character {character:?} at byte {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position: usize,
    },
    /// The part after the `e` or `E` is not an integer, or is too large to expand.
    ///
    /// The contained `String` is the exponent text as read.
    #[error("invalid exponent \"{0}\"")]
    InvalidExponent(String),
}
