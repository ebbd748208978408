//! Codec error types.

use thiserror::Error;

/// Errors returned by the conversion functions in this crate.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value does not fit the target width.
    #[error("Value needs {bits} bits, target holds {capacity}")]
    Overflow { bits: usize, capacity: usize },

    /// Hex input did not start with `0x`.
    #[error("Hex string is missing the 0x prefix")]
    MissingPrefix,

    /// Hex input has an odd number of digits after the prefix.
    #[error("Hex string has an odd number of digits ({digits})")]
    OddLength { digits: usize },

    /// Hex input contains a non-hex character.
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Decoded byte length differs from the required one.
    #[error("Expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// A text input contained a character that is not a single byte.
    #[error("Character {ch:?} at index {index} is not a byte value")]
    NonByteChar { ch: char, index: usize },
}
