//! `0x`-prefixed hex string ↔ byte conversions.

use alloy_primitives::B256;

use crate::error::CodecError;

const PREFIX: &str = "0x";

/// Render bytes as `0x` followed by two lowercase hex digits per byte.
pub fn bytes_to_hexstring(bytes: impl AsRef<[u8]>) -> String {
    format!("{PREFIX}{}", hex::encode(bytes))
}

/// Parse a `0x`-prefixed hex string into bytes.
///
/// The prefix is mandatory and the digit count must be even. Digits may be
/// upper or lower case. `"0x"` parses to an empty vector.
pub fn hexstring_to_bytes(s: &str) -> Result<Vec<u8>, CodecError> {
    let digits = s.strip_prefix(PREFIX).ok_or(CodecError::MissingPrefix)?;
    if digits.len() % 2 != 0 {
        return Err(CodecError::OddLength {
            digits: digits.len(),
        });
    }
    Ok(hex::decode(digits)?)
}

/// Parse a `0x`-prefixed hex string that must hold exactly 32 bytes.
pub fn hexstring_to_bytes32(s: &str) -> Result<B256, CodecError> {
    let bytes = hexstring_to_bytes(s)?;
    let word: [u8; 32] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| CodecError::InvalidLength {
            expected: 32,
            got: bytes.len(),
        })?;
    Ok(B256::from(word))
}
