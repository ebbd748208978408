//! Big-endian integer ↔ byte conversions.

use alloy_primitives::{Uint, B256, U256};

use crate::error::CodecError;
use crate::source::ByteSource;

const WORD_BYTES: usize = 32;
const WORD_BITS: usize = WORD_BYTES * 8;

/// Unsigned integers that always fit a 32-byte word.
///
/// Implemented for the native unsigned types and [`U256`]. Byte containers
/// such as `B256` are read with [`bytes_to_int`] instead.
pub trait WordInt {
    fn into_word_int(self) -> U256;
}

macro_rules! impl_word_int {
    ($($t:ty),*) => {
        $(
            impl WordInt for $t {
                fn into_word_int(self) -> U256 {
                    U256::from(self)
                }
            }
        )*
    };
}

impl_word_int!(u8, u16, u32, u64, u128, usize);

impl WordInt for U256 {
    fn into_word_int(self) -> U256 {
        self
    }
}

/// Encode `n` as a 32-byte big-endian word, left-padded with zeros.
pub fn int_to_bytes32(n: impl WordInt) -> B256 {
    B256::from(n.into_word_int().to_be_bytes::<WORD_BYTES>())
}

/// Encode an integer of any width as a 32-byte word.
///
/// Fails with [`CodecError::Overflow`] if the value needs more than 256 bits.
/// Values are never truncated.
pub fn try_int_to_bytes32<const BITS: usize, const LIMBS: usize>(
    n: Uint<BITS, LIMBS>,
) -> Result<B256, CodecError> {
    let be = n.to_be_bytes_vec();
    let significant = strip_leading_zeros(&be);
    if significant.len() > WORD_BYTES {
        return Err(CodecError::Overflow {
            bits: n.bit_len(),
            capacity: WORD_BITS,
        });
    }

    let mut word = B256::ZERO;
    word[WORD_BYTES - significant.len()..].copy_from_slice(significant);
    Ok(word)
}

/// Decode big-endian bytes of any length into a [`U256`].
///
/// Leading zeros are ignored and an empty input decodes to zero. Inputs with
/// more than 32 significant bytes fail with [`CodecError::Overflow`]; use
/// [`bytes_to_uint`] with a wider target for those.
pub fn bytes_to_int<S: ByteSource>(source: S) -> Result<U256, CodecError> {
    bytes_to_uint::<256, 4, S>(source)
}

/// Decode big-endian bytes of any length into a `Uint` of the chosen width.
pub fn bytes_to_uint<const BITS: usize, const LIMBS: usize, S: ByteSource>(
    source: S,
) -> Result<Uint<BITS, LIMBS>, CodecError> {
    let view = source.byte_view()?;
    let significant = strip_leading_zeros(&view);
    if significant.is_empty() {
        return Ok(Uint::ZERO);
    }

    Uint::try_from_be_slice(significant).ok_or_else(|| CodecError::Overflow {
        bits: bit_length(significant),
        capacity: BITS,
    })
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[first..]
}

/// Bit length of an already-stripped big-endian slice.
fn bit_length(significant: &[u8]) -> usize {
    match significant.first() {
        Some(&top) => (significant.len() - 1) * 8 + (8 - top.leading_zeros() as usize),
        None => 0,
    }
}
