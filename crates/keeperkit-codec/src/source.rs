//! Explicit conversion of byte-like inputs into a byte view.

use std::borrow::Cow;

use alloy_primitives::B256;

use crate::error::CodecError;

/// A value that can be read as a big-endian byte sequence.
///
/// Byte containers borrow their contents as-is. Text is read code point by
/// code point: every `char` must lie in `U+0000..=U+00FF` and contributes
/// exactly one byte with that value, so `"\x01\x01"` reads as `[0x01, 0x01]`.
/// UTF-8 encoding is never applied.
pub trait ByteSource {
    fn byte_view(&self) -> Result<Cow<'_, [u8]>, CodecError>;
}

impl ByteSource for [u8] {
    fn byte_view(&self) -> Result<Cow<'_, [u8]>, CodecError> {
        Ok(Cow::Borrowed(self))
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    fn byte_view(&self) -> Result<Cow<'_, [u8]>, CodecError> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl ByteSource for Vec<u8> {
    fn byte_view(&self) -> Result<Cow<'_, [u8]>, CodecError> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl ByteSource for B256 {
    fn byte_view(&self) -> Result<Cow<'_, [u8]>, CodecError> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl ByteSource for str {
    fn byte_view(&self) -> Result<Cow<'_, [u8]>, CodecError> {
        self.chars()
            .enumerate()
            .map(|(index, ch)| {
                u8::try_from(ch).map_err(|_| CodecError::NonByteChar { ch, index })
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(Cow::Owned)
    }
}

impl ByteSource for String {
    fn byte_view(&self) -> Result<Cow<'_, [u8]>, CodecError> {
        self.as_str().byte_view()
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &T {
    fn byte_view(&self) -> Result<Cow<'_, [u8]>, CodecError> {
        (**self).byte_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_are_borrowed() {
        let data = vec![0x00, 0x01];
        assert!(matches!(data.byte_view().unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn text_maps_code_points_to_bytes() {
        let view = "\x00\u{ff}A".byte_view().unwrap();
        assert_eq!(view.as_ref(), &[0x00, 0xff, 0x41]);
    }

    #[test]
    fn text_is_not_utf8_encoded() {
        // U+00E9 is two bytes in UTF-8 but one byte here
        let view = "\u{e9}".byte_view().unwrap();
        assert_eq!(view.as_ref(), &[0xe9]);
    }

    #[test]
    fn wide_char_rejected() {
        let err = "ab\u{100}".byte_view().unwrap_err();
        assert!(matches!(err, CodecError::NonByteChar { ch: '\u{100}', index: 2 }));
    }
}
