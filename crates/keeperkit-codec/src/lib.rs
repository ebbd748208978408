//! # keeperkit-codec
//!
//! Byte, integer and hex conversions for keeper bots. Contract calls deal in
//! 32-byte big-endian words and `0x`-prefixed hex; this crate converts between
//! those and native values:
//!
//! - [`int_to_bytes32`] / [`try_int_to_bytes32`]: integer to 32-byte word
//! - [`bytes_to_int`] / [`bytes_to_uint`]: big-endian bytes (or byte-valued
//!   text) of any length to integer
//! - [`bytes_to_hexstring`] / [`hexstring_to_bytes`]: bytes to and from `0x` hex
//! - [`ByteSource`]: the explicit "anything viewable as bytes" conversion
//!
//! ```rust
//! use keeperkit_codec::{bytes_to_hexstring, bytes_to_int, int_to_bytes32};
//!
//! let word = int_to_bytes32(512u64);
//! assert_eq!(bytes_to_int(word).unwrap(), alloy_primitives::U256::from(512u64));
//! assert_eq!(bytes_to_hexstring([0x01u8, 0x02, 0x03]), "0x010203");
//! ```

pub mod error;
pub mod hexstr;
pub mod int;
pub mod source;

pub use error::CodecError;
pub use hexstr::{bytes_to_hexstring, hexstring_to_bytes, hexstring_to_bytes32};
pub use int::{bytes_to_int, bytes_to_uint, int_to_bytes32, try_int_to_bytes32, WordInt};
pub use source::ByteSource;
