//! Cross-function properties of the codec.

use alloy_primitives::U256;
use keeperkit_codec::{
    bytes_to_hexstring, bytes_to_int, hexstring_to_bytes, hexstring_to_bytes32, int_to_bytes32,
};

// ─── Integer words ────────────────────────────────────────────────────────────

#[test]
fn word_decodes_back_to_value() {
    let samples = [
        U256::ZERO,
        U256::from(1u64),
        U256::from(512u64),
        U256::from(u128::MAX),
        U256::MAX >> 1,
        U256::MAX,
    ];
    for n in samples {
        assert_eq!(bytes_to_int(int_to_bytes32(n)).unwrap(), n, "value {n}");
    }
}

#[test]
fn every_bit_position_round_trips() {
    let one = U256::from(1u64);
    for k in 0..256usize {
        let power = one << k;
        let below = power - one;
        assert_eq!(bytes_to_int(int_to_bytes32(power)).unwrap(), power, "2^{k}");
        assert_eq!(bytes_to_int(int_to_bytes32(below)).unwrap(), below, "2^{k} - 1");
    }
}

#[test]
fn native_widths_round_trip() {
    assert_eq!(bytes_to_int(int_to_bytes32(u8::MAX)).unwrap(), U256::from(u8::MAX));
    assert_eq!(bytes_to_int(int_to_bytes32(u64::MAX)).unwrap(), U256::from(u64::MAX));
    assert_eq!(bytes_to_int(int_to_bytes32(u128::MAX)).unwrap(), U256::from(u128::MAX));
}

#[test]
fn byte_and_text_inputs_agree() {
    let raw = [0x00u8, 0x7f, 0x80, 0xff];
    let text: String = raw.iter().map(|&b| char::from(b)).collect();
    assert_eq!(bytes_to_int(raw).unwrap(), bytes_to_int(&text).unwrap());
}

// ─── Hex strings ──────────────────────────────────────────────────────────────

#[test]
fn hex_string_survives_decode_encode() {
    for s in ["0x", "0x00", "0x010203", "0xffff", "0xdeadbeef00"] {
        assert_eq!(bytes_to_hexstring(hexstring_to_bytes(s).unwrap()), s);
    }
}

#[test]
fn bytes_survive_encode_decode() {
    let bytes: Vec<u8> = (0..=255).collect();
    let s = bytes_to_hexstring(&bytes);
    assert_eq!(s.len(), 2 + 2 * bytes.len());
    assert_eq!(hexstring_to_bytes(&s).unwrap(), bytes);
}

#[test]
fn word_hex_matches_hex_crate() {
    let word = int_to_bytes32(0x0102_0304u64);
    let s = bytes_to_hexstring(word);
    assert_eq!(s, format!("0x{}", hex::encode(word)));
    assert_eq!(hexstring_to_bytes32(&s).unwrap(), word);
}
