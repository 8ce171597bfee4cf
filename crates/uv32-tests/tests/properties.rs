//! Property tests over arbitrary `u32` values and byte strings.
//!
//! - **Round-trip**: every value decodes back from its own encoding with
//!   nothing left over, under every formulation.
//! - **Concatenation**: a stream of encodings decodes to the same sequence.
//! - **Cross-variant agreement**: on any complete group, with any trailing
//!   bytes, all formulations return the same `(value, rest)` pair.
//! - **Minimality**: encodings are as short as possible.
//! - **Checked totality**: the checked decoder never panics, and when it
//!   accepts a group the trusted formulations agree with it.

use quickcheck::{QuickCheck, TestResult, quickcheck};
use uv32_decoder::{DecodeError, DecoderConfig, Strategy, decode, decode_all};
use uv32_tests::{decode_stream, encode_all};
use uv32_wire::{MAX_VARINT32_BYTES, encode_u32_into, encoded_len};

fn encode(value: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    encode_u32_into(value, &mut bytes);
    bytes
}

quickcheck! {
    fn round_trip(value: u32) -> bool {
        let bytes = encode(value);
        Strategy::ALL
            .into_iter()
            .all(|strategy| strategy.decode_trusted(&bytes) == (value, &[][..]))
            && decode(&bytes) == Ok((value, &[][..]))
    }

    fn concatenation(values: Vec<u32>) -> bool {
        let bytes = encode_all(&values);
        Strategy::ALL
            .into_iter()
            .all(|strategy| decode_stream(strategy, &bytes) == values)
            && decode_all(&bytes, &DecoderConfig::checked()).as_ref() == Ok(&values)
    }

    fn trailing_bytes_are_left_alone(value: u32, trailing: Vec<u8>) -> bool {
        let mut bytes = encode(value);
        bytes.extend_from_slice(&trailing);
        let expected = (value, &trailing[..]);
        Strategy::ALL
            .into_iter()
            .all(|strategy| strategy.decode_trusted(&bytes) == expected)
            && decode(&bytes) == Ok(expected)
    }

    fn minimal_encoding(value: u32) -> bool {
        let bytes = encode(value);
        let last = bytes[bytes.len() - 1];
        bytes.len() == encoded_len(value)
            && bytes.len() <= MAX_VARINT32_BYTES
            && (value == 0 || last != 0)
            && bytes[..bytes.len() - 1].iter().all(|b| b & 0x80 != 0)
            && last & 0x80 == 0
    }
}

/// Any accepted group is also decoded identically by every trusted path.
fn checked_agrees_with_trusted(bytes: Vec<u8>) -> TestResult {
    let Ok((value, rest)) = decode(&bytes) else {
        return TestResult::discard();
    };
    let agrees = Strategy::ALL
        .into_iter()
        .all(|strategy| strategy.decode_trusted(&bytes) == (value, rest));
    TestResult::from_bool(agrees)
}

#[test]
fn checked_accepts_are_trusted_agreements() {
    QuickCheck::new()
        .tests(2_000)
        .quickcheck(checked_agrees_with_trusted as fn(Vec<u8>) -> TestResult);
}

/// The checked decoder's outcome depends only on the first five bytes.
fn checked_error_is_classified(bytes: Vec<u8>) -> bool {
    match decode(&bytes) {
        Ok((_, rest)) => rest.len() < bytes.len(),
        Err(DecodeError::TruncatedInput { offset }) => {
            offset == bytes.len() && bytes.len() < MAX_VARINT32_BYTES
        }
        Err(DecodeError::Overlong { offset }) => offset == 4 && bytes[4] & 0x80 != 0,
        Err(DecodeError::Overflow { offset, byte }) => {
            offset == 4 && byte == bytes[4] && byte > 0x0F && byte & 0x80 == 0
        }
        Err(DecodeError::Wire(_)) => false,
    }
}

#[test]
fn checked_errors_are_classified() {
    QuickCheck::new()
        .tests(2_000)
        .quickcheck(checked_error_is_classified as fn(Vec<u8>) -> bool);
}
