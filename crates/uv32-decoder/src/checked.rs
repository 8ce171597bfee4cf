use uv32_wire::MAX_VARINT32_BYTES;

use crate::error::DecodeError;

/// Largest value the 5th byte may hold: 32 - 4 * 7 = 4 value bits, no
/// continuation bit.
const LAST_BYTE_MAX: u8 = 0x0F;

/// Decode one `u32` varint from the front of `buf`, rejecting malformed input.
///
/// Reads at most [`MAX_VARINT32_BYTES`] bytes and never panics.
///
/// # Returns
///
/// `(value, rest)` where `rest` is `buf` with the consumed group removed.
///
/// # Errors
///
/// - [`DecodeError::TruncatedInput`] if `buf` ends before a byte with a
///   clear continuation bit (this includes an empty `buf`).
/// - [`DecodeError::Overlong`] if the 5th byte still has its continuation
///   bit set.
/// - [`DecodeError::Overflow`] if the 5th byte terminates the group but
///   sets bits above bit 31.
///
/// # Example
///
/// ```
/// let (value, rest) = uv32_decoder::decode(&[0x96, 0x01, 0x2A]).unwrap();
/// assert_eq!(value, 150);
/// assert_eq!(rest, &[0x2A]);
/// ```
pub fn decode(buf: &[u8]) -> Result<(u32, &[u8]), DecodeError> {
    let mut value: u32 = 0;

    for (i, &byte) in buf.iter().take(MAX_VARINT32_BYTES).enumerate() {
        if i == MAX_VARINT32_BYTES - 1 {
            if byte & 0x80 != 0 {
                return Err(DecodeError::Overlong { offset: i });
            }
            if byte > LAST_BYTE_MAX {
                return Err(DecodeError::Overflow { offset: i, byte });
            }
        }

        value |= u32::from(byte & 0x7F) << (7 * i);

        if byte & 0x80 == 0 {
            return Ok((value, &buf[i + 1..]));
        }
    }

    // Only reachable with fewer than 5 bytes, all continuation bytes.
    Err(DecodeError::TruncatedInput { offset: buf.len() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_worked_examples() {
        assert_eq!(decode(&[0x00]).unwrap(), (0, &[][..]));
        assert_eq!(decode(&[0x96, 0x01]).unwrap(), (150, &[][..]));
        assert_eq!(
            decode(&[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]).unwrap(),
            (u32::MAX, &[][..])
        );
    }

    #[test]
    fn empty_input_is_truncated() {
        assert_eq!(decode(&[]), Err(DecodeError::TruncatedInput { offset: 0 }));
    }

    #[test]
    fn missing_terminator_is_truncated() {
        assert_eq!(
            decode(&[0x80, 0xFF, 0x81]),
            Err(DecodeError::TruncatedInput { offset: 3 })
        );
    }

    #[test]
    fn four_continuation_bytes_are_truncated() {
        assert_eq!(
            decode(&[0x80; 4]),
            Err(DecodeError::TruncatedInput { offset: 4 })
        );
    }

    #[test]
    fn continuation_on_fifth_byte_is_overlong() {
        assert_eq!(
            decode(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x00]),
            Err(DecodeError::Overlong { offset: 4 })
        );
        // Also when the buffer stops right there.
        assert_eq!(
            decode(&[0xFF; 5]),
            Err(DecodeError::Overlong { offset: 4 })
        );
    }

    #[test]
    fn high_bits_on_fifth_byte_overflow() {
        assert_eq!(
            decode(&[0xFF, 0xFF, 0xFF, 0xFF, 0x10]),
            Err(DecodeError::Overflow {
                offset: 4,
                byte: 0x10,
            })
        );
    }

    #[test]
    fn non_canonical_padding_is_accepted() {
        // Minimality is an encoder property; the decoder takes padded groups.
        assert_eq!(decode(&[0x81, 0x80, 0x00]).unwrap(), (1, &[][..]));
    }

    #[test]
    fn stops_after_group() {
        let (value, rest) = decode(&[0x80, 0x80, 0x01, 0xFF, 0xFF]).unwrap();
        assert_eq!(value, 0x4000);
        assert_eq!(rest, &[0xFF, 0xFF]);
    }
}
