use crate::error::WireError;

/// Maximum number of bytes a u64 varint can occupy.
/// ceil(64 / 7) = 10 bytes.
pub const MAX_VARINT_BYTES: usize = 10;

/// Maximum number of bytes a u32 varint can occupy.
/// ceil(32 / 7) = 5 bytes. The fifth byte only carries 4 value bits.
pub const MAX_VARINT32_BYTES: usize = 5;

/// Number of bytes in the canonical encoding of `value`.
///
/// | Range                         | Length |
/// |-------------------------------|--------|
/// | `0 ..= 0x7F`                  | 1      |
/// | `0x80 ..= 0x3FFF`             | 2      |
/// | `0x4000 ..= 0x1F_FFFF`        | 3      |
/// | `0x20_0000 ..= 0xFFF_FFFF`    | 4      |
/// | `0x1000_0000 ..= 0xFFFF_FFFF` | 5      |
#[must_use]
pub fn encoded_len(value: u32) -> usize {
    // Bits needed, rounded up to whole 7-bit chunks. Zero still takes one byte.
    let bits = 32 - (value | 1).leading_zeros() as usize;
    bits.div_ceil(7)
}

/// Encode a `u32` as its canonical (minimal-length) varint.
///
/// # Returns
///
/// The number of bytes written (1–5).
///
/// # Panics
///
/// Panics if `buf` is shorter than [`encoded_len`]`(value)`.
/// A [`MAX_VARINT32_BYTES`]-byte buffer is always sufficient.
///
/// # Wire format examples
///
/// | Value        | Encoded bytes                    |
/// |--------------|----------------------------------|
/// | 0            | `[0x00]`                         |
/// | 150          | `[0x96, 0x01]`                   |
/// | 0x3FFF       | `[0xFF, 0x7F]`                   |
/// | 0x4000       | `[0x80, 0x80, 0x01]`             |
/// | `u32::MAX`   | `[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]` |
pub fn encode_u32(mut value: u32, buf: &mut [u8]) -> usize {
    let mut i = 0;
    while value >= 0x80 {
        buf[i] = (value as u8 & 0x7F) | 0x80;
        value >>= 7;
        i += 1;
    }
    buf[i] = value as u8;
    i + 1
}

/// Append the canonical varint encoding of `value` to `out`.
pub fn encode_u32_into(value: u32, out: &mut Vec<u8>) {
    let mut buf = [0u8; MAX_VARINT32_BYTES];
    let len = encode_u32(value, &mut buf);
    out.extend_from_slice(&buf[..len]);
}

/// Encode a `u64` value as an unsigned LEB128 varint into the provided buffer.
///
/// # Returns
///
/// The number of bytes written (1–10).
///
/// # Panics
///
/// Panics if `buf` is shorter than the required encoding length.
/// A 10-byte buffer is always sufficient for any `u64`.
pub fn encode_varint(mut value: u64, buf: &mut [u8]) -> usize {
    let mut i = 0;
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;

        if value > 0 {
            byte |= 0x80;
        }

        buf[i] = byte;
        i += 1;

        if value == 0 {
            break;
        }
    }
    i
}

/// Decode an unsigned LEB128 varint from the provided byte slice.
///
/// This is the general 64-bit primitive. Narrower decoders may delegate to
/// it and truncate the result.
///
/// # Returns
///
/// `(decoded_value, bytes_consumed)` on success.
///
/// # Errors
///
/// - [`WireError::VarintTooLong`] if more than 10 bytes are consumed
///   without finding a terminating byte.
/// - [`WireError::UnexpectedEof`] if the slice ends mid-varint.
pub fn decode_varint(buf: &[u8]) -> Result<(u64, usize), WireError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    for (i, &byte) in buf.iter().enumerate() {
        if i >= MAX_VARINT_BYTES {
            return Err(WireError::VarintTooLong);
        }

        result |= u64::from(byte & 0x7F) << shift;
        shift += 7;

        if byte & 0x80 == 0 {
            return Ok((result, i + 1));
        }
    }

    Err(WireError::UnexpectedEof { offset: buf.len() })
}
