//! Precondition-trusting formulations of the `u32` varint decoder.
//!
//! Every function here takes a slice that begins with a complete,
//! canonical varint group (1–5 bytes) and returns the decoded value along
//! with the bytes that follow the group. They agree bit-for-bit on all such
//! inputs and differ only in how they get there:
//!
//! ```text
//! ┌──────────────────┬───────────────────────────────────────────────────┐
//! │ Function         │ Shape                                             │
//! ├──────────────────┼───────────────────────────────────────────────────┤
//! │ decode_iter      │ loop with a running shift, stops on a clear MSB   │
//! │ decode_loop      │ bounded loop comparing against 1 << 7i            │
//! │ decode_unroll    │ five straight-line check-and-return steps         │
//! │ decode_lib       │ delegate to uv32_wire::decode_varint, narrow      │
//! └──────────────────┴───────────────────────────────────────────────────┘
//! ```
//!
//! Inputs that violate the precondition never cause undefined behaviour:
//! reads are bounds-checked and a short slice panics. Overlong or
//! overflowing groups are not detected; the value is truncated to 32 bits.
//! Use [`checked::decode`](crate::checked::decode) for untrusted input.

use uv32_wire::{MAX_VARINT32_BYTES, decode_varint};

use crate::error::DecodeError;

/// Canonical loop: OR each 7-bit chunk in at a growing shift.
///
/// # Panics
///
/// Panics if the slice ends before a byte with a clear continuation bit.
#[must_use]
pub fn decode_iter(buf: &[u8]) -> (u32, &[u8]) {
    let mut value: u32 = 0;
    let mut shift: u32 = 0;
    let mut i = 0;
    loop {
        let byte = buf[i];
        i += 1;
        // Chunks past bit 31 fall off, same as the fixed-width accumulator would.
        value |= u32::from(byte & 0x7F).checked_shl(shift).unwrap_or(0);
        if byte & 0x80 == 0 {
            return (value, &buf[i..]);
        }
        shift += 7;
    }
}

/// Fallible form of [`decode_iter`].
///
/// Walks the slice with an iterator instead of indexing, so a run of
/// continuation bytes that reaches the end of `buf` is reported rather than
/// panicking. Groups longer than 5 bytes are still accepted and truncated.
///
/// # Errors
///
/// Returns [`DecodeError::TruncatedInput`] with `offset == buf.len()` when no
/// byte in `buf` has a clear continuation bit.
pub fn try_decode_iter(buf: &[u8]) -> Result<(u32, &[u8]), DecodeError> {
    let mut value: u32 = 0;
    let mut shift: u32 = 0;
    for (i, &byte) in buf.iter().enumerate() {
        value |= u32::from(byte & 0x7F).checked_shl(shift).unwrap_or(0);
        if byte & 0x80 == 0 {
            return Ok((value, &buf[i + 1..]));
        }
        shift = shift.saturating_add(7);
    }
    Err(DecodeError::TruncatedInput { offset: buf.len() })
}

/// Bounded loop over the four possible continuation positions.
///
/// Raw bytes are OR-ed in unmasked. At step `i` the previous byte's
/// continuation bit sits exactly at bit `7i`, so the accumulator is below
/// `1 << 7i` iff the group already ended; otherwise that bit is cleared and
/// the next byte is OR-ed in on top of it.
///
/// # Panics
///
/// Panics if the slice is shorter than the encoded group.
#[must_use]
pub fn decode_loop(buf: &[u8]) -> (u32, &[u8]) {
    let mut value = u64::from(buf[0]);
    let mut i = 1;
    while i < MAX_VARINT32_BYTES {
        let shift = 7 * i;
        let limit = 1u64 << shift;
        if value < limit {
            break;
        }
        value &= !limit;
        value |= u64::from(buf[i]) << shift;
        i += 1;
    }
    (value as u32, &buf[i..])
}

/// Straight-line decode with one step per byte position.
///
/// # Panics
///
/// Panics if the slice is shorter than the encoded group.
#[must_use]
pub fn decode_unroll(buf: &[u8]) -> (u32, &[u8]) {
    let b = buf[0];
    if b < 0x80 {
        return (u32::from(b), &buf[1..]);
    }
    let mut value = u32::from(b & 0x7F);

    let b = buf[1];
    value |= u32::from(b & 0x7F) << 7;
    if b < 0x80 {
        return (value, &buf[2..]);
    }

    let b = buf[2];
    value |= u32::from(b & 0x7F) << 14;
    if b < 0x80 {
        return (value, &buf[3..]);
    }

    let b = buf[3];
    value |= u32::from(b & 0x7F) << 21;
    if b < 0x80 {
        return (value, &buf[4..]);
    }

    // Only the low 4 bits of the 5th chunk fit; the rest shift out.
    value |= u32::from(buf[4] & 0x7F) << 28;
    (value, &buf[5..])
}

/// Delegate to the general 64-bit LEB128 primitive and narrow to `u32`.
///
/// # Panics
///
/// Panics if the primitive rejects the input (truncated, or longer than
/// 10 bytes).
#[must_use]
pub fn decode_lib(buf: &[u8]) -> (u32, &[u8]) {
    match try_decode_lib(buf) {
        Ok(decoded) => decoded,
        Err(e) => panic!("decode_lib called on a malformed varint: {e}"),
    }
}

/// Fallible form of [`decode_lib`].
///
/// The primitive already reports truncation, so this is what the trusted
/// fast path calls instead of panicking. Values wider than 32 bits are
/// still truncated, not rejected.
///
/// # Errors
///
/// Returns [`DecodeError::Wire`] when `uv32_wire::decode_varint` fails.
pub fn try_decode_lib(buf: &[u8]) -> Result<(u32, &[u8]), DecodeError> {
    let (value, consumed) = decode_varint(buf)?;
    Ok((value as u32, &buf[consumed..]))
}
