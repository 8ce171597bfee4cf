#![warn(clippy::pedantic)]

pub mod error;
pub mod varint;

pub use error::WireError;
pub use varint::{
    MAX_VARINT32_BYTES, MAX_VARINT_BYTES, decode_varint, encode_u32, encode_u32_into,
    encode_varint, encoded_len,
};
