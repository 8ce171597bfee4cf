#![warn(clippy::pedantic)]

//! Decoding of LEB128 varints into `u32`.
//!
//! Four interchangeable formulations of the same contract live in
//! [`trusted`]. They assume the input starts with a complete, well-formed
//! group and panic (on slice indexing) when it does not. [`checked::decode`]
//! is the hardened path: it never panics and reports malformed input as a
//! [`DecodeError`].
//!
//! ```text
//!   bytes ──► DecoderConfig::decode ──► (u32, rest)
//!                 │
//!                 ├── Checked ──► checked::decode
//!                 └── Trusted ──► Strategy::{Iter, Loop, Unroll, Lib}
//!                                 (checked::decode for tails < 5 bytes)
//! ```
//!
//! Streams of concatenated values are read with [`VarintReader`] or
//! [`decode_all`].

pub mod checked;
pub mod config;
pub mod error;
pub mod reader;
pub mod strategy;
pub mod trusted;

pub use checked::decode;
pub use config::{DecoderConfig, Validation};
pub use error::{DecodeError, ParseConfigError};
pub use reader::{VarintReader, decode_all};
pub use strategy::Strategy;
