//! Shared fixtures for the uv32 integration tests and benchmarks.
//!
//! ```text
//! ┌──────────────────────┬──────────────────────────────────────────────┐
//! │ Fixture              │ Contents                                     │
//! ├──────────────────────┼──────────────────────────────────────────────┤
//! │ BOUNDARY_VALUES      │ values on both sides of every length change  │
//! │ encode_all           │ concatenated canonical encodings             │
//! │ random_corpus        │ seeded random u32s plus their encoding       │
//! │ decode_stream        │ drive one formulation over a whole stream    │
//! └──────────────────────┴──────────────────────────────────────────────┘
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uv32_decoder::Strategy;
use uv32_wire::encode_u32_into;

/// Values around every chunk-count transition, plus a few small ones.
pub const BOUNDARY_VALUES: [u32; 32] = [
    0, 1, 2, 3, 4, 5,
    0xF, 0x10,
    0x7E, 0x7F, 0x80, 0x81,
    0xFF, 0x100,
    0x3FFE, 0x3FFF, 0x4000, 0x4001,
    0xFFFF, 0x1_0000,
    0x1F_FFFE, 0x1F_FFFF, 0x20_0000, 0x20_0001,
    0xFF_FFFF, 0x100_0000,
    0xFFF_FFFE, 0xFFF_FFFF, 0x1000_0000, 0x1000_0001,
    0xFFFF_FFFE, 0xFFFF_FFFF,
];

/// Size of the benchmark corpus.
pub const CORPUS_LEN: usize = 10_000;

/// Concatenate the canonical encodings of `values`.
pub fn encode_all(values: &[u32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * 5);
    for &value in values {
        encode_u32_into(value, &mut bytes);
    }
    bytes
}

/// `len` uniformly random values from a fixed seed, and their encoding.
///
/// Uniform `u32`s are dominated by 5-byte groups (15 of every 16 values),
/// which is the worst case for branchy decoders.
pub fn random_corpus(seed: u64, len: usize) -> (Vec<u32>, Vec<u8>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let values: Vec<u32> = (0..len).map(|_| rng.random()).collect();
    let bytes = encode_all(&values);
    (values, bytes)
}

/// Like [`random_corpus`], but with the bit width drawn first so that
/// every encoded length shows up about equally often.
pub fn mixed_width_corpus(seed: u64, len: usize) -> (Vec<u32>, Vec<u8>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let values: Vec<u32> = (0..len)
        .map(|_| {
            let bits = rng.random_range(1..=32u32);
            rng.random::<u32>() >> (32 - bits)
        })
        .collect();
    let bytes = encode_all(&values);
    (values, bytes)
}

/// Decode a whole stream with one trusted formulation.
///
/// # Panics
///
/// Panics if `bytes` is not a sequence of complete groups.
pub fn decode_stream(strategy: Strategy, mut bytes: &[u8]) -> Vec<u32> {
    let mut values = Vec::new();
    while !bytes.is_empty() {
        let (value, rest) = strategy.decode_trusted(bytes);
        values.push(value);
        bytes = rest;
    }
    values
}
