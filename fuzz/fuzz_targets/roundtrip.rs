#![no_main]

use libfuzzer_sys::fuzz_target;
use uv32_decoder::{DecoderConfig, decode_all};
use uv32_wire::{encode_u32_into, encoded_len};

// Fuzz target: encode→decode roundtrip of a value sequence.
//
// Interprets the input as little-endian u32s, encodes them back-to-back,
// and checks the checked decoder reproduces the sequence exactly.
fuzz_target!(|data: &[u8]| {
    let values: Vec<u32> = data
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    let mut bytes = Vec::new();
    for &value in &values {
        let before = bytes.len();
        encode_u32_into(value, &mut bytes);
        assert_eq!(bytes.len() - before, encoded_len(value));
    }

    let decoded = decode_all(&bytes, &DecoderConfig::checked()).unwrap();
    assert_eq!(decoded, values);
});
