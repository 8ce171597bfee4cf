#![no_main]

use libfuzzer_sys::fuzz_target;
use uv32_decoder::{DecoderConfig, Strategy, VarintReader};

// Fuzz target: VarintReader over arbitrary bytes.
//
// The checked reader must never panic and must account for every byte:
// decoded bytes plus the remainder always equal the input. The trusted
// reader must not panic with any strategy.
fuzz_target!(|data: &[u8]| {
    let mut reader = VarintReader::new(data);
    for _ in reader.by_ref() {}
    assert_eq!(reader.position() + reader.remaining().len(), data.len());

    for strategy in Strategy::ALL {
        let reader = VarintReader::with_config(data, DecoderConfig::trusted(strategy));
        for _ in reader {}
    }
});
