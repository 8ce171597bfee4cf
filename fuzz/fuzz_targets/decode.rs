#![no_main]

use libfuzzer_sys::fuzz_target;
use uv32_decoder::Strategy;

// Fuzz target: checked decode of one group.
//
// Catches bugs in:
// - Truncated groups and zero-length input
// - Overlong 5th byte / bits above bit 31
// - Disagreement between the checked path and the trusted formulations
//   on any group the checked path accepts
fuzz_target!(|data: &[u8]| {
    if let Ok((value, rest)) = uv32_decoder::decode(data) {
        assert!(data.len() - rest.len() <= 5);
        for strategy in Strategy::ALL {
            assert_eq!(strategy.decode_trusted(data), (value, rest), "{strategy}");
        }
    }
});
