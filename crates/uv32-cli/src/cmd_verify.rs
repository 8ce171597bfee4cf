/// Implementation of `uv32 verify`.
///
/// Decodes the stream with the checked decoder, then runs every trusted
/// strategy over the same bytes and compares the results value by value.
///
/// ```text
/// ✓ checked: 3 values in 8 bytes
/// ✓ iter: agrees
/// ✓ loop: agrees
/// ✓ unroll: agrees
/// ✓ lib: agrees
/// ```
///
/// A disagreement prints the first differing index and exits with code 1.
use anyhow::{Context, Result, anyhow};
use uv32_decoder::{DecoderConfig, Strategy, decode_all};

use crate::{VerifyArgs, input};

/// Run the `uv32 verify` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the stream is malformed,
/// or any strategy disagrees with the checked decoder.
pub fn run(args: &VerifyArgs) -> Result<()> {
    let bytes = input::read(&args.input)?;
    let reference =
        decode_all(&bytes, &DecoderConfig::checked()).context("stream is not well-formed")?;
    println!(
        "✓ checked: {} values in {} bytes",
        reference.len(),
        bytes.len()
    );

    let mut failures = 0;
    for strategy in Strategy::ALL {
        let decoded = decode_trusted_stream(strategy, &bytes);
        tracing::trace!(%strategy, values = decoded.len(), "decoded with trusted path");
        match first_mismatch(&reference, &decoded) {
            None => println!("✓ {strategy}: agrees"),
            Some(index) => {
                failures += 1;
                println!(
                    "✗ {strategy}: differs at value {index} (expected {:?}, got {:?})",
                    reference.get(index),
                    decoded.get(index)
                );
            }
        }
    }

    if failures > 0 {
        return Err(anyhow!(
            "{failures} strategies disagree with the checked decoder"
        ));
    }
    Ok(())
}

/// Decode every group with `strategy`'s trusted formulation.
///
/// Only called after the checked decoder accepted `bytes`, so every group
/// is complete and no formulation can panic.
fn decode_trusted_stream(strategy: Strategy, bytes: &[u8]) -> Vec<u32> {
    let mut values = Vec::new();
    let mut rest = bytes;
    while !rest.is_empty() {
        let (value, tail) = strategy.decode_trusted(rest);
        values.push(value);
        rest = tail;
    }
    values
}

fn first_mismatch(expected: &[u32], actual: &[u32]) -> Option<usize> {
    expected
        .iter()
        .zip(actual)
        .position(|(a, b)| a != b)
        .or_else(|| (expected.len() != actual.len()).then(|| expected.len().min(actual.len())))
}
