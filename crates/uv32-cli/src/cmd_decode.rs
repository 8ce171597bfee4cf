/// Implementation of `uv32 decode`.
///
/// Decodes the whole stream and prints one value per line, or a JSON
/// report with `--json`:
///
/// ```text
/// $ uv32 decode --hex 960100 --json
/// {
///   "strategy": "unroll",
///   "validation": "checked",
///   "bytes": 3,
///   "count": 2,
///   "values": [150, 0]
/// }
/// ```
///
/// Values decoded before a malformed group are still printed in plain
/// mode; the error is reported afterwards and the exit code is 1.
use anyhow::{Context, Result};
use serde::Serialize;
use uv32_decoder::{DecoderConfig, Validation, VarintReader};

use crate::{DecodeArgs, input};

#[derive(Debug, Serialize)]
struct DecodeReport {
    strategy: &'static str,
    validation: &'static str,
    bytes: usize,
    count: usize,
    values: Vec<u32>,
}

/// Run the `uv32 decode` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the stream holds a
/// malformed group.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let bytes = input::read(&args.input)?;
    let config = DecoderConfig {
        strategy: args.strategy,
        validation: if args.trusted {
            Validation::Trusted
        } else {
            Validation::Checked
        },
    };
    tracing::debug!(?config, len = bytes.len(), "decoding stream");

    if args.json {
        let values =
            uv32_decoder::decode_all(&bytes, &config).context("failed to decode stream")?;
        let report = DecodeReport {
            strategy: config.strategy.name(),
            validation: config.validation.name(),
            bytes: bytes.len(),
            count: values.len(),
            values,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for value in VarintReader::with_config(&bytes, config) {
        let value = value.context("failed to decode stream")?;
        println!("{value}");
    }
    Ok(())
}
