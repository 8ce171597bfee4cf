/// Implementation of `uv32 encode`.
///
/// Encodes each value with its canonical varint and concatenates the
/// groups. The stream is printed as one hex string, or written as raw bytes
/// with `--output`.
///
/// ```text
/// $ uv32 encode 150 0
/// 960100
/// ```
use std::fs;

use anyhow::{Context, Result};
use uv32_wire::encode_u32_into;

use crate::EncodeArgs;

/// Run the `uv32 encode` command.
///
/// # Errors
///
/// Returns an error if the output file cannot be written.
pub fn run(args: &EncodeArgs) -> Result<()> {
    let bytes = encode_values(&args.values);
    tracing::debug!(
        values = args.values.len(),
        bytes = bytes.len(),
        "encoded stream"
    );

    match &args.output {
        Some(path) => {
            fs::write(path, &bytes).with_context(|| format!("cannot write {}", path.display()))?;
            println!(
                "wrote {} value{} ({} bytes) to {}",
                args.values.len(),
                if args.values.len() == 1 { "" } else { "s" },
                bytes.len(),
                path.display()
            );
        }
        None => println!("{}", hex::encode(&bytes)),
    }
    Ok(())
}

pub fn encode_values(values: &[u32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * 2);
    for &value in values {
        encode_u32_into(value, &mut bytes);
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_concatenated_stream() {
        assert_eq!(
            hex::encode(encode_values(&[0, 150, u32::MAX])),
            "009601ffffffff0f"
        );
    }
}
