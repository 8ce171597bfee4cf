use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};

use crate::InputArgs;

/// Load the encoded stream named by `args`.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read, or if `--hex` is
/// not valid hex.
pub fn read(args: &InputArgs) -> Result<Vec<u8>> {
    if let Some(hex) = &args.hex {
        return parse_hex(hex);
    }

    if let Some(path) = &args.file {
        let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
        tracing::debug!(path = %path.display(), len = bytes.len(), "read input file");
        return Ok(bytes);
    }

    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("cannot read stdin")?;
    tracing::debug!(len = bytes.len(), "read stdin");
    Ok(bytes)
}

/// Decode a hex string, ignoring whitespace and an optional `0x` prefix.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let compact: String = s.split_whitespace().collect();
    let digits = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(compact.as_str());
    hex::decode(digits).with_context(|| format!("invalid hex input `{s}`"))
}

/// Format bytes as space-separated lowercase hex pairs.
pub fn hex_pairs(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_ignores_whitespace_and_prefix() {
        assert_eq!(parse_hex("0x96 01\n00").unwrap(), vec![0x96, 0x01, 0x00]);
    }

    #[test]
    fn parse_hex_rejects_odd_length() {
        assert!(parse_hex("960").is_err());
    }

    #[test]
    fn hex_pairs_formats_groups() {
        assert_eq!(hex_pairs(&[0xFF, 0x0F]), "ff 0f");
        assert_eq!(hex_pairs(&[]), "");
    }
}
