/// Implementation of `uv32 inspect`.
///
/// Walks the stream with the checked decoder and prints one row per group.
///
/// ```text
///   offset  len  bytes             value
///        0    2  96 01             150
///        2    1  00                0
///        3    5  ff ff ff ff 0f    4294967295
/// ---
/// 3 values in 8 bytes
/// ```
use anyhow::{Context, Result};
use uv32_decoder::VarintReader;

use crate::{InspectArgs, input};

/// Run the `uv32 inspect` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or a group is malformed.
/// Rows before the malformed group are printed first.
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes = input::read(&args.input)?;
    let mut reader = VarintReader::new(&bytes);
    let mut count = 0usize;

    println!("{:>8}  {:>3}  {:<16}  value", "offset", "len", "bytes");
    loop {
        let start = reader.position();
        let Some(value) = reader.next() else {
            break;
        };
        let value = value.with_context(|| format!("malformed varint after {count} values"))?;
        let end = reader.position();
        println!("{}", format_row(start, &bytes[start..end], value));
        count += 1;
    }

    println!("---");
    println!(
        "{count} value{} in {} bytes",
        if count == 1 { "" } else { "s" },
        bytes.len()
    );
    Ok(())
}

fn format_row(offset: usize, group: &[u8], value: u32) -> String {
    format!(
        "{offset:>8}  {:>3}  {:<16}  {value}",
        group.len(),
        input::hex_pairs(group)
    )
}
