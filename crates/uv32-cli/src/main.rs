/// uv32 command-line tool: encode, decode, inspect, and cross-check
/// streams of LEB128 `u32` varints.
///
/// # Command overview
///
/// ```text
/// uv32 <COMMAND> [OPTIONS]
///
/// Commands:
///   encode     Encode decimal or 0x-prefixed values as varints
///   decode     Decode a varint stream, one value per line
///   inspect    Print offset, length, and bytes of every group
///   verify     Decode with every strategy and compare the results
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Enable debug logging on stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// Input for `decode`, `inspect`, and `verify` comes from a file argument,
/// from `--hex`, or from stdin when neither is given.
///
/// # Exit codes
///
/// | Code | Meaning                                        |
/// |------|------------------------------------------------|
/// | 0    | Success                                        |
/// | 1    | Error (I/O failure, malformed stream, mismatch) |
///
/// Logs and errors go to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use uv32_decoder::Strategy;

mod cmd_decode;
mod cmd_encode;
mod cmd_inspect;
mod cmd_verify;
mod input;

// ── CLI root ──────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "uv32", version, about = "LEB128 u32 varint tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (overrides `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Encode values as a concatenated varint stream.
    Encode(EncodeArgs),
    /// Decode a varint stream and print the values.
    Decode(DecodeArgs),
    /// Print every varint group with its offset and raw bytes.
    Inspect(InspectArgs),
    /// Decode with every strategy and check that they agree.
    Verify(VerifyArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Where to read an encoded stream from.
///
/// When neither a file nor `--hex` is given, raw bytes are read from stdin.
#[derive(clap::Args)]
pub struct InputArgs {
    /// File holding the raw encoded bytes.
    #[arg(conflicts_with = "hex")]
    pub file: Option<PathBuf>,

    /// Hex string of encoded bytes (whitespace is ignored).
    #[arg(long)]
    pub hex: Option<String>,
}

/// Arguments for `uv32 encode`.
///
/// ```text
/// $ uv32 encode 0 150 0xFFFFFFFF
/// 009601ffffffff0f
/// ```
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Values to encode, decimal or `0x`-prefixed hex.
    #[arg(required = true, value_parser = parse_u32)]
    pub values: Vec<u32>,

    /// Write raw bytes to this file instead of printing hex.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `uv32 decode`.
///
/// ```text
/// ┌──────────────┬─────────────────────────────────────────────────────┐
/// │ Flag         │ Effect                                              │
/// ├──────────────┼─────────────────────────────────────────────────────┤
/// │ --strategy S │ iter | loop | unroll (default) | lib                │
/// │ --trusted    │ Skip overlong/overflow checks on the fast path      │
/// │ --json       │ Print a JSON report instead of one value per line   │
/// └──────────────┴─────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Trusted formulation used on the fast path.
    #[arg(long, default_value_t = Strategy::default())]
    pub strategy: Strategy,

    /// Trust the input: malformed groups are truncated instead of rejected.
    #[arg(long)]
    pub trusted: bool,

    /// Print a JSON report.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `uv32 inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for `uv32 verify`.
///
/// The stream is first decoded with the checked decoder. Every strategy
/// then decodes the same bytes on its trusted path and must produce the
/// same values.
#[derive(clap::Args)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

fn parse_u32(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => u32::from_str_radix(&digits.replace('_', ""), 16),
        None => s.replace('_', "").parse(),
    };
    parsed.map_err(|e| format!("`{s}` is not a u32: {e}"))
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Encode(args) => cmd_encode::run(&args),
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Verify(args) => cmd_verify::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_u32_accepts_decimal_and_hex() {
        assert_eq!(parse_u32("150"), Ok(150));
        assert_eq!(parse_u32("0xFFFF_FFFF"), Ok(u32::MAX));
        assert_eq!(parse_u32("1_000"), Ok(1000));
    }

    #[test]
    fn parse_u32_rejects_out_of_range() {
        assert!(parse_u32("4294967296").is_err());
        assert!(parse_u32("-1").is_err());
    }

    #[test]
    fn cli_parses_decode_flags() {
        let cli = Cli::parse_from([
            "uv32",
            "decode",
            "--hex",
            "9601",
            "--strategy",
            "loop",
            "--trusted",
        ]);
        let Commands::Decode(args) = cli.command else {
            panic!("expected decode command");
        };
        assert_eq!(args.strategy, Strategy::Loop);
        assert!(args.trusted);
        assert_eq!(args.input.hex.as_deref(), Some("9601"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
