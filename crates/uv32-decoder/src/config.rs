use std::fmt;
use std::str::FromStr;

use uv32_wire::MAX_VARINT32_BYTES;

use crate::checked;
use crate::error::{DecodeError, ParseConfigError};
use crate::strategy::Strategy;

/// How much the decoder trusts its input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Validation {
    /// Every group goes through [`checked::decode`]. Malformed input is
    /// reported, never truncated.
    #[default]
    Checked,

    /// Groups with at least 5 bytes behind them take the configured
    /// strategy's fast path, which neither detects overlong groups nor
    /// bits above bit 31. Shorter tails still go through
    /// [`checked::decode`].
    Trusted,
}

impl Validation {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Checked => "checked",
            Self::Trusted => "trusted",
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Validation {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "checked" => Ok(Self::Checked),
            "trusted" => Ok(Self::Trusted),
            _ => Err(ParseConfigError {
                kind: "validation mode",
                value: s.to_string(),
                expected: "checked, trusted",
            }),
        }
    }
}

/// Configuration for decoding.
///
/// ```text
/// ┌────────────┬─────────────────────────────────────────────────────┐
/// │ Field      │ Purpose                                             │
/// ├────────────┼─────────────────────────────────────────────────────┤
/// │ strategy   │ Trusted formulation used on the fast path           │
/// │ validation │ Checked (reject malformed) or Trusted (fast path)   │
/// └────────────┴─────────────────────────────────────────────────────┘
/// ```
///
/// With [`Validation::Checked`] the strategy has no effect on results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    pub strategy: Strategy,
    pub validation: Validation,
}

impl DecoderConfig {
    /// Checked decoding. Same as [`Default`].
    #[must_use]
    pub fn checked() -> Self {
        Self::default()
    }

    /// Trusted decoding with the given strategy on the fast path.
    #[must_use]
    pub fn trusted(strategy: Strategy) -> Self {
        Self {
            strategy,
            validation: Validation::Trusted,
        }
    }

    /// Decode one value from the front of `buf`.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when the group is malformed. In trusted
    /// mode only truncation is detected. Neither mode panics.
    pub fn decode<'a>(&self, buf: &'a [u8]) -> Result<(u32, &'a [u8]), DecodeError> {
        match self.validation {
            Validation::Trusted if buf.len() >= MAX_VARINT32_BYTES => {
                self.strategy.decode_fast(buf)
            }
            Validation::Checked | Validation::Trusted => checked::decode(buf),
        }
    }
}
