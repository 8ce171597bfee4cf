use uv32_wire::WireError;

/// Errors produced by the hardened `u32` varint decoder.
///
/// Offsets are byte positions from the start of the slice handed to the
/// decoder. [`VarintReader`](crate::VarintReader) rebases them onto the
/// start of the whole stream.
///
/// ```text
///   DecodeError
///   ├── TruncatedInput   ← slice ended while the continuation bit was set
///   ├── Overlong         ← 5th byte still has its continuation bit set
///   ├── Overflow         ← 5th byte carries bits above bit 31
///   └── Wire(WireError)  ← from the 64-bit primitive in uv32-wire
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input ended before a terminating byte was found.
    #[error("truncated varint: input ended at offset {offset}")]
    TruncatedInput { offset: usize },

    /// More than 5 bytes would be needed; no `u32` encoding is that long.
    #[error("overlong varint: continuation bit set on 5th byte at offset {offset}")]
    Overlong { offset: usize },

    /// The 5th byte terminates the group but sets bits beyond the 32-bit range.
    #[error("varint overflows u32: byte {byte:#04X} at offset {offset}")]
    Overflow { offset: usize, byte: u8 },

    #[error(transparent)]
    Wire(#[from] WireError),
}

impl DecodeError {
    /// Byte offset the error refers to.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::TruncatedInput { offset }
            | Self::Overlong { offset }
            | Self::Overflow { offset, .. }
            | Self::Wire(WireError::UnexpectedEof { offset }) => Some(*offset),
            Self::Wire(WireError::VarintTooLong) => None,
        }
    }

    /// Shift every offset carried by the error forward by `base` bytes.
    #[must_use]
    pub fn rebase(self, base: usize) -> Self {
        match self {
            Self::TruncatedInput { offset } => Self::TruncatedInput {
                offset: offset + base,
            },
            Self::Overlong { offset } => Self::Overlong {
                offset: offset + base,
            },
            Self::Overflow { offset, byte } => Self::Overflow {
                offset: offset + base,
                byte,
            },
            Self::Wire(WireError::UnexpectedEof { offset }) => {
                Self::Wire(WireError::UnexpectedEof {
                    offset: offset + base,
                })
            }
            other @ Self::Wire(WireError::VarintTooLong) => other,
        }
    }
}

/// A configuration string did not name a known option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`, expected one of: {expected}")]
pub struct ParseConfigError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
