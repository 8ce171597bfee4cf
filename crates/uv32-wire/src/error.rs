/// Errors raised by the general-purpose LEB128 primitive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// Varint encoding exceeded 10 bytes without terminating.
    #[error("varint too long: exceeded 10-byte limit")]
    VarintTooLong,

    /// Input ended before a terminating byte was found.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },
}
