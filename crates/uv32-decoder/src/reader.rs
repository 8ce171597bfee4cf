use std::iter::FusedIterator;

use crate::config::DecoderConfig;
use crate::error::DecodeError;

/// Iterator over a buffer of back-to-back varints.
///
/// Each step decodes one value and feeds the remainder into the next step.
/// Error offsets are rebased onto the start of the buffer the reader was
/// created with. After the first error the iterator is exhausted; the
/// undecoded bytes are still available through
/// [`remaining`](Self::remaining).
///
/// ```text
///   [ 96 01 | 00 | FF FF FF FF 0F ]
///     150     0    4294967295
///     ▲       ▲    ▲
///     0       2    3            ← position() before each step
/// ```
///
/// # Example
///
/// ```
/// use uv32_decoder::VarintReader;
///
/// let values: Result<Vec<u32>, _> = VarintReader::new(&[0x96, 0x01, 0x00]).collect();
/// assert_eq!(values.unwrap(), vec![150, 0]);
/// ```
#[derive(Clone, Debug)]
pub struct VarintReader<'a> {
    buf: &'a [u8],
    position: usize,
    config: DecoderConfig,
    failed: bool,
}

impl<'a> VarintReader<'a> {
    /// Reader using the default (checked) configuration.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_config(buf, DecoderConfig::default())
    }

    #[must_use]
    pub fn with_config(buf: &'a [u8], config: DecoderConfig) -> Self {
        Self {
            buf,
            position: 0,
            config,
            failed: false,
        }
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        self.buf
    }

    /// Offset of the next undecoded byte from the start of the stream.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }
}

impl Iterator for VarintReader<'_> {
    type Item = Result<u32, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.buf.is_empty() {
            return None;
        }

        match self.config.decode(self.buf) {
            Ok((value, rest)) => {
                self.position += self.buf.len() - rest.len();
                self.buf = rest;
                Some(Ok(value))
            }
            Err(e) => {
                self.failed = true;
                let e = e.rebase(self.position);
                tracing::debug!(
                    position = self.position,
                    remaining = self.buf.len(),
                    "varint stream stopped: {e}"
                );
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed || self.buf.is_empty() {
            (0, Some(0))
        } else {
            // 1 to 5 bytes per value.
            (1, Some(self.buf.len()))
        }
    }
}

impl FusedIterator for VarintReader<'_> {}

/// Decode every value in `buf`.
///
/// # Errors
///
/// Returns the first [`DecodeError`], with its offset relative to the
/// start of `buf`.
pub fn decode_all(buf: &[u8], config: &DecoderConfig) -> Result<Vec<u32>, DecodeError> {
    VarintReader::with_config(buf, *config).collect()
}
