use std::fmt;
use std::str::FromStr;

use crate::error::{DecodeError, ParseConfigError};
use crate::trusted;

/// Which trusted formulation to run.
///
/// All strategies return identical results on well-formed input; the
/// choice only affects speed. Dispatch is a plain `match`, so a strategy
/// known at compile time inlines to a direct call.
///
/// ```text
/// ┌──────────┬──────────────────────────┐
/// │ Name     │ Function                 │
/// ├──────────┼──────────────────────────┤
/// │ iter     │ trusted::decode_iter     │
/// │ loop     │ trusted::decode_loop     │
/// │ unroll   │ trusted::decode_unroll   │
/// │ lib      │ trusted::decode_lib      │
/// └──────────┴──────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    Iter,
    Loop,
    #[default]
    Unroll,
    Lib,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 4] = [Self::Iter, Self::Loop, Self::Unroll, Self::Lib];

    /// Short lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Iter => "iter",
            Self::Loop => "loop",
            Self::Unroll => "unroll",
            Self::Lib => "lib",
        }
    }

    /// Decode one value with this strategy's trusted formulation.
    ///
    /// # Panics
    ///
    /// Panics if `buf` does not start with a complete varint group. See
    /// [`trusted`] for the exact preconditions.
    #[must_use]
    pub fn decode_trusted(self, buf: &[u8]) -> (u32, &[u8]) {
        match self {
            Self::Iter => trusted::decode_iter(buf),
            Self::Loop => trusted::decode_loop(buf),
            Self::Unroll => trusted::decode_unroll(buf),
            Self::Lib => trusted::decode_lib(buf),
        }
    }

    /// Like [`decode_trusted`](Self::decode_trusted), but never panics.
    ///
    /// `loop` and `unroll` read at most 5 bytes, which the caller guarantees.
    /// `iter` and `lib` can run past that, so they report truncation instead.
    pub(crate) fn decode_fast(self, buf: &[u8]) -> Result<(u32, &[u8]), DecodeError> {
        match self {
            Self::Iter => trusted::try_decode_iter(buf),
            Self::Lib => trusted::try_decode_lib(buf),
            other => Ok(other.decode_trusted(buf)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseConfigError {
                kind: "strategy",
                value: s.to_string(),
                expected: "iter, loop, unroll, lib",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn from_str_ignores_case() {
        assert_eq!("UNROLL".parse::<Strategy>(), Ok(Strategy::Unroll));
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "simd".parse::<Strategy>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown strategy `simd`, expected one of: iter, loop, unroll, lib"
        );
    }

    #[test]
    fn every_strategy_decodes_the_same_stream() {
        let stream = [0x96, 0x01, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x0F];
        for strategy in Strategy::ALL {
            let (a, rest) = strategy.decode_trusted(&stream);
            let (b, rest) = strategy.decode_trusted(rest);
            let (c, rest) = strategy.decode_trusted(rest);
            assert_eq!((a, b, c), (150, 0, u32::MAX), "{strategy}");
            assert!(rest.is_empty(), "{strategy}");
        }
    }
}
