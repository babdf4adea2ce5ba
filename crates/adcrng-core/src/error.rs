//! Crate error type.
//!
//! Every failure is fatal to the in-flight call. Nothing is retried
//! automatically above the single debiasing retry in
//! [`Randomizer::raw_bits`](crate::Randomizer::raw_bits).

use std::time::Duration;

/// Errors produced by the randomizer pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// `random_int` called with `min >= max`. Reported before any sampling
    /// occurs; the source is never touched.
    InvalidRange {
        min: i32,
        max: i32,
    },
    /// The sample source failed a read. Any buffer being filled is left in
    /// an unspecified partial state.
    Hardware(String),
    /// A single blocking read exceeded the configured deadline. The check is
    /// cooperative: it fires when the read returns, not while it hangs.
    ReadTimeout {
        limit: Duration,
    },
    /// The debiasing retry ceiling was exceeded while producing one bit.
    /// Only raised when [`RandomizerConfig::max_retries_per_bit`] is set;
    /// a zero-variance source would otherwise loop forever.
    ///
    /// [`RandomizerConfig::max_retries_per_bit`]: crate::RandomizerConfig::max_retries_per_bit
    RetriesExhausted {
        bit_index: usize,
        retries: u32,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(f, "invalid range: min ({min}) must be less than max ({max})")
            }
            Self::Hardware(msg) => write!(f, "hardware read failed: {msg}"),
            Self::ReadTimeout { limit } => {
                write!(f, "sample read exceeded timeout of {limit:?}")
            }
            Self::RetriesExhausted { bit_index, retries } => {
                write!(
                    f,
                    "debias retry ceiling ({retries}) exhausted at bit {bit_index}; \
                     source looks degenerate"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, Error>;
