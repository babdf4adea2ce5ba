//! The randomizer core: calibration, Von Neumann extraction, typed output.
//!
//! Architecture:
//!
//! ```text
//! VoltageSource → raw_bits (debias) → whiten → typed accessors / fill_bytes
//! ```
//!
//! One instance owns one source and one center-voltage threshold for its
//! whole lifetime. Every generating method takes `&mut self`, so exclusive
//! ownership is the concurrency model: to share an instance across threads,
//! put it behind a `Mutex`.

use std::time::{Duration, Instant};

use log::debug;

use crate::bits::BitSequence;
use crate::error::{Error, Result};
use crate::source::VoltageSource;
use crate::whiten::whiten;

/// Samples averaged by [`Randomizer::calibrate`].
pub const CALIBRATION_SAMPLES: usize = 64;

/// Bytes generated per chunk by [`Randomizer::fill_bytes`]. Bounds peak
/// transient memory for large requests.
pub const FILL_CHUNK_SIZE: usize = 1024;

/// Tuning for a [`Randomizer`].
///
/// Defaults: threshold at 0 V until calibrated, no retry ceiling, no read
/// deadline.
#[derive(Debug, Clone, Default)]
pub struct RandomizerConfig {
    /// Initial center voltage, in volts. Usually overwritten by
    /// [`Randomizer::calibrate`] at startup.
    pub center_voltage: f64,
    /// Ceiling on discarded sample pairs per emitted bit. `None` retries
    /// forever, which stalls indefinitely on a zero-variance source.
    pub max_retries_per_bit: Option<u32>,
    /// Cooperative deadline per sample read. Checked when the blocking read
    /// returns; a hung source still hangs, a slow one fails the call.
    pub read_timeout: Option<Duration>,
}

/// Extracts unbiased, whitened random values from a noisy voltage source.
///
/// # Example
///
/// ```
/// use adcrng_core::{Randomizer, sources::SimulatedNoiseSource};
///
/// let source = SimulatedNoiseSource::new(1.65, 0.4, 42);
/// let mut rng = Randomizer::new(source);
/// rng.calibrate().unwrap();
///
/// let roll = rng.random_int(1, 6).unwrap();
/// assert!((1..=6).contains(&roll));
/// ```
pub struct Randomizer<S: VoltageSource> {
    source: S,
    center_voltage: f64,
    max_retries_per_bit: Option<u32>,
    read_timeout: Option<Duration>,
}

impl<S: VoltageSource> Randomizer<S> {
    /// Bind to `source` with default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, RandomizerConfig::default())
    }

    /// Bind to `source` with explicit tuning.
    pub fn with_config(source: S, config: RandomizerConfig) -> Self {
        Self {
            source,
            center_voltage: config.center_voltage,
            max_retries_per_bit: config.max_retries_per_bit,
            read_timeout: config.read_timeout,
        }
    }

    /// Release the bound source.
    pub fn into_source(self) -> S {
        self.source
    }

    // -----------------------------------------------------------------------
    // Threshold
    // -----------------------------------------------------------------------

    /// Current classification threshold, in volts.
    pub fn center_voltage(&self) -> f64 {
        self.center_voltage
    }

    /// Set the classification threshold directly. Nothing else ever changes
    /// it besides [`calibrate`](Self::calibrate).
    pub fn set_center_voltage(&mut self, volts: f64) {
        self.center_voltage = volts;
    }

    /// Read [`CALIBRATION_SAMPLES`] samples and set the threshold to their
    /// arithmetic mean. Returns the new threshold.
    ///
    /// If the source fails mid-calibration the threshold is left unchanged —
    /// all samples are collected before anything is written.
    pub fn calibrate(&mut self) -> Result<f64> {
        let mut sum = 0.0;
        for _ in 0..CALIBRATION_SAMPLES {
            sum += self.sample_volts()?;
        }
        self.center_voltage = sum / CALIBRATION_SAMPLES as f64;
        Ok(self.center_voltage)
    }

    // -----------------------------------------------------------------------
    // Sampling and extraction
    // -----------------------------------------------------------------------

    /// Read one voltage sample, enforcing the configured read deadline.
    pub fn sample_volts(&mut self) -> Result<f64> {
        match self.read_timeout {
            None => self.source.read_volts(),
            Some(limit) => {
                let t0 = Instant::now();
                let v = self.source.read_volts()?;
                if t0.elapsed() > limit {
                    return Err(Error::ReadTimeout { limit });
                }
                Ok(v)
            }
        }
    }

    /// Produce exactly `n` Von Neumann debiased bits, without whitening.
    ///
    /// Per bit: draw a sample pair (s1, s2). A pair straddling the threshold
    /// emits a bit — high/low is 1, low/high is 0. A same-side pair is
    /// discarded and the position retried, which is what removes stationary
    /// bias. Samples consumed per bit are therefore variable, amortized ≥ 2.
    pub fn raw_bits(&mut self, n: usize) -> Result<BitSequence> {
        let mut bits = BitSequence::with_capacity(n);
        for index in 0..n {
            let mut retries: u32 = 0;
            loop {
                let threshold = self.center_voltage;
                let s1 = self.sample_volts()?;
                let s2 = self.sample_volts()?;

                if s1 > threshold && s2 <= threshold {
                    bits.push(true);
                    break;
                }
                if s1 <= threshold && s2 > threshold {
                    bits.push(false);
                    break;
                }

                retries += 1;
                if let Some(cap) = self.max_retries_per_bit {
                    if retries >= cap {
                        return Err(Error::RetriesExhausted {
                            bit_index: index,
                            retries,
                        });
                    }
                }
            }
        }
        Ok(bits)
    }

    /// Produce exactly `n` debiased, whitened bits. The primitive under
    /// every typed accessor.
    pub fn random_bits(&mut self, n: usize) -> Result<BitSequence> {
        Ok(whiten(&self.raw_bits(n)?))
    }

    // -----------------------------------------------------------------------
    // Typed accessors
    // -----------------------------------------------------------------------

    /// One random byte.
    pub fn random_byte(&mut self) -> Result<u8> {
        Ok(self.random_bits(8)?.to_bytes()[0])
    }

    /// One random `u16`, least-significant byte first.
    pub fn random_u16(&mut self) -> Result<u16> {
        let bytes = self.random_bits(16)?.to_bytes();
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// One random `u32`, least-significant byte first.
    pub fn random_u32(&mut self) -> Result<u32> {
        let bytes = self.random_bits(32)?.to_bytes();
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// One random `u64`, least-significant byte first.
    pub fn random_u64(&mut self) -> Result<u64> {
        let bytes = self.random_bits(64)?.to_bytes();
        let mut word = [0u8; 8];
        word.copy_from_slice(&bytes[..8]);
        Ok(u64::from_le_bytes(word))
    }

    /// A random integer in `[min, max]`, both ends inclusive.
    ///
    /// Fails with [`Error::InvalidRange`] before touching the source when
    /// `min >= max`. The draw is reduced by modulo, so ranges that do not
    /// evenly divide 2^32 carry a small bias toward the low end; callers
    /// needing exact uniformity should draw bits and reject out-of-range
    /// values themselves.
    pub fn random_int(&mut self, min: i32, max: i32) -> Result<i32> {
        if min >= max {
            return Err(Error::InvalidRange { min, max });
        }
        // 64-bit so the full i32 span does not wrap the modulus to zero.
        let range = (max as i64 - min as i64 + 1) as u64;
        let draw = self.random_u32()? as u64;
        Ok((min as i64 + (draw % range) as i64) as i32)
    }

    /// A random `f64` in `[0, 1)`: a `u32` draw divided by 2^32.
    pub fn random_double(&mut self) -> Result<f64> {
        Ok(self.random_u32()? as f64 / (u32::MAX as f64 + 1.0))
    }

    // -----------------------------------------------------------------------
    // Buffer filling
    // -----------------------------------------------------------------------

    /// Fill `buffer` completely with random bytes.
    ///
    /// Works in independent [`FILL_CHUNK_SIZE`] pieces — each chunk is its
    /// own extraction-and-whitening pass, so peak memory is bounded by the
    /// chunk size regardless of `buffer.len()`. On a source failure the
    /// buffer is left partially written with no marker of how far the fill
    /// progressed.
    pub fn fill_bytes(&mut self, buffer: &mut [u8]) -> Result<()> {
        let total = buffer.len();
        for (i, chunk) in buffer.chunks_mut(FILL_CHUNK_SIZE).enumerate() {
            let bits = self.random_bits(chunk.len() * 8)?;
            chunk.copy_from_slice(&bits.to_bytes());
            debug!("fill_bytes: {} of {total} bytes done", i * FILL_CHUNK_SIZE + chunk.len());
        }
        Ok(())
    }
}
