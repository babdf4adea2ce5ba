//! Deterministic sources for exercising the pipeline.

use crate::error::{Error, Result};
use crate::source::VoltageSource;

/// Cycles through a fixed list of voltages forever.
///
/// An alternating low/high list around the threshold makes every debiased
/// bit precomputable, which is how the classification logic is pinned in
/// tests.
pub struct SequenceSource {
    readings: Vec<f64>,
    next: usize,
}

impl SequenceSource {
    /// # Panics
    /// Panics when `readings` is empty.
    pub fn new(readings: Vec<f64>) -> Self {
        assert!(!readings.is_empty(), "SequenceSource needs at least one reading");
        Self { readings, next: 0 }
    }

    /// Total reads served so far.
    pub fn reads(&self) -> usize {
        self.next
    }
}

impl VoltageSource for SequenceSource {
    fn read_volts(&mut self) -> Result<f64> {
        let v = self.readings[self.next % self.readings.len()];
        self.next += 1;
        Ok(v)
    }
}

/// Always returns the same voltage.
///
/// A zero-variance source: every sample pair lands on the same side of any
/// threshold, so debiasing discards forever. Used to exercise the retry
/// ceiling.
pub struct ConstantSource {
    volts: f64,
}

impl ConstantSource {
    pub fn new(volts: f64) -> Self {
        Self { volts }
    }
}

impl VoltageSource for ConstantSource {
    fn read_volts(&mut self) -> Result<f64> {
        Ok(self.volts)
    }
}

/// Delegates to an inner source, then fails permanently after `n` reads.
pub struct FailingSource<S: VoltageSource> {
    inner: S,
    remaining: usize,
}

impl<S: VoltageSource> FailingSource<S> {
    /// Serve `n` reads from `inner`, then error on every read after.
    pub fn after(inner: S, n: usize) -> Self {
        Self { inner, remaining: n }
    }
}

impl<S: VoltageSource> VoltageSource for FailingSource<S> {
    fn read_volts(&mut self) -> Result<f64> {
        if self.remaining == 0 {
            return Err(Error::Hardware("adc read failed".into()));
        }
        self.remaining -= 1;
        self.inner.read_volts()
    }
}
