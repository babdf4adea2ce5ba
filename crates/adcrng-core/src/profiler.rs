//! Timing harness for the generation pipeline.
//!
//! ADC conversions are slow relative to everything else in the pipeline, and
//! debiasing discards a variable share of them. The profiler answers the
//! practical question: how long does one byte, one word, or one kilobyte
//! actually take on this source?

use std::time::{Duration, Instant};

use log::info;
use serde::Serialize;

use crate::error::Result;
use crate::randomizer::Randomizer;
use crate::source::VoltageSource;

/// Default number of timed iterations per operation.
pub const DEFAULT_ITERATIONS: usize = 100;

/// Mean wall-clock cost of each pipeline operation.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    /// Iterations averaged over (the 1 KiB fill runs once).
    pub iterations: usize,
    /// Mean time for one raw sample read, in milliseconds.
    pub sample_read_ms: f64,
    /// Mean time to generate one byte, in milliseconds.
    pub byte_ms: f64,
    /// Mean time to generate one u32, in milliseconds.
    pub u32_ms: f64,
    /// Time for a single 1024-byte fill, in milliseconds.
    pub kilobyte_fill_ms: f64,
}

/// Profiles a [`Randomizer`] by timing its typical operations.
pub struct Profiler<'a, S: VoltageSource> {
    randomizer: &'a mut Randomizer<S>,
    iterations: usize,
}

impl<'a, S: VoltageSource> Profiler<'a, S> {
    /// Profile with [`DEFAULT_ITERATIONS`] per operation.
    pub fn new(randomizer: &'a mut Randomizer<S>) -> Self {
        Self::with_iterations(randomizer, DEFAULT_ITERATIONS)
    }

    /// Profile with an explicit iteration count.
    ///
    /// # Panics
    /// Panics when `iterations` is zero.
    pub fn with_iterations(randomizer: &'a mut Randomizer<S>, iterations: usize) -> Self {
        assert!(iterations > 0, "profiler needs at least one iteration");
        Self {
            randomizer,
            iterations,
        }
    }

    /// Run every timing and log a summary line per operation.
    pub fn profile(&mut self) -> Result<ProfileReport> {
        info!("profiling over {} iterations...", self.iterations);

        let sample_read = self.time_sample_reads()?;
        info!("sample read:  {:.3} ms", as_ms(sample_read));

        let byte = self.time_bytes()?;
        info!("1 byte gen:   {:.3} ms", as_ms(byte));

        let word = self.time_u32s()?;
        info!("1 u32 gen:    {:.3} ms", as_ms(word));

        let kilobyte = self.time_kilobyte_fill()?;
        info!("1024B fill:   {:.3} ms", as_ms(kilobyte));

        Ok(ProfileReport {
            iterations: self.iterations,
            sample_read_ms: as_ms(sample_read),
            byte_ms: as_ms(byte),
            u32_ms: as_ms(word),
            kilobyte_fill_ms: as_ms(kilobyte),
        })
    }

    fn time_sample_reads(&mut self) -> Result<Duration> {
        let t0 = Instant::now();
        for _ in 0..self.iterations {
            self.randomizer.sample_volts()?;
        }
        Ok(t0.elapsed() / self.iterations as u32)
    }

    fn time_bytes(&mut self) -> Result<Duration> {
        let t0 = Instant::now();
        for _ in 0..self.iterations {
            self.randomizer.random_byte()?;
        }
        Ok(t0.elapsed() / self.iterations as u32)
    }

    fn time_u32s(&mut self) -> Result<Duration> {
        let t0 = Instant::now();
        for _ in 0..self.iterations {
            self.randomizer.random_u32()?;
        }
        Ok(t0.elapsed() / self.iterations as u32)
    }

    fn time_kilobyte_fill(&mut self) -> Result<Duration> {
        let mut buffer = [0u8; 1024];
        let t0 = Instant::now();
        self.randomizer.fill_bytes(&mut buffer)?;
        Ok(t0.elapsed())
    }
}

fn as_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1e3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::SequenceSource;

    #[test]
    fn profile_produces_complete_report() {
        let mut rng = Randomizer::new(SequenceSource::new(vec![0.1, 0.9]));
        rng.set_center_voltage(0.5);

        let report = Profiler::with_iterations(&mut rng, 5).profile().unwrap();
        assert_eq!(report.iterations, 5);
        assert!(report.sample_read_ms >= 0.0);
        assert!(report.byte_ms >= 0.0);
        assert!(report.u32_ms >= 0.0);
        assert!(report.kilobyte_fill_ms >= 0.0);
    }

    #[test]
    fn profile_propagates_source_failure() {
        use crate::sources::{ConstantSource, FailingSource};
        let mut rng = Randomizer::new(FailingSource::after(ConstantSource::new(1.0), 0));
        assert!(Profiler::with_iterations(&mut rng, 3).profile().is_err());
    }
}
