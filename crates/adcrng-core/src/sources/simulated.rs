//! Simulated thermal noise for off-device runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::source::VoltageSource;

/// PRNG-driven stand-in for an ADC sampling amplified thermal noise.
///
/// Emits `center + bias + noise`, where the noise term is an Irwin–Hall sum
/// of four uniforms scaled to `amplitude` volts peak. The result is roughly
/// bell-shaped around `center + bias`, which is what a real noise amplifier
/// feeding an ADC looks like. A nonzero `bias` produces the stationary
/// skewed source the debiasing stage exists to handle.
///
/// Not a randomness source itself — it exists so the extraction and
/// whitening pipeline can be exercised and benchmarked without hardware.
pub struct SimulatedNoiseSource {
    center: f64,
    amplitude: f64,
    bias: f64,
    rng: StdRng,
}

impl SimulatedNoiseSource {
    /// Noise around `center` volts with the given peak `amplitude`.
    /// Deterministic for a given `seed`.
    pub fn new(center: f64, amplitude: f64, seed: u64) -> Self {
        Self {
            center,
            amplitude,
            bias: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Shift the noise distribution by `bias` volts without moving `center`.
    pub fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    /// The nominal center voltage the noise straddles (excluding bias).
    pub fn center(&self) -> f64 {
        self.center
    }
}

impl VoltageSource for SimulatedNoiseSource {
    fn read_volts(&mut self) -> Result<f64> {
        let sum: f64 = (0..4).map(|_| self.rng.random::<f64>()).sum();
        // Irwin-Hall n=4: mean 2, range [0, 4]. Scale to [-amplitude, +amplitude].
        let noise = (sum - 2.0) / 2.0 * self.amplitude;
        Ok(self.center + self.bias + noise)
    }
}
