pub mod bench;
pub mod generate;
pub mod probe;

use adcrng_core::sources::SimulatedNoiseSource;
use adcrng_core::Randomizer;
use log::info;

/// Nominal center and amplitude of the simulated front end, volts.
/// 1.65 V is the midpoint of a 3.3 V rail, where a real noise amplifier
/// would be biased.
const SIM_CENTER: f64 = 1.65;
const SIM_AMPLITUDE: f64 = 0.4;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Build a calibrated randomizer over the simulated noise source.
pub fn make_randomizer(seed: u64, bias: f64) -> Result<Randomizer<SimulatedNoiseSource>, adcrng_core::Error> {
    let source = SimulatedNoiseSource::new(SIM_CENTER, SIM_AMPLITUDE, seed).with_bias(bias);
    let mut rng = Randomizer::new(source);
    let center = rng.calibrate()?;
    info!("calibrated center voltage: {center:.3} V");
    Ok(rng)
}
