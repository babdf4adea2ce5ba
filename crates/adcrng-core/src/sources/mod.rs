//! Concrete voltage sources for hosts without an ADC attached.
//!
//! Hardware integrations implement [`AnalogPort`](crate::source::AnalogPort)
//! or [`AnalogArray`](crate::source::AnalogArray) in their own crates; what
//! lives here are the synthetic and simulated sources used by tests, the CLI,
//! and anyone benchmarking the pipeline off-device.

mod simulated;
mod synthetic;

pub use simulated::SimulatedNoiseSource;
pub use synthetic::{ConstantSource, FailingSource, SequenceSource};
