//! # adcrng-core
//!
//! **True random numbers from the noise floor of an ADC.**
//!
//! `adcrng-core` turns noisy analog voltage samples into unbiased, whitened
//! random bits and exposes typed random-value accessors on top. It was built
//! to seed a noise-pattern display on a small embedded board, but the
//! pipeline is hardware-agnostic: anything that can produce a voltage
//! reading can drive it.
//!
//! ## Quick Start
//!
//! ```
//! use adcrng_core::{Randomizer, sources::SimulatedNoiseSource};
//!
//! // A simulated noise source stands in for real ADC hardware.
//! let source = SimulatedNoiseSource::new(1.65, 0.4, 42);
//! let mut rng = Randomizer::new(source);
//!
//! // Find the threshold that splits samples into highs and lows.
//! let center = rng.calibrate().unwrap();
//! assert!((center - 1.65).abs() < 0.1);
//!
//! // Typed accessors.
//! let _byte = rng.random_byte().unwrap();
//! let _roll = rng.random_int(1, 6).unwrap();
//!
//! // Arbitrary-length buffers, filled in bounded chunks.
//! let mut noise = vec![0u8; 4096];
//! rng.fill_bytes(&mut noise).unwrap();
//! ```
//!
//! ## Architecture
//!
//! ```text
//! VoltageSource → Von Neumann debias → avalanche whiten → typed accessors
//!                                                        → chunked fill
//! ```
//!
//! - **Debiasing** compares sample pairs against a calibrated center
//!   voltage and keeps only disagreeing pairs, removing stationary bias.
//! - **Whitening** runs the packed bits through a 32-bit xorshift avalanche
//!   to flatten residual structure. Deterministic and length-preserving.
//! - **Accessors** reinterpret whitened bits little-endian as u8 through
//!   u64, bounded integers, and unit-interval doubles.
//!
//! Hardware fronts are normalized behind the [`VoltageSource`] trait; both
//! single-channel ports and refresh-then-read multi-channel arrays adapt to
//! it. One `Randomizer` owns one source and all of its mutable state, so
//! exclusive access is enforced by the borrow checker rather than a lock.
//!
//! Randomness quality here is statistical, not certified. Do not use this
//! for key material.

pub mod bits;
pub mod error;
pub mod profiler;
pub mod quality;
pub mod randomizer;
pub mod source;
pub mod sources;
pub mod whiten;

pub use bits::BitSequence;
pub use error::{Error, Result};
pub use profiler::{DEFAULT_ITERATIONS, ProfileReport, Profiler};
pub use quality::{QualityReport, ones_fraction, quick_quality, quick_shannon};
pub use randomizer::{CALIBRATION_SAMPLES, FILL_CHUNK_SIZE, Randomizer, RandomizerConfig};
pub use source::{AnalogArray, AnalogPort, ArraySource, PortSource, VoltageSource};
pub use whiten::whiten;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
