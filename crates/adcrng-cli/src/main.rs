//! CLI for adcrng — run the ADC-noise randomizer pipeline off-device.
//!
//! Real deployments feed the randomizer from an analog port; here a
//! simulated thermal-noise source stands in so the pipeline can be
//! exercised, benchmarked, and graded on any machine.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "adcrng")]
#[command(about = "adcrng — random bytes from ADC noise, simulated on the host")]
#[command(version = adcrng_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Seed for the simulated noise source (default: derived from the clock)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Stationary bias of the simulated source in volts, for watching the
    /// debiaser work against a skewed input
    #[arg(long, global = true, default_value_t = 0.0)]
    bias: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random bytes: hex to stdout, or raw to a file
    Gen {
        /// Number of bytes to generate
        #[arg(long, default_value_t = 32)]
        bytes: usize,

        /// Write raw bytes to this file instead of hex to stdout
        #[arg(long)]
        out: Option<std::path::PathBuf>,
    },

    /// Benchmark the pipeline: sample read, byte, u32, and 1 KiB fill timings
    Bench {
        /// Timed iterations per operation
        #[arg(long, default_value_t = adcrng_core::DEFAULT_ITERATIONS)]
        iterations: usize,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Calibrate, generate, and grade output quality
    Probe {
        /// Number of bytes to grade
        #[arg(long, default_value_t = 4096)]
        bytes: usize,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .subsec_nanos() as u64
    });

    let result = match cli.command {
        Commands::Gen { bytes, out } => {
            commands::generate::run(seed, cli.bias, bytes, out.as_deref())
        }
        Commands::Bench { iterations, json } => commands::bench::run(seed, cli.bias, iterations, json),
        Commands::Probe { bytes, json } => commands::probe::run(seed, cli.bias, bytes, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
