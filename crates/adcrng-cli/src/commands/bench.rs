use adcrng_core::Profiler;

use super::CommandResult;

pub fn run(seed: u64, bias: f64, iterations: usize, json: bool) -> CommandResult {
    let mut rng = super::make_randomizer(seed, bias)?;

    let report = Profiler::with_iterations(&mut rng, iterations).profile()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Pipeline timings over {} iterations:\n", report.iterations);
    println!("{:<22} {:>12}", "Operation", "Mean");
    println!("{}", "-".repeat(36));
    println!("{:<22} {:>9.3} ms", "sample read", report.sample_read_ms);
    println!("{:<22} {:>9.3} ms", "1 byte", report.byte_ms);
    println!("{:<22} {:>9.3} ms", "1 u32", report.u32_ms);
    println!("{:<22} {:>9.3} ms", "1024-byte fill", report.kilobyte_fill_ms);
    println!("\nDebiasing discards same-side sample pairs, so per-byte cost");
    println!("varies with how well the threshold splits the noise.");

    Ok(())
}
