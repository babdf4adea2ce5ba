use adcrng_core::quick_quality;

use super::CommandResult;

pub fn run(seed: u64, bias: f64, bytes: usize, json: bool) -> CommandResult {
    let mut rng = super::make_randomizer(seed, bias)?;
    let center = rng.center_voltage();

    let mut buffer = vec![0u8; bytes];
    rng.fill_bytes(&mut buffer)?;

    let report = quick_quality(&buffer);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Probed {bytes} bytes (center {center:.3} V):\n");
    println!("  shannon entropy    {:.3} / 8.0 bits/byte", report.shannon_entropy);
    println!("  ones fraction      {:.4}", report.ones_fraction);
    println!("  compression ratio  {:.3}", report.compression_ratio);
    println!("  unique byte values {} / 256", report.unique_values);
    println!("  score              {:.1} / 100  (grade {})", report.quality_score, report.grade);

    Ok(())
}
