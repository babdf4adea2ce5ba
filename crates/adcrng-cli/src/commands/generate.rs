use std::io::Write;
use std::path::Path;

use super::CommandResult;

pub fn run(seed: u64, bias: f64, bytes: usize, out: Option<&Path>) -> CommandResult {
    let mut rng = super::make_randomizer(seed, bias)?;

    let mut buffer = vec![0u8; bytes];
    rng.fill_bytes(&mut buffer)?;

    match out {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            file.write_all(&buffer)?;
            println!("wrote {bytes} bytes to {}", path.display());
        }
        None => {
            for line in buffer.chunks(32) {
                for b in line {
                    print!("{b:02x}");
                }
                println!();
            }
        }
    }

    Ok(())
}
