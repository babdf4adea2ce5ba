//! Quick statistical checks on generated output.
//!
//! Sanity checks, not proofs: a pass here says the pipeline is not obviously
//! broken, nothing more. Certification-grade test batteries are out of scope.

use serde::Serialize;

/// Fraction of 1-bits across a byte slice. A healthy debiased stream sits
/// near 0.5.
pub fn ones_fraction(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let ones: u64 = data.iter().map(|b| b.count_ones() as u64).sum();
    ones as f64 / (data.len() as f64 * 8.0)
}

/// Shannon entropy in bits/byte.
pub fn quick_shannon(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut counts = [0u64; 256];
    for &b in data {
        counts[b as usize] += 1;
    }
    let n = data.len() as f64;
    let mut h = 0.0;
    for &c in &counts {
        if c > 0 {
            let p = c as f64 / n;
            h -= p * p.log2();
        }
    }
    h
}

/// Composite quality assessment of a generated byte stream.
#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    pub samples: usize,
    pub unique_values: usize,
    pub shannon_entropy: f64,
    pub ones_fraction: f64,
    pub compression_ratio: f64,
    pub quality_score: f64,
    pub grade: char,
}

/// Score a byte stream: Shannon entropy, zlib compressibility, byte-value
/// coverage, and bit balance, combined into a 0–100 score and letter grade.
///
/// Streams shorter than 16 bytes grade 'F' outright — too little data to say
/// anything.
pub fn quick_quality(data: &[u8]) -> QualityReport {
    if data.len() < 16 {
        return QualityReport {
            samples: data.len(),
            unique_values: 0,
            shannon_entropy: 0.0,
            ones_fraction: 0.0,
            compression_ratio: 0.0,
            quality_score: 0.0,
            grade: 'F',
        };
    }

    let shannon = quick_shannon(data);
    let ones = ones_fraction(data);

    use flate2::Compression;
    use flate2::write::ZlibEncoder;
    use std::io::Write;
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data).unwrap_or_default();
    let compressed = encoder.finish().unwrap_or_default();
    let comp_ratio = compressed.len() as f64 / data.len() as f64;

    let mut seen = [false; 256];
    for &b in data {
        seen[b as usize] = true;
    }
    let unique = seen.iter().filter(|&&s| s).count();

    let eff = shannon / 8.0;
    let balance = 1.0 - (ones - 0.5).abs() * 2.0;
    let score = eff * 50.0
        + comp_ratio.min(1.0) * 20.0
        + (unique as f64 / 256.0).min(1.0) * 15.0
        + balance.max(0.0) * 15.0;
    let grade = if score >= 80.0 {
        'A'
    } else if score >= 60.0 {
        'B'
    } else if score >= 40.0 {
        'C'
    } else if score >= 20.0 {
        'D'
    } else {
        'F'
    };

    QualityReport {
        samples: data.len(),
        unique_values: unique,
        shannon_entropy: shannon,
        ones_fraction: ones,
        compression_ratio: comp_ratio,
        quality_score: score,
        grade,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ones_fraction_extremes() {
        assert_eq!(ones_fraction(&[0x00; 32]), 0.0);
        assert_eq!(ones_fraction(&[0xFF; 32]), 1.0);
        assert_eq!(ones_fraction(&[0x0F; 32]), 0.5);
        assert_eq!(ones_fraction(&[]), 0.0);
    }

    #[test]
    fn shannon_of_constant_stream_is_zero() {
        assert_eq!(quick_shannon(&[0x42; 128]), 0.0);
    }

    #[test]
    fn shannon_of_full_byte_coverage_is_eight() {
        let data: Vec<u8> = (0..=255).collect();
        assert!((quick_shannon(&data) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn constant_stream_grades_poorly() {
        let report = quick_quality(&[0x42; 1024]);
        assert!(report.quality_score < 40.0, "score: {}", report.quality_score);
    }

    #[test]
    fn short_stream_is_an_f() {
        assert_eq!(quick_quality(&[1, 2, 3]).grade, 'F');
    }
}
