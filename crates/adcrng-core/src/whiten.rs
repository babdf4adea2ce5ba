//! Avalanche whitening.
//!
//! **ALL** post-processing of debiased bits lives here — the extractor emits
//! raw Von Neumann bits, and this module is the single gateway for the
//! mixing applied on top. Keeping it in one place keeps the transform
//! auditable and bit-exact across releases.
//!
//! The scheme is asymmetric on purpose: complete 4-byte groups go through a
//! 32-bit xorshift avalanche, while any 1–3 trailing bytes are mixed
//! individually with a weaker single-byte formula. Extra bits introduced by
//! byte alignment are truncated away afterwards. Compatible consumers depend
//! on this exact behavior; do not "fix" the tail path.

use crate::bits::BitSequence;

// ---------------------------------------------------------------------------
// Mixing primitives
// ---------------------------------------------------------------------------

/// 32-bit avalanche step. Plain logical shifts: bits pushed past the word
/// boundary are lost, not rotated back in.
#[inline]
fn mix_word(mut v: u32) -> u32 {
    v ^= v << 13;
    v ^= v >> 17;
    v ^= v << 5;
    v
}

/// Single-byte mixing for the trailing bytes of a group-misaligned input.
/// Weaker than [`mix_word`]; each bit reaches at most three others.
#[inline]
fn mix_tail_byte(b: u8) -> u8 {
    b ^ (b << 4) ^ (b >> 3)
}

// ---------------------------------------------------------------------------
// Whitening gateway
// ---------------------------------------------------------------------------

/// Whiten a bit sequence, returning a sequence of exactly the same length.
///
/// Pure: identical input bits always yield identical output bits. The input
/// is packed into bytes, complete 4-byte groups are mixed as little-endian
/// `u32` words, trailing bytes are mixed individually, and the result is
/// truncated back to the input bit length.
pub fn whiten(input: &BitSequence) -> BitSequence {
    let mut bytes = input.to_bytes();

    let groups = bytes.len() / 4;
    for g in 0..groups {
        let i = g * 4;
        let word = u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);
        bytes[i..i + 4].copy_from_slice(&mix_word(word).to_le_bytes());
    }

    for b in &mut bytes[groups * 4..] {
        *b = mix_tail_byte(*b);
    }

    BitSequence::from_bytes(&bytes, input.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whiten_bytes(bytes: &[u8]) -> Vec<u8> {
        whiten(&BitSequence::from_bytes(bytes, bytes.len() * 8)).to_bytes()
    }

    #[test]
    fn golden_single_word() {
        // 0x01000000 LE: <<13 overflows to zero, >>17 lands on bit 7,
        // <<5 spreads it. Pinned so the transform can never drift.
        assert_eq!(whiten_bytes(&[0x00, 0x00, 0x00, 0x01]), vec![0x80, 0x10, 0x00, 0x21]);
    }

    #[test]
    fn golden_all_ones_word() {
        assert_eq!(mix_word(0xFFFF_FFFF), 0x0003_E01F);
        assert_eq!(whiten_bytes(&[0xFF; 4]), vec![0x1F, 0xE0, 0x03, 0x00]);
    }

    #[test]
    fn golden_tail_bytes() {
        assert_eq!(mix_tail_byte(0xFF), 0x10);
        assert_eq!(mix_tail_byte(0x01), 0x11);
        assert_eq!(mix_tail_byte(0xAB), 0x0E);
    }

    #[test]
    fn zero_input_stays_zero() {
        // Both formulas map 0 to 0; whitening adds no entropy of its own.
        assert_eq!(whiten_bytes(&[0x00; 7]), vec![0x00; 7]);
    }

    #[test]
    fn tail_uses_byte_formula_not_word_formula() {
        // 5 bytes: one full word plus one tail byte.
        let out = whiten_bytes(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(out[..4], [0x1F, 0xE0, 0x03, 0x00]);
        assert_eq!(out[4], 0x10);
    }

    #[test]
    fn short_input_is_all_tail() {
        // 3 bytes: no complete word, every byte takes the tail path.
        assert_eq!(whiten_bytes(&[0xFF, 0x01, 0xAB]), vec![0x10, 0x11, 0x0E]);
    }

    #[test]
    fn length_preserved_for_odd_bit_counts() {
        for nbits in [0usize, 1, 5, 8, 9, 31, 32, 33, 63, 64, 65, 1000] {
            let input = BitSequence::from_bytes(&vec![0x5Au8; nbits.div_ceil(8)], nbits);
            let out = whiten(&input);
            assert_eq!(out.len(), nbits, "length changed for {nbits} bits");
        }
    }

    #[test]
    fn deterministic() {
        let input = BitSequence::from_bytes(&[0xDE, 0xAD, 0xBE, 0xEF, 0x42], 37);
        assert_eq!(whiten(&input), whiten(&input));
    }

    #[test]
    fn truncation_drops_alignment_bits() {
        // 4 one-bits pack into byte 0x0F; mix_tail_byte(0x0F) = 0xFE, and
        // only the low 4 bits survive truncation.
        let mut input = BitSequence::with_capacity(4);
        for _ in 0..4 {
            input.push(true);
        }
        let out = whiten(&input);
        assert_eq!(out.len(), 4);
        assert_eq!(out.to_bytes(), vec![0x0E]);
    }
}
