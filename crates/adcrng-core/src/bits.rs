//! Packed bit container used throughout the pipeline.
//!
//! Bit order matches the byte reinterpretation the typed accessors rely on:
//! bit `i` lives in byte `i / 8` at position `i % 8` (LSB-first), and
//! multi-byte words are read little-endian. Changing this order changes
//! every whitened output, so it is pinned by golden tests in
//! [`whiten`](crate::whiten).

/// An ordered sequence of bits, packed LSB-first into bytes.
///
/// Transient by design: a `BitSequence` exists for the duration of one
/// generation call and carries no identity beyond its bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSequence {
    bytes: Vec<u8>,
    len: usize,
}

impl BitSequence {
    /// Empty sequence with room for `nbits`.
    pub fn with_capacity(nbits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(nbits.div_ceil(8)),
            len: 0,
        }
    }

    /// Reinterpret packed bytes as a sequence of exactly `nbits` bits.
    /// Bits past `nbits` in the final byte are dropped.
    pub fn from_bytes(bytes: &[u8], nbits: usize) -> Self {
        assert!(
            nbits <= bytes.len() * 8,
            "requested {} bits from {} bytes",
            nbits,
            bytes.len()
        );
        let mut bytes = bytes[..nbits.div_ceil(8)].to_vec();
        // Zero the padding bits so equality and to_bytes stay canonical.
        if nbits % 8 != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= (1u8 << (nbits % 8)) - 1;
            }
        }
        Self { bytes, len: nbits }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the sequence holds no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[self.len / 8] |= 1 << (self.len % 8);
        }
        self.len += 1;
    }

    /// Bit at position `index`.
    ///
    /// # Panics
    /// Panics when `index >= len()`.
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.len, "bit index {} out of range {}", index, self.len);
        (self.bytes[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Packed bytes, `len().div_ceil(8)` of them. Padding bits in the final
    /// byte are zero.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Iterator over the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|i| self.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_packs_lsb_first() {
        let mut bits = BitSequence::with_capacity(8);
        // 0b0000_0011 = 3: first two pushed bits are the two low bits.
        bits.push(true);
        bits.push(true);
        for _ in 0..6 {
            bits.push(false);
        }
        assert_eq!(bits.to_bytes(), vec![0x03]);
    }

    #[test]
    fn get_matches_push_order() {
        let mut bits = BitSequence::with_capacity(10);
        let pattern = [true, false, true, true, false, false, true, false, true, true];
        for &b in &pattern {
            bits.push(b);
        }
        assert_eq!(bits.len(), 10);
        for (i, &b) in pattern.iter().enumerate() {
            assert_eq!(bits.get(i), b, "bit {i}");
        }
    }

    #[test]
    fn from_bytes_truncates_and_zeroes_padding() {
        let bits = BitSequence::from_bytes(&[0xFF, 0xFF], 10);
        assert_eq!(bits.len(), 10);
        assert_eq!(bits.to_bytes(), vec![0xFF, 0x03]);
    }

    #[test]
    fn round_trip_preserves_bits() {
        let bits = BitSequence::from_bytes(&[0xA5, 0x5A, 0x3C], 20);
        let back = BitSequence::from_bytes(&bits.to_bytes(), bits.len());
        assert_eq!(bits, back);
    }

    #[test]
    fn empty_sequence() {
        let bits = BitSequence::with_capacity(0);
        assert!(bits.is_empty());
        assert_eq!(bits.to_bytes(), Vec::<u8>::new());
    }
}
