//! Fixed-width 256-bit unsigned word
//!
//! Split into modules:
//! - `ops` - Shift and mask operators spanning limb boundaries
//! - `fmt` - Decimal and hex rendering
//! - `parse` - Hex parsing

mod fmt;
mod ops;
mod parse;

pub use parse::ParseWordError;

/// 256-bit unsigned integer stored as four `u64` limbs, least significant first
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Word256([u64; 4]);

impl Word256 {
    /// Number of bits in a word
    pub const BITS: u32 = 256;

    /// Number of `u64` limbs
    pub const LIMBS: usize = 4;

    pub const ZERO: Self = Self([0; 4]);
    pub const MAX: Self = Self([u64::MAX; 4]);

    /// Create a word from limbs ordered least significant first
    #[inline(always)]
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        Self(limbs)
    }

    /// Limbs ordered least significant first
    #[inline(always)]
    pub const fn limbs(&self) -> [u64; 4] {
        self.0
    }

    #[inline(always)]
    pub const fn from_u128(value: u128) -> Self {
        Self([value as u64, (value >> 64) as u64, 0, 0])
    }

    /// Word with the lowest `bits` bits set
    #[inline]
    pub const fn low_bits(bits: u32) -> Self {
        let mut limbs = [0u64; 4];
        let mut i = 0;
        while i < Self::LIMBS {
            let start = (i as u32) * 64;
            limbs[i] = if bits >= start + 64 {
                u64::MAX
            } else if bits > start {
                (1u64 << (bits - start)) - 1
            } else {
                0
            };
            i += 1;
        }
        Self(limbs)
    }

    /// Lowest 64 bits, higher bits discarded
    #[inline(always)]
    pub const fn low_u64(&self) -> u64 {
        self.0[0]
    }

    /// Lowest 128 bits, higher bits discarded
    #[inline(always)]
    pub const fn low_u128(&self) -> u128 {
        ((self.0[1] as u128) << 64) | (self.0[0] as u128)
    }

    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.0[0] == 0 && self.0[1] == 0 && self.0[2] == 0 && self.0[3] == 0
    }

    /// Big-endian byte representation
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (chunk, limb) in out.chunks_exact_mut(8).zip(self.0.iter().rev()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Create a word from its big-endian byte representation
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().rev().zip(bytes.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(buf);
        }
        Self(limbs)
    }
}

impl From<u32> for Word256 {
    #[inline]
    fn from(value: u32) -> Self {
        Self([value as u64, 0, 0, 0])
    }
}

impl From<u64> for Word256 {
    #[inline]
    fn from(value: u64) -> Self {
        Self([value, 0, 0, 0])
    }
}

impl From<u128> for Word256 {
    #[inline]
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<[u8; 32]> for Word256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self::from_be_bytes(bytes)
    }
}

impl From<Word256> for [u8; 32] {
    fn from(word: Word256) -> Self {
        word.to_be_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_bits() {
        assert_eq!(Word256::low_bits(0), Word256::ZERO);
        assert_eq!(Word256::low_bits(64), Word256::from(u64::MAX));
        assert_eq!(Word256::low_bits(96), Word256::from((1u128 << 96) - 1));
        assert_eq!(Word256::low_bits(256), Word256::MAX);
        assert_eq!(Word256::low_bits(300), Word256::MAX);
        assert_eq!(
            Word256::low_bits(200).limbs(),
            [u64::MAX, u64::MAX, u64::MAX, (1u64 << 8) - 1]
        );
    }

    #[test]
    fn test_u128_conversion() {
        let value = 0x0123_4567_89ab_cdef_fedc_ba98_7654_3210u128;
        let word = Word256::from(value);
        assert_eq!(word.low_u128(), value);
        assert_eq!(word.low_u64(), 0xfedc_ba98_7654_3210);
        assert_eq!(word.limbs()[2], 0);
        assert_eq!(word.limbs()[3], 0);
    }

    #[test]
    fn test_be_bytes() {
        let word = Word256::from_limbs([1, 2, 3, 0x0400_0000_0000_0000]);
        let bytes = word.to_be_bytes();
        assert_eq!(bytes[0], 0x04);
        assert_eq!(bytes[7], 0x00);
        assert_eq!(bytes[15], 0x03);
        assert_eq!(bytes[23], 0x02);
        assert_eq!(bytes[31], 0x01);
        assert_eq!(Word256::from_be_bytes(bytes), word);
        assert_eq!(<[u8; 32]>::from(Word256::MAX), [0xff; 32]);
    }

    #[test]
    fn test_is_zero() {
        assert!(Word256::ZERO.is_zero());
        assert!(Word256::default().is_zero());
        assert!(!Word256::from_limbs([0, 0, 0, 1]).is_zero());
    }
}
