//! Bitwise operators for `Word256`
//!
//! Shifts are logical: bits moved past either end are dropped

use std::ops::{BitAnd, BitOr, Shl, Shr};

use super::Word256;

impl Shl<u32> for Word256 {
    type Output = Self;

    #[inline]
    fn shl(self, bits: u32) -> Self {
        if bits >= Self::BITS {
            return Self::ZERO;
        }
        let limb_shift = (bits / 64) as usize;
        let bit_shift = bits % 64;
        let mut out = [0u64; 4];

        for i in limb_shift..Self::LIMBS {
            let src = i - limb_shift;
            out[i] = self.0[src] << bit_shift;
            if bit_shift != 0 && src > 0 {
                out[i] |= self.0[src - 1] >> (64 - bit_shift);
            }
        }
        Self(out)
    }
}

impl Shr<u32> for Word256 {
    type Output = Self;

    #[inline]
    fn shr(self, bits: u32) -> Self {
        if bits >= Self::BITS {
            return Self::ZERO;
        }
        let limb_shift = (bits / 64) as usize;
        let bit_shift = bits % 64;
        let mut out = [0u64; 4];

        for i in 0..Self::LIMBS - limb_shift {
            let src = i + limb_shift;
            out[i] = self.0[src] >> bit_shift;
            if bit_shift != 0 && src + 1 < Self::LIMBS {
                out[i] |= self.0[src + 1] << (64 - bit_shift);
            }
        }
        Self(out)
    }
}

impl BitAnd for Word256 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self([
            self.0[0] & rhs.0[0],
            self.0[1] & rhs.0[1],
            self.0[2] & rhs.0[2],
            self.0[3] & rhs.0[3],
        ])
    }
}

impl BitOr for Word256 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self([
            self.0[0] | rhs.0[0],
            self.0[1] | rhs.0[1],
            self.0[2] | rhs.0[2],
            self.0[3] | rhs.0[3],
        ])
    }
}
