//! Decimal and hex rendering for `Word256`

use std::fmt;

use super::Word256;

/// Largest power of ten that fits in a `u64`
const DECIMAL_CHUNK: u64 = 10_000_000_000_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 19;

impl Word256 {
    /// Divide in place by a `u64`, returning the remainder
    fn div_rem_u64(limbs: &mut [u64; 4], divisor: u64) -> u64 {
        let mut rem = 0u64;
        for limb in limbs.iter_mut().rev() {
            let cur = ((rem as u128) << 64) | (*limb as u128);
            *limb = (cur / divisor as u128) as u64;
            rem = (cur % divisor as u128) as u64;
        }
        rem
    }
}

impl fmt::Display for Word256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut limbs = self.0;
        let mut chunks = Vec::with_capacity(5);
        loop {
            chunks.push(Self::div_rem_u64(&mut limbs, DECIMAL_CHUNK));
            if limbs == [0; 4] {
                break;
            }
        }

        let mut digits = String::with_capacity(chunks.len() * DECIMAL_CHUNK_DIGITS);
        let mut iter = chunks.iter().rev();
        if let Some(first) = iter.next() {
            digits.push_str(&first.to_string());
        }
        for chunk in iter {
            digits.push_str(&format!("{:0width$}", chunk, width = DECIMAL_CHUNK_DIGITS));
        }
        f.pad_integral(true, "", &digits)
    }
}

impl fmt::LowerHex for Word256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(64);
        for limb in self.0.iter().rev() {
            if digits.is_empty() {
                if *limb != 0 {
                    digits.push_str(&format!("{:x}", limb));
                }
            } else {
                digits.push_str(&format!("{:016x}", limb));
            }
        }
        if digits.is_empty() {
            digits.push('0');
        }
        f.pad_integral(true, "0x", &digits)
    }
}
