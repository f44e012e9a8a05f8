use crate::layout::{
    DEPOSIT_MASK, DEPOSIT_SHIFT, FLOW_RATE_MASK, FLOW_RATE_SHIFT, TIMESTAMP_SHIFT, TRUNCATED_BITS,
};
use crate::word::Word256;

/// Flow word field extractor
#[derive(Debug, Default, Copy, Clone)]
pub struct FlowWordExtractor;

impl FlowWordExtractor {
    pub(crate) const fn new() -> Self {
        Self
    }

    /// Extract timestamp field from a packed word
    #[inline(always)]
    pub fn timestamp(&self, word: Word256) -> u32 {
        (word >> TIMESTAMP_SHIFT).low_u64() as u32
    }

    /// Extract flow rate field from a packed word
    #[inline(always)]
    pub fn flow_rate(&self, word: Word256) -> u128 {
        ((word >> FLOW_RATE_SHIFT) & FLOW_RATE_MASK).low_u128()
    }

    /// Extract deposit from a packed word, rescaled with its low 32 bits zero
    #[inline(always)]
    pub fn deposit(&self, word: Word256) -> u128 {
        ((word >> DEPOSIT_SHIFT) & DEPOSIT_MASK).low_u128() << TRUNCATED_BITS
    }

    /// Extract owed deposit from a packed word, rescaled with its low 32 bits zero
    #[inline(always)]
    pub fn owed_deposit(&self, word: Word256) -> u128 {
        (word & DEPOSIT_MASK).low_u128() << TRUNCATED_BITS
    }

    /// Decompose a word into timestamp, flow rate, deposit and owed deposit
    #[inline]
    pub fn decompose(&self, word: Word256) -> (u32, u128, u128, u128) {
        crate::codec::decode(word)
    }
}
