//! Bit layout of a packed flow word
//!
//! ```text
//! 255        224 223                128 127          64 63            0
//! +-----------+----------------------+--------------+---------------+
//! | timestamp |      flow_rate       | deposit >> 32 | owed >> 32    |
//! +-----------+----------------------+--------------+---------------+
//! ```

use crate::word::Word256;

pub const TIMESTAMP_BITS: u32 = 32;
pub const FLOW_RATE_BITS: u32 = 96;
pub const DEPOSIT_BITS: u32 = 64;
pub const OWED_DEPOSIT_BITS: u32 = 64;

pub const TIMESTAMP_SHIFT: u32 = 224;
pub const FLOW_RATE_SHIFT: u32 = 128;
pub const DEPOSIT_SHIFT: u32 = 64;
pub const OWED_DEPOSIT_SHIFT: u32 = 0;

/// Low bits of deposit and owed deposit that are never stored
pub const TRUNCATED_BITS: u32 = 32;

/// Full width of a deposit or owed deposit amount
pub const AMOUNT_BITS: u32 = DEPOSIT_BITS + TRUNCATED_BITS;

pub const MAX_TIMESTAMP: u64 = u32::MAX as u64;
pub const MAX_FLOW_RATE: u128 = (1u128 << FLOW_RATE_BITS) - 1;
pub const MAX_AMOUNT: u128 = (1u128 << AMOUNT_BITS) - 1;

const TRUNCATED_MASK: u128 = (1u128 << TRUNCATED_BITS) - 1;

pub(crate) const FLOW_RATE_MASK: Word256 = Word256::low_bits(FLOW_RATE_BITS);
pub(crate) const DEPOSIT_MASK: Word256 = Word256::low_bits(DEPOSIT_BITS);

/// Value an amount takes after a pack/unpack cycle: `v - (v mod 2^32)`
#[inline(always)]
pub const fn truncate_amount(amount: u128) -> u128 {
    amount & !TRUNCATED_MASK
}

/// Part of an amount lost to truncation: `v mod 2^32`
#[inline(always)]
pub const fn truncation_loss(amount: u128) -> u128 {
    amount & TRUNCATED_MASK
}
