//! Word codec: pack four flow fields into one 256-bit word and back

use crate::error::PackError;
use crate::layout::{
    DEPOSIT_MASK, DEPOSIT_SHIFT, FLOW_RATE_MASK, FLOW_RATE_SHIFT, MAX_AMOUNT, MAX_FLOW_RATE,
    MAX_TIMESTAMP, TIMESTAMP_SHIFT, TRUNCATED_BITS,
};
use crate::word::Word256;

/// Pack the four fields into a word
///
/// No range checks are made. A `flow_rate` of 2^96 or more bleeds into the
/// timestamp field, an amount of 2^96 or more bleeds into the next field up, and
/// timestamp bits above bit 31 are shifted out of the word. The low 32 bits of
/// `deposit` and `owed_deposit` are always dropped.
#[inline]
pub fn encode(timestamp: u64, flow_rate: u128, deposit: u128, owed_deposit: u128) -> Word256 {
    (Word256::from(timestamp) << TIMESTAMP_SHIFT)
        | (Word256::from(flow_rate) << FLOW_RATE_SHIFT)
        | (Word256::from(deposit >> TRUNCATED_BITS) << DEPOSIT_SHIFT)
        | Word256::from(owed_deposit >> TRUNCATED_BITS)
}

/// Unpack a word into `(timestamp, flow_rate, deposit, owed_deposit)`
///
/// Total over every 256-bit value. Deposit and owed deposit come back with
/// their low 32 bits zeroed.
#[inline]
pub fn decode(word: Word256) -> (u32, u128, u128, u128) {
    let timestamp = (word >> TIMESTAMP_SHIFT).low_u64() as u32;
    let flow_rate = ((word >> FLOW_RATE_SHIFT) & FLOW_RATE_MASK).low_u128();
    let deposit = ((word >> DEPOSIT_SHIFT) & DEPOSIT_MASK).low_u128() << TRUNCATED_BITS;
    let owed_deposit = (word & DEPOSIT_MASK).low_u128() << TRUNCATED_BITS;
    (timestamp, flow_rate, deposit, owed_deposit)
}

/// Pack the four fields, rejecting any value that would spill out of its field
///
/// Truncation of the low 32 bits of the amounts is not an error.
pub fn try_encode(
    timestamp: u64,
    flow_rate: u128,
    deposit: u128,
    owed_deposit: u128,
) -> Result<Word256, PackError> {
    validate(timestamp, flow_rate, deposit, owed_deposit)?;
    Ok(encode(timestamp, flow_rate, deposit, owed_deposit))
}

/// Check every field against its width
pub(crate) fn validate(
    timestamp: u64,
    flow_rate: u128,
    deposit: u128,
    owed_deposit: u128,
) -> Result<(), PackError> {
    if timestamp > MAX_TIMESTAMP {
        return Err(PackError::TimestampOverflow {
            value: timestamp,
            max: MAX_TIMESTAMP,
        });
    }
    if flow_rate > MAX_FLOW_RATE {
        return Err(PackError::FlowRateOverflow {
            value: flow_rate,
            max: MAX_FLOW_RATE,
        });
    }
    if deposit > MAX_AMOUNT {
        return Err(PackError::DepositOverflow {
            value: deposit,
            max: MAX_AMOUNT,
        });
    }
    if owed_deposit > MAX_AMOUNT {
        return Err(PackError::OwedDepositOverflow {
            value: owed_deposit,
            max: MAX_AMOUNT,
        });
    }
    Ok(())
}
