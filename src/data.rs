//! Plain record of the four packed fields

use chrono::{DateTime, Utc};

use crate::codec::{decode, encode};
use crate::layout::truncate_amount;
use crate::word::Word256;

/// Flow fields held in a packed word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FlowData {
    /// Seconds since the Unix epoch
    pub timestamp: u32,
    pub flow_rate: u128,
    pub deposit: u128,
    pub owed_deposit: u128,
}

impl FlowData {
    pub const fn new(timestamp: u32, flow_rate: u128, deposit: u128, owed_deposit: u128) -> Self {
        Self {
            timestamp,
            flow_rate,
            deposit,
            owed_deposit,
        }
    }

    /// Pack without range checks
    #[inline]
    pub fn to_word(&self) -> Word256 {
        encode(
            self.timestamp as u64,
            self.flow_rate,
            self.deposit,
            self.owed_deposit,
        )
    }

    #[inline]
    pub fn from_word(word: Word256) -> Self {
        let (timestamp, flow_rate, deposit, owed_deposit) = decode(word);
        Self::new(timestamp, flow_rate, deposit, owed_deposit)
    }

    /// The record as it comes back from a pack/unpack cycle, assuming the flow
    /// rate and amounts fit their fields
    pub const fn truncated(&self) -> Self {
        Self {
            timestamp: self.timestamp,
            flow_rate: self.flow_rate,
            deposit: truncate_amount(self.deposit),
            owed_deposit: truncate_amount(self.owed_deposit),
        }
    }

    /// Timestamp as a UTC date time
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.timestamp as i64, 0)
    }
}

impl From<Word256> for FlowData {
    fn from(word: Word256) -> Self {
        Self::from_word(word)
    }
}

impl From<FlowData> for Word256 {
    fn from(data: FlowData) -> Self {
        data.to_word()
    }
}
