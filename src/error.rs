use thiserror::Error;

/// Errors raised when packing with range checks enabled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// Timestamp does not fit in 32 bits
    #[error("Timestamp {value} does not fit its field. Maximum allowed value is {max}")]
    TimestampOverflow { value: u64, max: u64 },
    /// Flow rate does not fit in 96 bits
    #[error("Flow rate {value} does not fit its field. Maximum allowed value is {max}")]
    FlowRateOverflow { value: u128, max: u128 },
    /// Deposit does not fit in 96 bits
    #[error("Deposit {value} does not fit its field. Maximum allowed value is {max}")]
    DepositOverflow { value: u128, max: u128 },
    /// Owed deposit does not fit in 96 bits
    #[error("Owed deposit {value} does not fit its field. Maximum allowed value is {max}")]
    OwedDepositOverflow { value: u128, max: u128 },
}
