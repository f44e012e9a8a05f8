//! # FlowWord
//!
//! Packs the state of a constant flow into a single 256-bit word.
//!
//! | Field | Bits |
//! |---|---|
//! | timestamp | 224..256 |
//! | flow rate | 128..224 |
//! | deposit >> 32 | 64..128 |
//! | owed deposit >> 32 | 0..64 |
//!
//! Deposit and owed deposit lose their low 32 bits on the way in, so a round trip
//! returns `v - (v mod 2^32)` for both.
//!
//! ```
//! use flowword::{decode, encode};
//!
//! let word = encode(1618876800, 1234000000000000000000, 5678000000000000000000, 0);
//! let (timestamp, flow_rate, deposit, _) = decode(word);
//! assert_eq!(timestamp, 1618876800);
//! assert_eq!(flow_rate, 1234000000000000000000);
//! assert_eq!(deposit, 5677999999997114843136);
//! ```

#![forbid(unsafe_code)]

mod codec;
mod config;
mod data;
mod error;
mod extractor;
pub mod layout;
mod packer;
mod word;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use codec::{decode, encode, try_encode};
pub use config::{FlowWordConfig, FlowWordConfigBuilder, PackMode};
pub use data::FlowData;
pub use error::PackError;
pub use extractor::FlowWordExtractor;
pub use packer::FlowWordCodec;
pub use word::{ParseWordError, Word256};
