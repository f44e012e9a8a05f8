//! Configured codec wrapping the free `encode`/`decode` functions

use tracing::{debug, warn};

use crate::codec::{encode, validate};
use crate::config::FlowWordConfig;
use crate::data::FlowData;
use crate::error::PackError;
use crate::extractor::FlowWordExtractor;
use crate::word::Word256;

/// Flow word codec with a packing mode
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowWordCodec {
    /// Configuration for this codec
    pub config: FlowWordConfig,

    /// Extractor for reading single fields
    pub extract: FlowWordExtractor,
}

impl FlowWordCodec {
    /// Create with default (permissive) configuration
    pub fn new() -> Self {
        Self::with_config(FlowWordConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: FlowWordConfig) -> Self {
        Self {
            config,
            extract: FlowWordExtractor::new(),
        }
    }

    /// Pack the four fields according to the configured mode
    pub fn pack(
        &self,
        timestamp: u64,
        flow_rate: u128,
        deposit: u128,
        owed_deposit: u128,
    ) -> Result<Word256, PackError> {
        let checked = validate(timestamp, flow_rate, deposit, owed_deposit);
        match checked {
            Err(err) if self.config.is_strict() => {
                debug!(%err, "rejected flow word fields");
                return Err(err);
            }
            Err(err) if self.config.warn_on_overflow() => {
                warn!(%err, "packing flow word with overlapping fields");
            }
            _ => {}
        }

        let word = encode(timestamp, flow_rate, deposit, owed_deposit);
        debug!(%word, "packed flow word");
        Ok(word)
    }

    /// Pack a `FlowData` record according to the configured mode
    pub fn pack_data(&self, data: &FlowData) -> Result<Word256, PackError> {
        self.pack(
            data.timestamp as u64,
            data.flow_rate,
            data.deposit,
            data.owed_deposit,
        )
    }

    /// Unpack a word into a `FlowData` record
    #[inline]
    pub fn unpack(&self, word: Word256) -> FlowData {
        FlowData::from_word(word)
    }
}
