//! FlowWordConfig builder for constructing configuration

use super::{FlowWordConfig, PackMode};

/// Default configuration values
pub(super) const DEFAULT_MODE: PackMode = PackMode::Permissive;
pub(super) const DEFAULT_WARN_ON_OVERFLOW: bool = false;

/// Builder for FlowWordConfig
#[derive(Debug)]
pub struct FlowWordConfigBuilder {
    pub(super) mode: PackMode,
    pub(super) warn_on_overflow: bool,
}

impl FlowWordConfigBuilder {
    /// Create a new FlowWordConfigBuilder with default values
    pub const fn new() -> Self {
        Self {
            mode: DEFAULT_MODE,
            warn_on_overflow: DEFAULT_WARN_ON_OVERFLOW,
        }
    }

    /// Set the packing mode
    pub const fn mode(mut self, mode: PackMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for `mode(PackMode::Strict)`
    pub const fn strict(self) -> Self {
        self.mode(PackMode::Strict)
    }

    /// Log a warning when permissive packing lets a field spill over
    pub const fn warn_on_overflow(mut self, enable: bool) -> Self {
        self.warn_on_overflow = enable;
        self
    }

    /// Build the final FlowWordConfig
    pub const fn build(self) -> FlowWordConfig {
        FlowWordConfig::from_builder(self)
    }
}

impl Default for FlowWordConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
