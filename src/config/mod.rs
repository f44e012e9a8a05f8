//! Configuration for the flow word codec

mod builder;

pub use builder::FlowWordConfigBuilder;
use builder::{DEFAULT_MODE, DEFAULT_WARN_ON_OVERFLOW};

/// How the codec treats values wider than their field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PackMode {
    /// Pack as given; oversized values bleed into neighbouring fields
    #[default]
    Permissive,
    /// Reject oversized values with a `PackError`
    Strict,
}

/// Configuration for the flow word codec
#[derive(Debug, Clone, Copy)]
pub struct FlowWordConfig {
    mode: PackMode,
    warn_on_overflow: bool,
}

impl FlowWordConfig {
    const fn new(mode: PackMode, warn_on_overflow: bool) -> Self {
        Self {
            mode,
            warn_on_overflow,
        }
    }

    /// Create config from builder
    pub(crate) const fn from_builder(b: FlowWordConfigBuilder) -> Self {
        Self::new(b.mode, b.warn_on_overflow)
    }

    /// Create a new configuration builder
    pub fn builder() -> FlowWordConfigBuilder {
        FlowWordConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn mode(&self) -> PackMode {
        self.mode
    }

    #[inline(always)]
    pub const fn is_strict(&self) -> bool {
        matches!(self.mode, PackMode::Strict)
    }

    /// Whether permissive packing logs a warning when a field spills over
    #[inline(always)]
    pub const fn warn_on_overflow(&self) -> bool {
        self.warn_on_overflow
    }
}

impl Default for FlowWordConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODE, DEFAULT_WARN_ON_OVERFLOW)
    }
}
