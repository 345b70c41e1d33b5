//! Errors raised when a waterfall pass is given inputs it cannot lay out.

/// An input-contract violation detected before any frame is computed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Column count, spacing, insets or content width cannot form columns.
    #[error("invalid waterfall configuration: {reason}")]
    InvalidConfig {
        /// What was wrong with the configuration.
        reason: &'static str,
    },
    /// An item reported a width that is not positive, or a negative height.
    #[error("item {index} has invalid size {width}x{height}")]
    InvalidItemSize {
        /// Index of the offending item.
        index: usize,
        /// Reported width.
        width: f32,
        /// Reported height.
        height: f32,
    },
    /// The size provider was asked about an index it does not hold.
    #[error("item index {index} is out of range for {count} items")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of items the provider holds.
        count: usize,
    },
}

impl LayoutError {
    pub(crate) const fn config(reason: &'static str) -> Self {
        Self::InvalidConfig { reason }
    }
}

/// Result alias used across the crate.
pub type LayoutResult<T> = Result<T, LayoutError>;
