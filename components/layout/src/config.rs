//! Per-pass configuration of a waterfall layout.

use crate::{
    EdgeInsets, Size,
    error::{LayoutError, LayoutResult},
    provider::WaterfallProvider,
};

/// Column count used when the host does not supply one.
pub const DEFAULT_COLUMNS: usize = 2;

/// Column spacing used when the host does not supply one.
pub const DEFAULT_SPACING: f32 = 1.0;

/// Item size assumed when the host cannot describe an item.
pub const DEFAULT_ITEM_SIZE: Size = Size::new(100.0, 100.0);

/// Geometry shared by every item of one layout pass.
///
/// `content_width` is the width the columns share; the leading inset shifts
/// every column right and the top inset shifts every column down. Trailing and
/// bottom insets only contribute to the reported content size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaterfallConfig {
    /// Number of columns, at least one.
    #[cfg_attr(feature = "serde", serde(default = "default_columns"))]
    pub columns: usize,
    /// Gap between adjacent columns and between stacked items.
    #[cfg_attr(feature = "serde", serde(default = "default_spacing"))]
    pub spacing: f32,
    /// Insets around the column area.
    #[cfg_attr(feature = "serde", serde(default))]
    pub insets: EdgeInsets,
    /// Width available to the columns, excluding insets.
    pub content_width: f32,
}

#[cfg(feature = "serde")]
const fn default_columns() -> usize {
    DEFAULT_COLUMNS
}

#[cfg(feature = "serde")]
const fn default_spacing() -> f32 {
    DEFAULT_SPACING
}

impl WaterfallConfig {
    /// Creates a configuration with default columns and spacing and no insets.
    #[must_use]
    pub const fn new(content_width: f32) -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            spacing: DEFAULT_SPACING,
            insets: EdgeInsets::ZERO,
            content_width,
        }
    }

    /// Reads column count and spacing from `provider`.
    #[must_use]
    pub fn from_provider<P: WaterfallProvider + ?Sized>(provider: &P, content_width: f32) -> Self {
        Self::new(content_width)
            .columns(provider.number_of_columns())
            .spacing(provider.column_spacing())
    }

    /// Sets the number of columns.
    #[must_use]
    pub const fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the spacing between columns and between items in a column.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the insets around the column area.
    #[must_use]
    pub const fn insets(mut self, insets: EdgeInsets) -> Self {
        self.insets = insets;
        self
    }

    /// Sets only the leading inset.
    #[must_use]
    pub const fn leading_inset(mut self, leading: f32) -> Self {
        self.insets.leading = leading;
        self
    }

    /// Sets the width shared by the columns.
    #[must_use]
    pub const fn content_width(mut self, content_width: f32) -> Self {
        self.content_width = content_width;
        self
    }

    /// Width of every column, assuming the configuration is valid.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn column_width(&self) -> f32 {
        let columns = self.columns as f32;
        (self.content_width - (columns - 1.0) * self.spacing) / columns
    }

    /// Horizontal offset of column `column`, assuming the configuration is valid.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn column_x(&self, column: usize) -> f32 {
        self.insets.leading + column as f32 * (self.column_width() + self.spacing)
    }

    /// Checks the configuration and returns the column width it produces.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] when there are no columns, the
    /// content width is not positive, spacing or insets are negative, any
    /// value is not finite, or the spacing leaves no room for the columns.
    pub fn validate(&self) -> LayoutResult<f32> {
        if self.columns == 0 {
            return Err(LayoutError::config("column count must be at least 1"));
        }
        if !self.content_width.is_finite() || self.content_width <= 0.0 {
            return Err(LayoutError::config("content width must be positive"));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(LayoutError::config("spacing must be non-negative"));
        }
        if !self.insets.is_valid() {
            return Err(LayoutError::config("insets must be non-negative"));
        }

        let width = self.column_width();
        if width <= 0.0 {
            return Err(LayoutError::config("spacing leaves no width for columns"));
        }
        Ok(width)
    }
}
