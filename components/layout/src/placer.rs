//! Shortest-column-first placement of items into equal-width columns.
//!
//! Every item is scaled to the shared column width, keeping its aspect ratio,
//! and appended to whichever column is currently shortest. Ties go to the
//! lowest column index, so a pass is fully determined by its inputs.

use alloc::{vec, vec::Vec};

use crate::{
    Rect, Size,
    config::WaterfallConfig,
    error::{LayoutError, LayoutResult},
    provider::{WaterfallProvider, checked_item_size},
};

/// Running state of one column during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColumnState {
    height: f32,
    len: usize,
}

impl ColumnState {
    /// Occupied vertical extent, including spacing already applied.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Number of items placed into the column.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been placed into the column yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends an item and returns the y offset it starts at.
    ///
    /// An item appended while the column height is still 0 starts flush at 0;
    /// otherwise it is separated from the column's content by `spacing`.
    fn append(&mut self, item_height: f32, spacing: f32) -> f32 {
        // Heights never go below 0, so this only matches an untouched height.
        let gap = if self.height <= 0.0 { 0.0 } else { spacing };
        let y = self.height + gap;
        self.height = y + item_height;
        self.len += 1;
        y
    }
}

/// Index of the shortest column; the leftmost one wins a tie.
fn shortest_column(columns: &[ColumnState]) -> usize {
    columns
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.height.total_cmp(&b.height))
        .map_or(0, |(index, _)| index)
}

/// Frames produced by one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    frames: Vec<Rect>,
    assignments: Vec<usize>,
    columns: Vec<ColumnState>,
    content_size: Size,
}

impl Placement {
    /// One frame per item, in item order.
    #[must_use]
    pub fn frames(&self) -> &[Rect] {
        &self.frames
    }

    /// Consumes the placement, returning its frames.
    #[must_use]
    pub fn into_frames(self) -> Vec<Rect> {
        self.frames
    }

    /// Column index each item was assigned to, in item order.
    #[must_use]
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    /// Final state of every column, left to right.
    #[must_use]
    pub fn columns(&self) -> &[ColumnState] {
        &self.columns
    }

    /// Final height of every column, left to right.
    pub fn column_heights(&self) -> impl Iterator<Item = f32> + '_ {
        self.columns.iter().map(ColumnState::height)
    }

    /// Size of the whole content area, insets included.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.content_size
    }

    /// Number of placed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the pass placed no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Lays out items for one fixed configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterfallPlacer {
    config: WaterfallConfig,
}

impl WaterfallPlacer {
    /// Creates a placer for `config`. The config is checked when placing.
    #[must_use]
    pub const fn new(config: WaterfallConfig) -> Self {
        Self { config }
    }

    /// The configuration this placer lays out with.
    #[must_use]
    pub const fn config(&self) -> &WaterfallConfig {
        &self.config
    }

    /// Places items whose intrinsic sizes are given in order.
    ///
    /// # Errors
    ///
    /// Fails with [`LayoutError::InvalidConfig`] or
    /// [`LayoutError::InvalidItemSize`] before any frame is computed.
    pub fn place(&self, sizes: &[Size]) -> LayoutResult<Placement> {
        let column_width = self.config.validate()?;
        let heights = scaled_heights(sizes.iter().copied(), column_width)?;
        Ok(self.assign(&heights, column_width))
    }

    /// Places every item `provider` reports.
    ///
    /// Column count and spacing come from the placer's configuration; use
    /// [`WaterfallConfig::from_provider`] to take them from the provider.
    ///
    /// # Errors
    ///
    /// Same as [`place`](Self::place), plus [`LayoutError::IndexOutOfRange`]
    /// when the provider cannot describe an index below its item count.
    pub fn place_from<P: WaterfallProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> LayoutResult<Placement> {
        let sizes = (0..provider.item_count())
            .map(|index| checked_item_size(provider, index))
            .collect::<LayoutResult<Vec<_>>>()?;
        self.place(&sizes)
    }

    fn assign(&self, heights: &[f32], column_width: f32) -> Placement {
        let config = &self.config;
        tracing::debug!(
            items = heights.len(),
            columns = config.columns,
            column_width,
            "placing waterfall"
        );

        let mut columns = vec![ColumnState::default(); config.columns];
        let mut frames = Vec::with_capacity(heights.len());
        let mut assignments = Vec::with_capacity(heights.len());

        for (index, &height) in heights.iter().enumerate() {
            let column = shortest_column(&columns);
            let y = columns[column].append(height, config.spacing);
            let x = config.column_x(column);

            tracing::trace!(index, column, x, y, height, "placed item");
            frames.push(Rect::from_xywh(x, config.insets.top + y, column_width, height));
            assignments.push(column);
        }

        let tallest = columns
            .iter()
            .map(ColumnState::height)
            .fold(0.0, f32::max);
        let content_size = Size::new(
            config.insets.horizontal() + config.content_width,
            config.insets.vertical() + tallest,
        );

        Placement {
            frames,
            assignments,
            columns,
            content_size,
        }
    }
}

/// Scales every item to `column_width`, rejecting sizes that cannot be scaled.
fn scaled_heights(
    sizes: impl ExactSizeIterator<Item = Size>,
    column_width: f32,
) -> LayoutResult<Vec<f32>> {
    let mut heights = Vec::with_capacity(sizes.len());
    for (index, size) in sizes.enumerate() {
        let invalid = LayoutError::InvalidItemSize {
            index,
            width: size.width,
            height: size.height,
        };
        if !size.width.is_finite() || size.width <= 0.0 {
            return Err(invalid);
        }
        if !size.height.is_finite() || size.height < 0.0 {
            return Err(invalid);
        }

        let height = column_width * size.aspect_ratio();
        if !height.is_finite() {
            return Err(invalid);
        }
        heights.push(height);
    }
    Ok(heights)
}

/// Places `sizes` with `config` in one call.
///
/// # Errors
///
/// See [`WaterfallPlacer::place`].
pub fn place(sizes: &[Size], config: &WaterfallConfig) -> LayoutResult<Placement> {
    WaterfallPlacer::new(*config).place(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_append() {
        let mut column = ColumnState::default();

        assert!(column.is_empty());
        assert_eq!(column.append(40.0, 10.0), 0.0);
        assert_eq!(column.append(60.0, 10.0), 50.0);
        assert_eq!(column.height(), 110.0);
        assert_eq!(column.len(), 2);
    }

    #[test]
    fn test_zero_height_items_leave_column_flush() {
        let mut column = ColumnState::default();

        assert_eq!(column.append(0.0, 10.0), 0.0);
        assert_eq!(column.append(20.0, 10.0), 0.0);
        assert_eq!(column.append(5.0, 10.0), 30.0);
        assert_eq!(column.height(), 35.0);
        assert_eq!(column.len(), 3);
    }

    #[test]
    fn test_shortest_column_prefers_leftmost() {
        let mut columns = [ColumnState::default(); 3];
        assert_eq!(shortest_column(&columns), 0);

        columns[0].append(30.0, 0.0);
        assert_eq!(shortest_column(&columns), 1);

        columns[1].append(10.0, 0.0);
        columns[2].append(10.0, 0.0);
        assert_eq!(shortest_column(&columns), 1);
    }

    #[test]
    fn test_rejects_degenerate_sizes() {
        let bad = [
            Size::new(0.0, 10.0),
            Size::new(-5.0, 10.0),
            Size::new(f32::NAN, 10.0),
            Size::new(10.0, -1.0),
            Size::new(10.0, f32::INFINITY),
            Size::new(f32::MIN_POSITIVE, f32::MAX),
        ];

        for size in bad {
            assert!(
                matches!(
                    scaled_heights([size].into_iter(), 100.0),
                    Err(LayoutError::InvalidItemSize { index: 0, .. })
                ),
                "{size:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_zero_height_is_valid() {
        assert_eq!(
            scaled_heights([Size::new(10.0, 0.0)].into_iter(), 100.0),
            Ok(vec![0.0])
        );
    }
}
