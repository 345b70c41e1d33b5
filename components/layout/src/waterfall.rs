//! Masonry container that plugs the placer into the [`Layout`] protocol.

use alloc::{vec, vec::Vec};

use crate::{
    EdgeInsets, Layout, ProposalSize, Rect, Size, StretchAxis, SubView,
    config::{DEFAULT_COLUMNS, DEFAULT_ITEM_SIZE, DEFAULT_SPACING, WaterfallConfig},
    error::LayoutResult,
    placer::{Placement, WaterfallPlacer},
    provider::WaterfallProvider,
};

/// The layout engine for a waterfall container.
///
/// Children are measured at their intrinsic size, which fixes their aspect
/// ratio, then scaled to the column width of the container's bounds. A child
/// without any intrinsic size is treated as [`DEFAULT_ITEM_SIZE`].
#[derive(Debug, Clone, PartialEq)]
pub struct WaterfallLayout {
    columns: usize,
    spacing: f32,
    insets: EdgeInsets,
}

impl Default for WaterfallLayout {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS)
    }
}

impl WaterfallLayout {
    /// Creates a layout with `columns` columns and default spacing.
    #[must_use]
    pub const fn new(columns: usize) -> Self {
        Self {
            columns,
            spacing: DEFAULT_SPACING,
            insets: EdgeInsets::ZERO,
        }
    }

    /// Takes column count and spacing from `provider`.
    #[must_use]
    pub fn from_provider<P: WaterfallProvider + ?Sized>(provider: &P) -> Self {
        Self::new(provider.number_of_columns()).spacing(provider.column_spacing())
    }

    /// Sets the spacing between columns and between stacked items.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the insets between the container bounds and the columns.
    #[must_use]
    pub const fn insets(mut self, insets: EdgeInsets) -> Self {
        self.insets = insets;
        self
    }

    /// Configuration for a container `container_width` points wide.
    #[must_use]
    pub fn config_for(&self, container_width: f32) -> WaterfallConfig {
        WaterfallConfig::new(container_width - self.insets.horizontal())
            .columns(self.columns)
            .spacing(self.spacing)
            .insets(self.insets)
    }

    /// Runs a pass for a container `container_width` points wide, with frames
    /// relative to the container's origin.
    ///
    /// # Errors
    ///
    /// Propagates any [`LayoutError`](crate::LayoutError) from the placer.
    pub fn placement(
        &self,
        container_width: f32,
        children: &[&dyn SubView],
    ) -> LayoutResult<Placement> {
        let sizes: Vec<Size> = children
            .iter()
            .map(|child| child.size_that_fits(ProposalSize::UNSPECIFIED))
            .map(|size| if size.is_zero() { DEFAULT_ITEM_SIZE } else { size })
            .collect();
        WaterfallPlacer::new(self.config_for(container_width)).place(&sizes)
    }
}

impl Layout for WaterfallLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        // A waterfall needs a width from its parent to form columns.
        let Some(width) = proposal.width.filter(|w| w.is_finite()) else {
            return Size::zero();
        };
        if children.is_empty() {
            return Size::new(width, self.insets.vertical());
        }

        match self.placement(width, children) {
            Ok(placement) => Size::new(width, placement.content_size().height),
            Err(error) => {
                tracing::warn!(%error, width, "waterfall cannot be sized");
                Size::new(width, 0.0)
            }
        }
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        if children.is_empty() {
            return vec![];
        }

        match self.placement(bounds.width(), children) {
            Ok(placement) => placement
                .into_frames()
                .into_iter()
                .map(|frame| frame.offset(bounds.x(), bounds.y()))
                .collect(),
            Err(error) => {
                tracing::warn!(%error, ?bounds, "waterfall placement skipped");
                vec![Rect::default(); children.len()]
            }
        }
    }

    /// Fills the available width; height follows the tallest column.
    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::Horizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    struct MockSubView {
        size: Size,
    }

    impl SubView for MockSubView {
        fn size_that_fits(&self, _proposal: ProposalSize) -> Size {
            self.size
        }
    }

    #[test]
    fn test_waterfall_size() {
        let layout = WaterfallLayout::new(2)
            .spacing(10.0)
            .insets(EdgeInsets::new(5.0, 20.0, 5.0, 20.0));

        // Column width: (260 - 40 - 10) / 2 = 105
        let a = MockSubView { size: Size::new(105.0, 50.0) };
        let b = MockSubView { size: Size::new(105.0, 80.0) };
        let c = MockSubView { size: Size::new(105.0, 30.0) };
        let children: Vec<&dyn SubView> = vec![&a, &b, &c];

        let size = layout.size_that_fits(ProposalSize::new(Some(260.0), None), &children);

        assert_eq!(size.width, 260.0);
        // First column: 50 + 10 + 30 = 90, taller than the second (80).
        // Plus 5 top and 5 bottom inset.
        assert!((size.height - 100.0).abs() < 0.001, "height {}", size.height);
    }

    #[test]
    fn test_waterfall_size_without_width() {
        let layout = WaterfallLayout::new(3);
        let a = MockSubView { size: Size::new(10.0, 10.0) };
        let children: Vec<&dyn SubView> = vec![&a];

        assert_eq!(
            layout.size_that_fits(ProposalSize::UNSPECIFIED, &children),
            Size::zero()
        );
    }

    #[test]
    fn test_waterfall_placement_in_bounds() {
        let layout = WaterfallLayout::new(2)
            .spacing(10.0)
            .insets(EdgeInsets::new(0.0, 20.0, 0.0, 20.0));

        let a = MockSubView { size: Size::new(100.0, 100.0) };
        let b = MockSubView { size: Size::new(100.0, 50.0) };
        let children: Vec<&dyn SubView> = vec![&a, &b];

        let bounds = Rect::new(Point::new(0.0, 100.0), Size::new(250.0, 400.0));
        let rects = layout.place(bounds, &children);

        // Column width: (250 - 40 - 10) / 2 = 100
        assert_eq!(rects[0], Rect::from_xywh(20.0, 100.0, 100.0, 100.0));
        assert_eq!(rects[1], Rect::from_xywh(130.0, 100.0, 100.0, 50.0));
    }

    #[test]
    fn test_waterfall_placement_falls_back_to_zero_rects() {
        let layout = WaterfallLayout::new(2);
        let broken = MockSubView { size: Size::new(0.0, 40.0) };
        let fine = MockSubView { size: Size::new(10.0, 40.0) };
        let children: Vec<&dyn SubView> = vec![&fine, &broken];

        let rects = layout.place(Rect::from_size(Size::new(200.0, 200.0)), &children);

        assert_eq!(rects, vec![Rect::default(); 2]);
    }

    #[test]
    fn test_child_without_intrinsic_size_is_square() {
        let layout = WaterfallLayout::new(2).spacing(10.0);
        let placeholder = MockSubView { size: Size::zero() };
        let children: Vec<&dyn SubView> = vec![&placeholder];

        let rects = layout.place(Rect::from_size(Size::new(210.0, 300.0)), &children);

        assert_eq!(rects[0], Rect::from_xywh(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_waterfall_from_provider() {
        let provider = crate::SizeList::new([]).columns(4).spacing(6.0);
        let layout = WaterfallLayout::from_provider(&provider);
        let config = layout.config_for(300.0);

        assert_eq!(config.columns, 4);
        assert_eq!(config.spacing, 6.0);
        assert_eq!(config.content_width, 300.0);
        assert_eq!(layout.stretch_axis(), StretchAxis::Horizontal);
    }
}
