//! Geometry types and the two-phase layout protocol.
//!
//! # Logical Pixels (Points)
//!
//! Every value handled here is expressed in **logical pixels** (points/dp), the
//! unit design tools and native collection views already use. Hosts convert to
//! physical pixels at render time, so a column spacing of `10.0` looks the same
//! on every screen density.
//!
//! # Protocol
//!
//! A [`Layout`] is asked how large it wants to be for a [`ProposalSize`]
//! ([`Layout::size_that_fits`]) and is then handed its final bounds to position
//! its children ([`Layout::place`]). Children are reached through the
//! [`SubView`] proxy, which only answers size queries.

use core::fmt::Debug;

use alloc::vec::Vec;

// ============================================================================
// StretchAxis
// ============================================================================

/// Axis (or axes) along which a view or container grows to fill its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StretchAxis {
    /// Uses its intrinsic size.
    #[default]
    None,
    /// Fills the available width, intrinsic height.
    Horizontal,
    /// Fills the available height, intrinsic width.
    Vertical,
    /// Fills all available space.
    Both,
}

// ============================================================================
// SubView Trait - Child View Proxy
// ============================================================================

/// A proxy for querying a child's size during layout.
///
/// Implementations must be pure: answering the same proposal twice yields the
/// same size. Hosts are free to cache measurements behind this trait.
pub trait SubView {
    /// Query the child's size for a given proposal.
    ///
    /// - `ProposalSize::UNSPECIFIED` - intrinsic size (for media, its natural
    ///   pixel size, which fixes the aspect ratio)
    /// - `ProposalSize::new(Some(w), None)` - size when constrained to width `w`
    fn size_that_fits(&self, proposal: ProposalSize) -> Size;
}

// ============================================================================
// Layout Trait - Container Layout
// ============================================================================

/// A layout algorithm for arranging child views.
pub trait Layout: Debug {
    /// Calculate the size this layout wants given a proposal.
    ///
    /// # Arguments
    ///
    /// * `proposal` - The size proposed by the parent
    /// * `children` - Child proxies for size queries
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size;

    /// Place children within the given bounds.
    ///
    /// Returns exactly one rect per child, in child order.
    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect>;

    /// Which axis this container stretches to fill available space.
    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::None
    }
}

// ============================================================================
// Rect
// ============================================================================

/// Axis-aligned rectangle relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a new [`Rect`] with the provided `origin` and `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from origin (0, 0) with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::zero(),
            size,
        }
    }

    /// Creates a rectangle from its four components.
    #[must_use]
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    /// Returns the rectangle's origin (top-left corner).
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the rectangle's size.
    #[must_use]
    pub const fn size(&self) -> &Size {
        &self.size
    }

    /// Returns the rectangle's x-coordinate (left edge).
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.origin.x
    }

    /// Returns the rectangle's y-coordinate (top edge).
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.origin.y
    }

    /// Returns the rectangle's width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    /// Returns the rectangle's height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height
    }

    /// Returns the maximum y-coordinate (bottom edge).
    #[must_use]
    pub const fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Returns a copy moved by `dx`, `dy`.
    #[must_use]
    pub const fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(
            Point::new(self.origin.x + dx, self.origin.y + dy),
            self.size,
        )
    }

    /// Whether the vertical spans `[y, max_y)` of both rects intersect.
    ///
    /// Touching edges do not count, and a zero-height rect never intersects.
    #[must_use]
    pub fn overlaps_vertically(&self, other: &Self) -> bool {
        self.y() < other.max_y() && other.y() < self.max_y()
    }
}

// ============================================================================
// Size
// ============================================================================

/// Two-dimensional size expressed in points.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width in points.
    pub width: f32,
    /// The height in points.
    pub height: f32,
}

impl Size {
    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Returns true if both dimensions are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Height divided by width.
    ///
    /// Callers are expected to have checked that `width` is positive; a zero
    /// width yields an infinite or NaN ratio.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.height / self.width
    }
}

// ============================================================================
// Point
// ============================================================================

/// Absolute coordinate relative to a parent layout's origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x-coordinate in points.
    pub x: f32,
    /// The y-coordinate in points.
    pub y: f32,
}

impl Point {
    /// Constructs a [`Point`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a [`Point`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

// ============================================================================
// EdgeInsets
// ============================================================================

/// Insets applied to the four edges of a content area.
///
/// Leading and trailing are direction-relative (left and right in LTR).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EdgeInsets {
    /// Top inset in points.
    pub top: f32,
    /// Leading inset in points.
    pub leading: f32,
    /// Bottom inset in points.
    pub bottom: f32,
    /// Trailing inset in points.
    pub trailing: f32,
}

impl EdgeInsets {
    /// Zero insets.
    pub const ZERO: Self = Self::all(0.0);

    /// Creates insets with explicit edges.
    #[must_use]
    pub const fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    /// Returns equal insets on every edge.
    #[must_use]
    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns symmetric vertical and horizontal insets.
    #[must_use]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Sum of leading and trailing.
    #[must_use]
    pub const fn horizontal(&self) -> f32 {
        self.leading + self.trailing
    }

    /// Sum of top and bottom.
    #[must_use]
    pub const fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Whether every edge is a finite, non-negative value.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.top, self.leading, self.bottom, self.trailing]
            .iter()
            .all(|edge| edge.is_finite() && *edge >= 0.0)
    }
}

// ============================================================================
// ProposalSize
// ============================================================================

/// A size proposal from parent to child during layout negotiation.
///
/// Each dimension can be:
/// - `None` - "Tell me your ideal size" (unspecified)
/// - `Some(value)` - "I suggest you use this size"
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ProposalSize {
    /// Width proposal: `None` = unspecified, `Some(f32)` = suggested width
    pub width: Option<f32>,
    /// Height proposal: `None` = unspecified, `Some(f32)` = suggested height
    pub height: Option<f32>,
}

impl ProposalSize {
    /// Unspecified proposal - asks for ideal/intrinsic size.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Creates a [`ProposalSize`] from optional width and height.
    #[must_use]
    pub fn new(width: impl Into<Option<f32>>, height: impl Into<Option<f32>>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_geometry() {
        let rect = Rect::from_xywh(10.0, 20.0, 100.0, 50.0);

        assert_eq!(rect.x(), 10.0);
        assert_eq!(rect.y(), 20.0);
        assert_eq!(rect.max_y(), 70.0);
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 50.0);
    }

    #[test]
    fn test_rect_offset() {
        let rect = Rect::from_xywh(5.0, 5.0, 10.0, 10.0).offset(20.0, -5.0);

        assert_eq!(rect.origin(), Point::new(25.0, 0.0));
        assert_eq!(*rect.size(), Size::new(10.0, 10.0));
    }

    #[test]
    fn test_vertical_overlap() {
        let top = Rect::from_xywh(0.0, 0.0, 10.0, 50.0);
        let touching = Rect::from_xywh(0.0, 50.0, 10.0, 20.0);
        let crossing = Rect::from_xywh(0.0, 40.0, 10.0, 20.0);
        let flat = Rect::from_xywh(0.0, 25.0, 10.0, 0.0);

        assert!(!top.overlaps_vertically(&touching));
        assert!(top.overlaps_vertically(&crossing));
        assert!(crossing.overlaps_vertically(&top));
        assert!(!top.overlaps_vertically(&flat));
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(Size::new(100.0, 250.0).aspect_ratio(), 2.5);
        assert!(!Size::new(0.0, 10.0).aspect_ratio().is_finite());
        assert!(Size::zero().is_zero());
        assert!(!Size::new(0.0, 10.0).is_zero());
    }

    #[test]
    fn test_edge_insets() {
        let insets = EdgeInsets::new(1.0, 20.0, 3.0, 20.0);

        assert_eq!(insets.horizontal(), 40.0);
        assert_eq!(insets.vertical(), 4.0);
        assert!(insets.is_valid());
        assert!(!EdgeInsets::all(-1.0).is_valid());
        assert!(!EdgeInsets::symmetric(f32::NAN, 0.0).is_valid());
        assert_eq!(EdgeInsets::ZERO, EdgeInsets::default());
    }

    #[test]
    fn test_proposal_size() {
        let proposal = ProposalSize::new(100.0, None);

        assert_eq!(proposal.width, Some(100.0));
        assert_eq!(proposal.height, None);
        assert_eq!(ProposalSize::UNSPECIFIED, ProposalSize::default());
    }
}
