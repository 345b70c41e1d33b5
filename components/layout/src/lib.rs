#![no_std]
//! Waterfall (masonry) layout for `waterfall`.
//!
//! Items of varying height are packed into a fixed number of equal-width
//! columns. Each item keeps its aspect ratio, is scaled to the column width
//! and goes into whichever column is currently shortest, which keeps the
//! columns balanced without any global search.
//!
//! The crate contains:
//!
//! - [`WaterfallPlacer`], the pure placement pass, and its [`Placement`] result,
//! - [`WaterfallConfig`], the geometry of one pass,
//! - [`WaterfallProvider`], the interface a host implements to describe items,
//! - [`WaterfallLayout`], a [`Layout`] container for hosts that drive the
//!   two-phase layout protocol.
//!
//! # Example
//!
//! ```rust
//! use waterfall_layout::{Size, WaterfallConfig, place};
//!
//! let config = WaterfallConfig::new(220.0).columns(2).spacing(10.0);
//! let sizes = [Size::new(105.0, 50.0), Size::new(105.0, 80.0)];
//! let placement = place(&sizes, &config).unwrap();
//!
//! assert_eq!(placement.assignments(), &[0, 1]);
//! assert_eq!(placement.frames()[1].x(), 115.0);
//! ```

extern crate alloc;

pub use waterfall_core::layout::*;

pub mod config;
pub use config::{DEFAULT_COLUMNS, DEFAULT_ITEM_SIZE, DEFAULT_SPACING, WaterfallConfig};
pub mod error;
pub use error::{LayoutError, LayoutResult};
pub mod placer;
pub use placer::{ColumnState, Placement, WaterfallPlacer, place};
pub mod provider;
pub use provider::{SizeList, WaterfallProvider};
pub mod waterfall;
pub use waterfall::WaterfallLayout;
