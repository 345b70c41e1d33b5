#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod debug;

pub use waterfall_core as geometry;
pub use waterfall_layout as layout;

#[doc(inline)]
pub use waterfall_layout::{
    LayoutError, LayoutResult, Placement, WaterfallConfig, WaterfallLayout, WaterfallPlacer,
    WaterfallProvider, place,
};

pub mod prelude {
    //! Commonly used types for hosting a waterfall.
    //!
    //! # Example
    //!
    //! ```rust
    //! use waterfall::prelude::*;
    //!
    //! let provider = SizeList::new([Size::new(100.0, 300.0), Size::new(100.0, 120.0)])
    //!     .columns(2)
    //!     .spacing(10.0);
    //! let config = WaterfallConfig::from_provider(&provider, 210.0);
    //! let placement = WaterfallPlacer::new(config).place_from(&provider).unwrap();
    //!
    //! assert_eq!(placement.len(), 2);
    //! ```
    pub use waterfall_core::layout::*;
    pub use waterfall_layout::{
        DEFAULT_COLUMNS, DEFAULT_ITEM_SIZE, DEFAULT_SPACING, LayoutError, LayoutResult, Placement,
        SizeList, WaterfallConfig, WaterfallLayout, WaterfallPlacer, WaterfallProvider, place,
    };
}
