#![no_std]
//! Geometry primitives and the layout protocol shared by `waterfall` crates.
//!
//! Hosts implement [`layout::SubView`] for their child views and drive any
//! [`layout::Layout`] through its sizing and placement passes.

extern crate alloc;

pub mod layout;

pub use layout::{EdgeInsets, Layout, Point, ProposalSize, Rect, Size, StretchAxis, SubView};
