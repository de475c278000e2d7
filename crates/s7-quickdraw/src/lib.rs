//! QuickDraw geometry and regions for the System 7 kernel
//!
//! This crate is the drawing-side collaborator of the Window Manager. It only
//! provides what the Window Manager needs to own and combine shapes:
//!
//! - [`geometry`]: `Point` and `Rect` in 16-bit global coordinates
//! - [`region`]: `Region`, a shape stored as a set of disjoint rectangles
//! - [`ops`]: the `RegionOps` trait and the opaque `RgnHandle`
//! - [`heap`]: `RegionHeap`, the reference `RegionOps` allocator
//!
//! ## Example
//!
//! ```rust
//! use s7_quickdraw::{Rect, RegionHeap, RegionOps};
//!
//! let heap = RegionHeap::new();
//! let rgn = heap.new_region().unwrap();
//! heap.set_rect_region(rgn, Rect::new(0, 0, 10, 10));
//! assert!(!heap.is_empty_region(rgn));
//! heap.dispose_region(rgn);
//! assert_eq!(heap.live_count(), 0);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod geometry;
pub mod heap;
pub mod ops;
pub mod region;

pub use geometry::{Point, Rect};
pub use heap::{HeapStats, RegionHeap};
pub use ops::{RegionOps, RgnHandle};
pub use region::Region;
