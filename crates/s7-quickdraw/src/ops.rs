//! The region interface consumed by the Window Manager
//!
//! Regions are owned by an allocator and addressed through `RgnHandle`, an
//! arena slot plus a generation. Disposing a region bumps the generation of
//! its slot, so any handle kept past disposal is recognised as stale and
//! ignored instead of touching whatever reuses the slot.

use core::fmt;

use crate::geometry::{Point, Rect};

/// Opaque reference to an allocated region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RgnHandle {
    index: u32,
    generation: u32,
}

impl RgnHandle {
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for RgnHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgn#{}.{}", self.index, self.generation)
    }
}

/// Region primitives.
///
/// All methods take `&self`; implementations use interior mutability so a
/// single allocator can be shared by every window and temporary. Operations
/// on a stale or foreign handle are ignored (queries answer as if the region
/// were empty).
pub trait RegionOps {
    /// Allocate an empty region. `None` when the allocator is exhausted.
    fn new_region(&self) -> Option<RgnHandle>;

    /// Release a region. The handle is stale afterwards.
    fn dispose_region(&self, rgn: RgnHandle);

    /// Make `dst` the same shape as `src`.
    fn copy_region(&self, src: RgnHandle, dst: RgnHandle);

    fn set_rect_region(&self, rgn: RgnHandle, rect: Rect);

    fn set_empty_region(&self, rgn: RgnHandle);

    /// `dst = a ∪ b`. `dst` may alias either input.
    fn union_region(&self, a: RgnHandle, b: RgnHandle, dst: RgnHandle);

    /// `dst = a \ b`. `dst` may alias either input.
    fn diff_region(&self, a: RgnHandle, b: RgnHandle, dst: RgnHandle);

    /// `dst = a ∩ b`. `dst` may alias either input.
    fn sect_region(&self, a: RgnHandle, b: RgnHandle, dst: RgnHandle);

    fn offset_region(&self, rgn: RgnHandle, dh: i16, dv: i16);

    fn is_empty_region(&self, rgn: RgnHandle) -> bool;

    fn point_in_region(&self, pt: Point, rgn: RgnHandle) -> bool;

    /// True if any part of `rect` is inside the region.
    fn rect_in_region(&self, rect: &Rect, rgn: RgnHandle) -> bool;

    /// Bounding box, [`Rect::EMPTY`] for empty or stale regions.
    fn region_bounds(&self, rgn: RgnHandle) -> Rect;
}

impl<T: RegionOps + ?Sized> RegionOps for &T {
    fn new_region(&self) -> Option<RgnHandle> {
        (**self).new_region()
    }

    fn dispose_region(&self, rgn: RgnHandle) {
        (**self).dispose_region(rgn)
    }

    fn copy_region(&self, src: RgnHandle, dst: RgnHandle) {
        (**self).copy_region(src, dst)
    }

    fn set_rect_region(&self, rgn: RgnHandle, rect: Rect) {
        (**self).set_rect_region(rgn, rect)
    }

    fn set_empty_region(&self, rgn: RgnHandle) {
        (**self).set_empty_region(rgn)
    }

    fn union_region(&self, a: RgnHandle, b: RgnHandle, dst: RgnHandle) {
        (**self).union_region(a, b, dst)
    }

    fn diff_region(&self, a: RgnHandle, b: RgnHandle, dst: RgnHandle) {
        (**self).diff_region(a, b, dst)
    }

    fn sect_region(&self, a: RgnHandle, b: RgnHandle, dst: RgnHandle) {
        (**self).sect_region(a, b, dst)
    }

    fn offset_region(&self, rgn: RgnHandle, dh: i16, dv: i16) {
        (**self).offset_region(rgn, dh, dv)
    }

    fn is_empty_region(&self, rgn: RgnHandle) -> bool {
        (**self).is_empty_region(rgn)
    }

    fn point_in_region(&self, pt: Point, rgn: RgnHandle) -> bool {
        (**self).point_in_region(pt, rgn)
    }

    fn rect_in_region(&self, rect: &Rect, rgn: RgnHandle) -> bool {
        (**self).rect_in_region(rect, rgn)
    }

    fn region_bounds(&self, rgn: RgnHandle) -> Rect {
        (**self).region_bounds(rgn)
    }
}
