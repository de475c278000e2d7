//! Scoped region ownership
//!
//! An `AutoRegion` pairs a region handle with an `owned` flag. Dropping it
//! disposes the region if, and only if, it is still owned. Every temporary
//! region in the manager goes through this type, so early returns and `?`
//! never leak a region.
//!
//! Allocation failure does not produce an error here: the wrapper simply
//! holds no region. Callers that need the region check [`AutoRegion::require`].

use s7_quickdraw::{Rect, RegionOps, RgnHandle};
use tracing::trace;

use crate::error::{WmError, WmResult};

pub struct AutoRegion<R: RegionOps> {
    ops: R,
    rgn: Option<RgnHandle>,
    owned: bool,
}

impl<R: RegionOps> AutoRegion<R> {
    /// Allocate a fresh owned region. On allocation failure the wrapper is
    /// null but still marked owned; disposing it does nothing.
    pub fn new_owned(ops: R) -> Self {
        let rgn = ops.new_region();
        Self {
            ops,
            rgn,
            owned: true,
        }
    }

    /// Wrap an existing region without allocating.
    pub fn wrap(ops: R, rgn: Option<RgnHandle>, take_ownership: bool) -> Self {
        Self {
            ops,
            rgn,
            owned: take_ownership,
        }
    }

    /// Allocate a region with the same shape as `src`.
    pub fn copy_into_new(ops: R, src: RgnHandle) -> Self {
        let auto = Self::new_owned(ops);
        if let Some(dst) = auto.rgn {
            auto.ops.copy_region(src, dst);
        }
        auto
    }

    /// Allocate a region set to `rect`.
    pub fn rect_into_new(ops: R, rect: Rect) -> Self {
        let auto = Self::new_owned(ops);
        if let Some(rgn) = auto.rgn {
            auto.ops.set_rect_region(rgn, rect);
        }
        auto
    }

    pub fn handle(&self) -> Option<RgnHandle> {
        self.rgn
    }

    /// The wrapped region, or `OutOfRegions` if allocation failed.
    pub fn require(&self) -> WmResult<RgnHandle> {
        self.rgn.ok_or(WmError::OutOfRegions)
    }

    pub fn is_null(&self) -> bool {
        self.rgn.is_none()
    }

    pub fn is_owned(&self) -> bool {
        self.owned
    }

    pub fn ops(&self) -> &R {
        &self.ops
    }

    /// Release the region if owned. Always leaves the wrapper null and
    /// unowned, so repeated calls do nothing.
    pub fn dispose(&mut self) {
        if self.owned {
            if let Some(rgn) = self.rgn {
                trace!(%rgn, "auto region disposed");
                self.ops.dispose_region(rgn);
            }
        }
        self.owned = false;
        self.rgn = None;
    }

    /// Give up ownership and hand the region to the caller, who must
    /// dispose it. The wrapper keeps the handle for reading but will never
    /// dispose it.
    pub fn release_ownership(&mut self) -> Option<RgnHandle> {
        self.owned = false;
        self.rgn
    }
}

impl<R: RegionOps> Drop for AutoRegion<R> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<R: RegionOps> core::fmt::Debug for AutoRegion<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AutoRegion")
            .field("rgn", &self.rgn)
            .field("owned", &self.owned)
            .finish()
    }
}
