use s7_quickdraw::{Rect, RegionOps, RgnHandle};
use tracing::trace;

use super::WindowManager;
use crate::auto_region::AutoRegion;
use crate::error::{WmError, WmResult};
use crate::paint::Painter;
use crate::window::{ClipSource, WindowId};

impl<R: RegionOps + Clone, P: Painter> WindowManager<R, P> {
    // ========================================================================
    // Invalidation
    // ========================================================================

    /// `InvalRect`: add `rect` to the update region, clipped to the content.
    pub fn invalidate_rect(&mut self, id: WindowId, rect: Rect) -> WmResult<()> {
        let (update, content) = self.update_and_content(id)?;
        let scratch = AutoRegion::rect_into_new(self.regions.clone(), rect);
        self.regions.union_region(update, scratch.require()?, update);
        self.regions.sect_region(update, content, update);
        trace!(%id, ?rect, "invalidated");
        Ok(())
    }

    /// `InvalRgn`: add `rgn` to the update region, clipped to the content.
    pub fn invalidate_region(&mut self, id: WindowId, rgn: RgnHandle) -> WmResult<()> {
        let (update, content) = self.update_and_content(id)?;
        self.regions.union_region(update, rgn, update);
        self.regions.sect_region(update, content, update);
        Ok(())
    }

    /// `ValidRect`: remove `rect` from the update region.
    pub fn validate_rect(&mut self, id: WindowId, rect: Rect) -> WmResult<()> {
        let (update, _) = self.update_and_content(id)?;
        let scratch = AutoRegion::rect_into_new(self.regions.clone(), rect);
        self.regions.diff_region(update, scratch.require()?, update);
        trace!(%id, ?rect, "validated");
        Ok(())
    }

    /// `ValidRgn`: remove `rgn` from the update region.
    pub fn validate_region(&mut self, id: WindowId, rgn: RgnHandle) -> WmResult<()> {
        let (update, _) = self.update_and_content(id)?;
        self.regions.diff_region(update, rgn, update);
        Ok(())
    }

    /// Whether the window has anything left to redraw.
    pub fn has_pending_update(&self, id: WindowId) -> WmResult<bool> {
        let (update, _) = self.update_and_content(id)?;
        Ok(!self.regions.is_empty_region(update))
    }

    /// `CheckUpdate`: the frontmost visible window with a non-empty update
    /// region.
    pub fn check_update(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .find(|w| w.visible && !self.regions.is_empty_region(w.update_rgn))
            .map(|w| w.id)
    }

    // ========================================================================
    // Update bracket
    // ========================================================================

    /// Start redrawing: clip drawing to the update region.
    pub fn begin_update(&mut self, id: WindowId) -> WmResult<()> {
        let window = self.windows.get_mut(id)?;
        if window.in_update {
            return Err(WmError::InvalidOperation {
                op: "begin_update",
                reason: "update already in progress",
            });
        }
        window.in_update = true;
        window.clip = ClipSource::Update;
        trace!(%id, "begin update");
        Ok(())
    }

    /// Finish redrawing: empty the update region and clip back to the
    /// content.
    pub fn end_update(&mut self, id: WindowId) -> WmResult<()> {
        let window = self.windows.get_mut(id)?;
        window.in_update = false;
        window.clip = ClipSource::Content;
        let update = window.update_rgn;
        self.regions.set_empty_region(update);
        trace!(%id, "end update");
        Ok(())
    }

    /// The region drawing into this window is currently clipped to.
    pub fn clip_region(&self, id: WindowId) -> WmResult<RgnHandle> {
        Ok(self.windows.get(id)?.clip_region())
    }

    fn update_and_content(&self, id: WindowId) -> WmResult<(RgnHandle, RgnHandle)> {
        let window = self.windows.get(id)?;
        Ok((window.update_rgn, window.content_rgn))
    }
}
