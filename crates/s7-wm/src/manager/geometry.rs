use s7_quickdraw::{Point, Rect, RegionOps};
use tracing::{debug, trace};

use super::WindowManager;
use crate::auto_region::AutoRegion;
use crate::error::{WmError, WmResult};
use crate::paint::Painter;
use crate::window::{WindowId, WindowPart};

impl<R: RegionOps + Clone, P: Painter> WindowManager<R, P> {
    /// Move the window so its content's top-left corner is at `(h, v)`.
    ///
    /// The update region travels with the window. A visible window is
    /// repainted, along with the windows behind it that its old frame
    /// uncovered. A window brought forward without moving is still
    /// repainted once.
    pub fn move_to(&mut self, id: WindowId, h: i16, v: i16, bring_front: bool) -> WmResult<()> {
        let bounds = self.windows.get(id)?.bounds;
        let raised = bring_front && self.raise(id)?;
        let reshaped = self.reshape(id, bounds.moved_to(h, v))?;
        if raised && !reshaped {
            self.paint(id, None);
        }
        debug!(%id, h, v, "window moved");
        Ok(())
    }

    /// Drag a window's frame by the distance from `start` to `end`.
    ///
    /// The frame is kept inside `limit` (the screen below the menu bar when
    /// `None`). The limit's top never rises above the title bar height, and
    /// a limit smaller than the frame is grown to fit it. Returns whether the
    /// window moved. Ordering and activation are left to the caller.
    pub fn drag_window(
        &mut self,
        id: WindowId,
        start: Point,
        end: Point,
        limit: Option<Rect>,
    ) -> WmResult<bool> {
        let frame = self.config.frame;
        let window = self.windows.get(id)?;
        let structure = window.structure_rect(&frame);
        let bounds = window.bounds;
        let (width, height) = (structure.width(), structure.height());

        let mut area = limit.unwrap_or_else(|| self.config.drag_rect());
        area.top = area.top.max(frame.title_bar_height);
        if area.bottom <= area.top || area.height() < height {
            area.bottom = area.top.saturating_add(height);
        }
        if area.right <= area.left || area.width() < width {
            area.right = area.left.saturating_add(width);
        }

        let mut left = structure
            .left
            .saturating_add(end.h.saturating_sub(start.h))
            .max(area.left);
        let mut top = structure
            .top
            .saturating_add(end.v.saturating_sub(start.v))
            .max(area.top);
        if left.saturating_add(width) > area.right {
            left = area.right.saturating_sub(width);
        }
        if top.saturating_add(height) > area.bottom {
            top = area.bottom.saturating_sub(height);
        }

        let dh = left.saturating_sub(structure.left);
        let dv = top.saturating_sub(structure.top);
        if dh == 0 && dv == 0 {
            return Ok(false);
        }
        trace!(%id, dh, dv, ?area, "drag constrained");
        self.move_to(
            id,
            bounds.left.saturating_add(dh),
            bounds.top.saturating_add(dv),
            false,
        )?;
        Ok(true)
    }

    /// Set the content size to `width` x `height`, keeping the top-left
    /// corner. Negative sizes clamp to zero.
    ///
    /// Newly exposed content is added to the update region.
    pub fn resize(&mut self, id: WindowId, width: i16, height: i16) -> WmResult<()> {
        let bounds = self.windows.get(id)?.bounds;
        let resized = Rect::with_size(bounds.top_left(), width.max(0), height.max(0));
        self.reshape(id, resized)?;
        debug!(%id, width, height, "window resized");
        Ok(())
    }

    /// Resize a window by the distance from `start` to `end`, as a drag of
    /// its grow box would.
    ///
    /// The new size is clamped to `limits` (`left`/`top` are the minimum
    /// width and height, `right`/`bottom` the maximum), falling back to the
    /// configured grow limits. Returns the new `(width, height)`, or `None`
    /// when the size did not change.
    pub fn grow_window(
        &mut self,
        id: WindowId,
        start: Point,
        end: Point,
        limits: Option<Rect>,
    ) -> WmResult<Option<(i16, i16)>> {
        let window = self.windows.get(id)?;
        if !window.kind.has_grow_box() {
            return Err(WmError::InvalidOperation {
                op: "grow_window",
                reason: "window has no grow box",
            });
        }
        let bounds = window.bounds;
        let limits = limits.unwrap_or(self.config.grow_limits);

        let width = bounds
            .width()
            .saturating_add(end.h.saturating_sub(start.h))
            .max(limits.left)
            .min(limits.right);
        let height = bounds
            .height()
            .saturating_add(end.v.saturating_sub(start.v))
            .max(limits.top)
            .min(limits.bottom);

        if width == bounds.width() && height == bounds.height() {
            return Ok(None);
        }
        self.resize(id, width, height)?;
        Ok(Some((width, height)))
    }

    /// Toggle between the user state and the standard (zoomed) state.
    ///
    /// `part` is what [`hit_test`](Self::hit_test) reported for the zoom
    /// box: `ZoomIn` zooms to the standard state, `ZoomOut` restores the
    /// user state. `ZoomIn` on a window that is already zoomed restores it
    /// as well. With `front`, the window is also selected.
    pub fn zoom(&mut self, id: WindowId, part: WindowPart, front: bool) -> WmResult<()> {
        let window = self.windows.get(id)?;
        if !window.kind.has_zoom_box() {
            return Err(WmError::InvalidOperation {
                op: "zoom",
                reason: "window has no zoom box",
            });
        }
        let zoom_out = match part {
            WindowPart::ZoomOut => true,
            // The zoom box of a zoomed window toggles back out
            WindowPart::ZoomIn => window.zoomed,
            _ => {
                return Err(WmError::InvalidOperation {
                    op: "zoom",
                    reason: "part is not a zoom box",
                })
            }
        };
        let target = if zoom_out {
            if !window.zoomed {
                return Ok(());
            }
            window.user_state
        } else {
            let user_state = window.bounds;
            self.windows.get_mut(id)?.user_state = user_state;
            self.config.standard_state()
        };

        self.windows.get_mut(id)?.zoomed = !zoom_out;
        self.reshape(id, target)?;
        if front {
            self.select(id)?;
        }
        debug!(%id, ?part, "window zoomed");
        Ok(())
    }

    /// Give the window new bounds and bring its regions in line.
    ///
    /// The update region is offset with the window, extended by any content
    /// that was not on screen before, and clipped to the new content.
    /// Returns false when the bounds were already `bounds`.
    fn reshape(&mut self, id: WindowId, bounds: Rect) -> WmResult<bool> {
        let frame = self.config.frame;
        let window = self.windows.get_mut(id)?;
        let old = window.bounds;
        if old == bounds {
            return Ok(false);
        }
        let old_structure = window.structure_rect(&frame);
        window.bounds = bounds;
        let (visible, structure_rgn, content_rgn, update_rgn) = (
            window.visible,
            window.structure_rgn,
            window.content_rgn,
            window.update_rgn,
        );
        self.sync_regions(id)?;

        let dh = bounds.left.saturating_sub(old.left);
        let dv = bounds.top.saturating_sub(old.top);
        self.regions.offset_region(update_rgn, dh, dv);

        if visible {
            let exposed = AutoRegion::rect_into_new(self.regions.clone(), bounds);
            let previous = AutoRegion::rect_into_new(self.regions.clone(), old.offset(dh, dv));
            if let (Some(exposed), Some(previous)) = (exposed.handle(), previous.handle()) {
                self.regions.diff_region(exposed, previous, exposed);
                self.regions.union_region(update_rgn, exposed, update_rgn);
            }
        }
        self.regions.sect_region(update_rgn, content_rgn, update_rgn);

        if visible {
            let uncovered = AutoRegion::rect_into_new(self.regions.clone(), old_structure);
            if let Some(rgn) = uncovered.handle() {
                self.regions.diff_region(rgn, structure_rgn, rgn);
            }
            self.paint_behind(id, uncovered.handle());
            self.paint(id, None);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use s7_quickdraw::{Point, Rect, RegionHeap, RegionOps};

    use crate::paint::NullPainter;
    use crate::window::{WindowConfig, WindowKind, WindowPart};
    use crate::{WindowManager, WmError};

    fn manager() -> WindowManager<RegionHeap> {
        WindowManager::new(RegionHeap::new(), NullPainter)
    }

    #[test]
    fn test_move_keeps_size_and_offsets_update() {
        let mut wm = manager();
        let id = wm
            .create(WindowConfig {
                bounds: Rect::new(20, 40, 120, 90),
                ..Default::default()
            })
            .unwrap();
        let w = wm.window(id).unwrap();
        let (update, structure) = (w.update_region(), w.structure_region());

        wm.move_to(id, 200, 100, false).unwrap();
        let w = wm.window(id).unwrap();
        assert_eq!(w.bounds(), Rect::new(200, 100, 300, 150));
        assert_eq!(wm.regions().region_bounds(update), Rect::new(200, 100, 300, 150));
        assert_eq!(
            wm.regions().region_bounds(structure),
            Rect::new(199, 80, 301, 151)
        );
    }

    #[test]
    fn test_move_with_bring_front() {
        let mut wm = manager();
        let a = wm.create(WindowConfig::default()).unwrap();
        let b = wm.create(WindowConfig::default()).unwrap();
        wm.move_to(a, 50, 50, true).unwrap();
        assert_eq!(wm.window_ids(), [a, b]);
        assert_eq!(wm.front_window(), Some(a));
    }

    #[test]
    fn test_resize_invalidates_new_area_and_clips() {
        let mut wm = manager();
        let id = wm
            .create(WindowConfig {
                bounds: Rect::new(0, 20, 100, 70),
                ..Default::default()
            })
            .unwrap();
        let update = wm.window(id).unwrap().update_region();
        wm.validate_rect(id, Rect::new(0, 20, 100, 70)).unwrap();
        assert!(wm.regions().is_empty_region(update));

        wm.resize(id, 150, 50).unwrap();
        assert_eq!(wm.window(id).unwrap().bounds(), Rect::new(0, 20, 150, 70));
        assert_eq!(wm.regions().region_bounds(update), Rect::new(100, 20, 150, 70));

        wm.resize(id, 50, 50).unwrap();
        assert_eq!(wm.regions().region_bounds(update), Rect::EMPTY);
    }

    #[test]
    fn test_resize_clamps_negative() {
        let mut wm = manager();
        let id = wm.create(WindowConfig::default()).unwrap();
        wm.resize(id, -10, -5).unwrap();
        let bounds = wm.window(id).unwrap().bounds();
        assert_eq!(bounds.width(), 0);
        assert_eq!(bounds.height(), 0);
    }

    #[test]
    fn test_zoom_round_trip() {
        let mut wm = manager();
        let id = wm
            .create(WindowConfig {
                bounds: Rect::new(30, 50, 230, 150),
                kind: WindowKind::ZoomDocument,
                ..Default::default()
            })
            .unwrap();

        wm.zoom(id, WindowPart::ZoomIn, true).unwrap();
        let w = wm.window(id).unwrap();
        assert!(w.is_zoomed());
        assert!(w.is_hilited());
        assert_eq!(w.bounds(), wm.config().standard_state());
        assert_eq!(w.user_state(), Rect::new(30, 50, 230, 150));

        wm.zoom(id, WindowPart::ZoomOut, false).unwrap();
        let w = wm.window(id).unwrap();
        assert!(!w.is_zoomed());
        assert_eq!(w.bounds(), Rect::new(30, 50, 230, 150));
    }

    #[test]
    fn test_zoom_rejects_plain_document() {
        let mut wm = manager();
        let id = wm.create(WindowConfig::default()).unwrap();
        assert!(matches!(
            wm.zoom(id, WindowPart::ZoomIn, false),
            Err(WmError::InvalidOperation { op: "zoom", .. })
        ));
    }

    #[test]
    fn test_zoom_rejects_non_zoom_part() {
        let mut wm = manager();
        let id = wm
            .create(WindowConfig {
                kind: WindowKind::ZoomNoGrow,
                ..Default::default()
            })
            .unwrap();
        assert!(wm.zoom(id, WindowPart::Content, false).is_err());
        // Zooming out of the user state does nothing
        wm.zoom(id, WindowPart::ZoomOut, false).unwrap();
        assert_eq!(wm.window(id).unwrap().bounds(), Rect::new(0, 0, 200, 100));
    }

    #[test]
    fn test_zoom_in_on_zoomed_window_restores_user_state() {
        let mut wm = manager();
        let id = wm
            .create(WindowConfig {
                bounds: Rect::new(30, 50, 230, 150),
                kind: WindowKind::ZoomDocument,
                ..Default::default()
            })
            .unwrap();
        wm.zoom(id, WindowPart::ZoomIn, false).unwrap();
        wm.zoom(id, WindowPart::ZoomIn, false).unwrap();
        let w = wm.window(id).unwrap();
        assert!(!w.is_zoomed());
        assert_eq!(w.bounds(), Rect::new(30, 50, 230, 150));
    }

    #[test]
    fn test_drag_moves_by_mouse_delta() {
        let mut wm = manager();
        let id = wm
            .create(WindowConfig {
                bounds: Rect::new(100, 100, 200, 160),
                ..Default::default()
            })
            .unwrap();
        let moved = wm
            .drag_window(id, Point::new(150, 90), Point::new(180, 140), None)
            .unwrap();
        assert!(moved);
        assert_eq!(wm.window(id).unwrap().bounds(), Rect::new(130, 150, 230, 210));

        // No movement, no change
        assert!(!wm
            .drag_window(id, Point::new(5, 5), Point::new(5, 5), None)
            .unwrap());
    }

    #[test]
    fn test_drag_keeps_title_bar_below_menu_bar() {
        let mut wm = manager();
        let id = wm
            .create(WindowConfig {
                bounds: Rect::new(100, 100, 200, 160),
                ..Default::default()
            })
            .unwrap();
        // Structure is (99, 80, 201, 161); dragging far up-left pins it
        wm.drag_window(id, Point::new(150, 90), Point::new(-500, -500), None)
            .unwrap();
        let w = wm.window(id).unwrap();
        let structure = w.structure_rect(&wm.config().frame);
        assert_eq!(structure.left, 0);
        assert_eq!(structure.top, 20);
        assert_eq!(w.bounds(), Rect::new(1, 40, 101, 100));

        // And the bottom-right corner of the screen
        wm.drag_window(id, Point::new(0, 0), Point::new(2000, 2000), None)
            .unwrap();
        let structure = wm.window(id).unwrap().structure_rect(&wm.config().frame);
        assert_eq!(structure.right, 800);
        assert_eq!(structure.bottom, 600);
    }

    #[test]
    fn test_drag_grows_degenerate_limit() {
        let mut wm = manager();
        let id = wm
            .create(WindowConfig {
                bounds: Rect::new(100, 100, 200, 160),
                ..Default::default()
            })
            .unwrap();
        // Too small for the 102x81 frame and above the title bar line
        let limit = Rect::new(300, 0, 310, 5);
        wm.drag_window(id, Point::new(0, 0), Point::new(0, 0), Some(limit))
            .unwrap();
        let structure = wm.window(id).unwrap().structure_rect(&wm.config().frame);
        assert_eq!(structure, Rect::new(300, 20, 402, 101));
    }

    #[test]
    fn test_grow_clamps_to_limits() {
        let mut wm = manager();
        let id = wm
            .create(WindowConfig {
                bounds: Rect::new(0, 20, 200, 120),
                ..Default::default()
            })
            .unwrap();

        let size = wm
            .grow_window(id, Point::new(190, 110), Point::new(240, 90), None)
            .unwrap();
        assert_eq!(size, Some((250, 80)));
        assert_eq!(wm.window(id).unwrap().bounds(), Rect::new(0, 20, 250, 100));

        // Below the default minimum of 80 x 60
        let size = wm
            .grow_window(id, Point::new(0, 0), Point::new(-500, -500), None)
            .unwrap();
        assert_eq!(size, Some((80, 60)));

        let limits = Rect::new(10, 10, 100, 70);
        let size = wm
            .grow_window(id, Point::new(0, 0), Point::new(500, 500), Some(limits))
            .unwrap();
        assert_eq!(size, Some((100, 70)));

        // Pinned at the maximum already
        let size = wm
            .grow_window(id, Point::new(0, 0), Point::new(5, 5), Some(limits))
            .unwrap();
        assert_eq!(size, None);
    }

    #[test]
    fn test_grow_requires_grow_box() {
        let mut wm = manager();
        let id = wm
            .create(WindowConfig {
                kind: WindowKind::NoGrowDocument,
                ..Default::default()
            })
            .unwrap();
        assert!(matches!(
            wm.grow_window(id, Point::new(0, 0), Point::new(10, 10), None),
            Err(WmError::InvalidOperation { op: "grow_window", .. })
        ));
    }
}
