use s7_quickdraw::RegionOps;
use tracing::debug;

use super::WindowManager;
use crate::error::WmResult;
use crate::paint::Painter;
use crate::window::WindowId;

impl<R: RegionOps + Clone, P: Painter> WindowManager<R, P> {
    /// Make a window visible, move it to the front of its layer and paint
    /// it.
    ///
    /// The whole content is invalidated so the owner receives an update.
    /// Does not change activation; use [`select`](Self::select) for that.
    pub fn show(&mut self, id: WindowId) -> WmResult<()> {
        let window = self.windows.get_mut(id)?;
        if window.visible {
            return Ok(());
        }
        window.visible = true;

        self.windows.link_front(id)?;
        self.windows.restack();
        self.sync_regions(id)?;
        self.recompute_front();

        let window = self.windows.get(id)?;
        self.regions
            .union_region(window.update_rgn, window.content_rgn, window.update_rgn);

        debug!(%id, "window shown");
        self.paint(id, None);
        Ok(())
    }

    /// Make a window invisible and repaint whatever it was covering.
    ///
    /// If the window was active, the new front window becomes active.
    pub fn hide(&mut self, id: WindowId) -> WmResult<()> {
        let window = self.windows.get_mut(id)?;
        if !window.visible {
            return Ok(());
        }
        window.visible = false;
        let structure_rgn = window.structure_rgn;

        let clobbered = self.scratch_copy(structure_rgn);
        self.recompute_front();
        self.paint_behind(id, clobbered.handle());
        self.transfer_activation(id);

        debug!(%id, front = ?self.front, "window hidden");
        Ok(())
    }

    /// `show` or `hide` depending on `visible`.
    pub fn show_hide(&mut self, id: WindowId, visible: bool) -> WmResult<()> {
        if visible {
            self.show(id)
        } else {
            self.hide(id)
        }
    }

    /// Set the highlight flag directly. Queues no events and leaves other
    /// windows alone.
    pub fn hilite(&mut self, id: WindowId, on: bool) -> WmResult<()> {
        let window = self.windows.get_mut(id)?;
        if window.hilited != on {
            window.hilited = on;
            self.paint(id, None);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use s7_quickdraw::{Rect, RegionHeap, RegionOps};

    use crate::manager::WindowEvent;
    use crate::paint::NullPainter;
    use crate::window::WindowConfig;
    use crate::WindowManager;

    fn manager() -> WindowManager<RegionHeap> {
        let mut wm = WindowManager::new(RegionHeap::new(), NullPainter);
        wm.init().unwrap();
        wm
    }

    fn config(bounds: Rect, visible: bool) -> WindowConfig {
        WindowConfig {
            bounds,
            visible,
            ..Default::default()
        }
    }

    #[test]
    fn test_show_invalidates_content() {
        let mut wm = manager();
        let id = wm.create(config(Rect::new(10, 30, 110, 80), false)).unwrap();
        let update = wm.window(id).unwrap().update_region();
        assert!(wm.regions().is_empty_region(update));

        wm.show(id).unwrap();
        assert_eq!(
            wm.regions().region_bounds(update),
            Rect::new(10, 30, 110, 80)
        );
    }

    #[test]
    fn test_show_moves_to_front() {
        let mut wm = manager();
        let a = wm.create(config(Rect::new(10, 30, 110, 80), false)).unwrap();
        let b = wm.create(config(Rect::new(20, 40, 120, 90), true)).unwrap();
        assert_eq!(wm.window_ids(), [b, a]);

        wm.show(a).unwrap();
        assert_eq!(wm.window_ids(), [a, b]);
        assert_eq!(wm.front_window(), Some(a));
    }

    #[test]
    fn test_hide_recomputes_front_and_activation() {
        let mut wm = manager();
        let a = wm.create(config(Rect::new(10, 30, 110, 80), true)).unwrap();
        let b = wm.create(config(Rect::new(20, 40, 120, 90), true)).unwrap();
        wm.select(b).unwrap();
        while wm.poll_event().is_some() {}

        wm.hide(b).unwrap();
        assert_eq!(wm.front_window(), Some(a));
        assert!(!wm.window(b).unwrap().is_hilited());
        assert!(wm.window(a).unwrap().is_hilited());
        assert_eq!(wm.poll_event(), Some(WindowEvent::Deactivate(b)));
        assert_eq!(wm.poll_event(), Some(WindowEvent::Activate(a)));
        assert_eq!(wm.poll_event(), None);
    }

    #[test]
    fn test_hide_and_show_are_idempotent() {
        let mut wm = manager();
        let a = wm.create(config(Rect::new(10, 30, 110, 80), true)).unwrap();
        wm.show(a).unwrap();
        wm.hide(a).unwrap();
        wm.hide(a).unwrap();
        assert_eq!(wm.front_window(), None);
        wm.show_hide(a, true).unwrap();
        assert_eq!(wm.front_window(), Some(a));
    }

    #[test]
    fn test_hilite_sets_flag_only() {
        let mut wm = manager();
        let a = wm.create(config(Rect::new(10, 30, 110, 80), true)).unwrap();
        wm.hilite(a, true).unwrap();
        assert!(wm.window(a).unwrap().is_hilited());
        assert_eq!(wm.poll_event(), None);
        wm.hilite(a, false).unwrap();
        assert!(!wm.window(a).unwrap().is_hilited());
    }
}
