use s7_quickdraw::{Point, RegionOps};
use tracing::trace;

use super::WindowManager;
use crate::paint::Painter;
use crate::window::{WindowId, WindowPart};

impl<R: RegionOps + Clone, P: Painter> WindowManager<R, P> {
    /// `FindWindow`: which window, and which part of it, lies under `pt`.
    ///
    /// Windows are scanned front to back and the first visible one whose
    /// frame contains the point wins. Returns `(Desk, None)` when nothing
    /// matches or the manager is not initialized.
    pub fn hit_test(&self, pt: Point) -> (WindowPart, Option<WindowId>) {
        if self.port.is_none() {
            return (WindowPart::Desk, None);
        }
        if self.config.menu_bar_height > 0 && pt.v < self.config.menu_bar_height {
            return (WindowPart::MenuBar, None);
        }

        let frame = self.config.frame;
        for window in self.windows.iter().filter(|w| w.visible) {
            if let Some(part) = window.part_at(pt, &frame) {
                trace!(h = pt.h, v = pt.v, id = %window.id, ?part, "hit");
                return (part, Some(window.id));
            }
        }
        (WindowPart::Desk, None)
    }

    /// The frontmost visible window under `pt`.
    pub fn find_window_at(&self, pt: Point) -> Option<WindowId> {
        self.hit_test(pt).1
    }
}

#[cfg(test)]
mod tests {
    use s7_quickdraw::{Point, Rect, RegionHeap};

    use crate::config::ManagerConfig;
    use crate::paint::NullPainter;
    use crate::window::{WindowConfig, WindowKind, WindowPart};
    use crate::WindowManager;

    #[test]
    fn test_uninitialized_is_desk() {
        let wm = WindowManager::new(RegionHeap::new(), NullPainter);
        assert_eq!(wm.hit_test(Point::new(10, 10)), (WindowPart::Desk, None));
    }

    #[test]
    fn test_parts() {
        let mut wm = WindowManager::new(RegionHeap::new(), NullPainter);
        let id = wm
            .create(WindowConfig {
                bounds: Rect::new(20, 40, 220, 140),
                kind: WindowKind::ZoomDocument,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(wm.hit_test(Point::new(30, 30)), (WindowPart::GoAway, Some(id)));
        assert_eq!(wm.hit_test(Point::new(205, 30)), (WindowPart::ZoomIn, Some(id)));
        assert_eq!(wm.hit_test(Point::new(120, 30)), (WindowPart::Drag, Some(id)));
        assert_eq!(wm.hit_test(Point::new(120, 90)), (WindowPart::Content, Some(id)));
        assert_eq!(wm.hit_test(Point::new(215, 135)), (WindowPart::Grow, Some(id)));
        assert_eq!(wm.hit_test(Point::new(400, 400)), (WindowPart::Desk, None));
    }

    #[test]
    fn test_hidden_windows_are_skipped() {
        let mut wm = WindowManager::new(RegionHeap::new(), NullPainter);
        let back = wm.create(WindowConfig::default()).unwrap();
        let front = wm.create(WindowConfig::default()).unwrap();
        let pt = Point::new(50, 50);
        assert_eq!(wm.find_window_at(pt), Some(front));

        wm.hide(front).unwrap();
        assert_eq!(wm.find_window_at(pt), Some(back));
    }

    #[test]
    fn test_menu_bar_band() {
        let config = ManagerConfig {
            menu_bar_height: 20,
            ..Default::default()
        };
        let mut wm = WindowManager::with_config(config, RegionHeap::new(), NullPainter);
        wm.init().unwrap();
        assert_eq!(wm.hit_test(Point::new(5, 5)), (WindowPart::MenuBar, None));
        assert_eq!(wm.hit_test(Point::new(5, 25)), (WindowPart::Desk, None));
    }
}
