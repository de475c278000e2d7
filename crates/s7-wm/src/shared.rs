//! Lock-protected window manager
//!
//! The manager itself is single-owner. A kernel that can reach it from more
//! than one context (the event loop and an interrupt handler, say) keeps it
//! in a `SharedWindowManager` and goes through the lock for every call.

use s7_quickdraw::RegionOps;
use spin::Mutex;
use tracing::warn;

use crate::manager::WindowManager;
use crate::paint::Painter;

pub struct SharedWindowManager<R: RegionOps + Clone, P: Painter> {
    inner: Mutex<WindowManager<R, P>>,
}

impl<R: RegionOps + Clone, P: Painter> SharedWindowManager<R, P> {
    pub fn new(manager: WindowManager<R, P>) -> Self {
        Self {
            inner: Mutex::new(manager),
        }
    }

    /// Run `f` with exclusive access, spinning until the lock is free.
    pub fn with<T>(&self, f: impl FnOnce(&mut WindowManager<R, P>) -> T) -> T {
        f(&mut self.inner.lock())
    }

    /// Run `f` only if nobody else holds the manager. Returns `None` on
    /// contention, which is what a re-entrant call from the same context
    /// sees.
    pub fn try_with<T>(&self, f: impl FnOnce(&mut WindowManager<R, P>) -> T) -> Option<T> {
        match self.inner.try_lock() {
            Some(mut guard) => Some(f(&mut guard)),
            None => {
                warn!("window manager busy; re-entrant call refused");
                None
            }
        }
    }

    pub fn into_inner(self) -> WindowManager<R, P> {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use s7_quickdraw::{Point, Rect, RegionHeap};
    use spin::Lazy;

    use super::*;
    use crate::paint::NullPainter;
    use crate::window::{WindowConfig, WindowPart};

    static DESKTOP: Lazy<SharedWindowManager<RegionHeap, NullPainter>> =
        Lazy::new(|| SharedWindowManager::new(WindowManager::new(RegionHeap::new(), NullPainter)));

    #[test]
    fn test_with_runs_operations() {
        let shared = SharedWindowManager::new(WindowManager::new(RegionHeap::new(), NullPainter));
        let id = shared
            .with(|wm| wm.create(WindowConfig::default()))
            .unwrap();
        assert_eq!(shared.with(|wm| wm.front_window()), Some(id));

        let wm = shared.into_inner();
        assert_eq!(wm.window_count(), 1);
    }

    #[test]
    fn test_reentrant_call_is_refused() {
        let shared = SharedWindowManager::new(WindowManager::new(RegionHeap::new(), NullPainter));
        let nested = shared.with(|_| shared.try_with(|wm| wm.front_window()));
        assert_eq!(nested, None);
        assert_eq!(shared.try_with(|wm| wm.window_count()), Some(0));
    }

    #[test]
    fn test_kernel_static() {
        let id = DESKTOP
            .with(|wm| {
                wm.create(WindowConfig {
                    bounds: Rect::new(300, 300, 400, 400),
                    ..Default::default()
                })
            })
            .unwrap();
        let hit = DESKTOP.with(|wm| wm.hit_test(Point::new(350, 350)));
        assert_eq!(hit, (WindowPart::Content, Some(id)));
        DESKTOP.with(|wm| wm.dispose(id)).unwrap();
    }
}
