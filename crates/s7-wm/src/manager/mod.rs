//! The window manager context
//!
//! `WindowManager` owns every piece of window state: the window list, the
//! cached front window, the manager port, the region allocator and the
//! painter. It is constructed explicitly by the kernel and passed wherever
//! window operations happen.
//!
//! Operations are grouped by concern:
//! - lifecycle (this module): `init`, `create`, `dispose`, titles
//! - `visibility`: show, hide, hilite
//! - `ordering`: bring to front, select, send behind
//! - `geometry`: move, resize, zoom, drag and grow
//! - `layers`: modal and floating windows
//! - `hit_test`: `FindWindow`
//! - `update`: invalidation and the update bracket

mod geometry;
mod hit_test;
mod layers;
mod ordering;
mod update;
mod visibility;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use s7_quickdraw::{RegionOps, RgnHandle};
use tracing::{debug, trace, warn};

use crate::auto_region::AutoRegion;
use crate::config::ManagerConfig;
use crate::error::{WmError, WmResult};
use crate::paint::{NullPainter, Painter};
use crate::port::ManagerPort;
use crate::title::Str255;
use crate::window::{ClipSource, Window, WindowConfig, WindowId, WindowLayer, WindowList};

/// Activation changes, queued for the event loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    Activate(WindowId),
    Deactivate(WindowId),
}

/// Window manager state.
///
/// Not re-entrant: every mutation takes `&mut self`. Wrap it in a
/// [`SharedWindowManager`](crate::SharedWindowManager) to reach it from
/// more than one context.
pub struct WindowManager<R: RegionOps + Clone, P: Painter = NullPainter> {
    pub(crate) config: ManagerConfig,
    pub(crate) regions: R,
    pub(crate) painter: P,
    pub(crate) windows: WindowList,
    /// First visible window from the head of the list
    pub(crate) front: Option<WindowId>,
    pub(crate) modal: Option<WindowId>,
    /// Present once `init` has run
    pub(crate) port: Option<ManagerPort<R>>,
    pub(crate) events: VecDeque<WindowEvent>,
}

impl<R: RegionOps + Clone, P: Painter> WindowManager<R, P> {
    pub fn new(regions: R, painter: P) -> Self {
        Self::with_config(ManagerConfig::default(), regions, painter)
    }

    pub fn with_config(config: ManagerConfig, regions: R, painter: P) -> Self {
        Self {
            config,
            regions,
            painter,
            windows: WindowList::new(),
            front: None,
            modal: None,
            port: None,
            events: VecDeque::new(),
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Allocate the manager port. Calls after the first are no-ops.
    pub fn init(&mut self) -> WmResult<()> {
        if self.port.is_some() {
            return Ok(());
        }
        let port = ManagerPort::new(self.regions.clone(), self.config.screen_rect())?;
        self.port = Some(port);
        self.front = None;
        debug!("window manager initialized");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.port.is_some()
    }

    /// Create a window, link it frontmost and show it if requested.
    ///
    /// Fails without side effects when the window limit is reached or any of
    /// the window's three regions cannot be allocated.
    pub fn create(&mut self, config: WindowConfig) -> WmResult<WindowId> {
        self.init()?;

        if self.windows.len() >= self.config.max_windows {
            warn!(limit = self.config.max_windows, "window limit reached");
            return Err(WmError::TooManyWindows {
                limit: self.config.max_windows,
            });
        }

        let mut structure = AutoRegion::new_owned(self.regions.clone());
        let mut content = AutoRegion::new_owned(self.regions.clone());
        let mut update = AutoRegion::new_owned(self.regions.clone());
        let (Some(structure_rgn), Some(content_rgn), Some(update_rgn)) =
            (structure.handle(), content.handle(), update.handle())
        else {
            warn!("out of regions creating window");
            return Err(WmError::OutOfRegions);
        };
        // The window owns its regions from here on
        structure.release_ownership();
        content.release_ownership();
        update.release_ownership();

        if let Some(behind) = config.behind {
            trace!(%behind, "insert-behind hint ignored; linking frontmost");
        }

        let bounds = config.bounds;
        let id = self.windows.insert_with(|id| Window {
            id,
            bounds,
            kind: config.kind,
            layer: WindowLayer::Normal,
            visible: false,
            hilited: false,
            has_close_box: config.has_close_box,
            zoomed: false,
            user_state: bounds,
            ref_con: config.ref_con,
            title: (!config.title.is_empty()).then_some(config.title),
            structure_rgn,
            content_rgn,
            update_rgn,
            clip: ClipSource::Content,
            in_update: false,
            next: None,
        });
        self.sync_regions(id)?;
        self.windows.link_front(id)?;
        self.windows.restack();
        self.recompute_front();
        debug!(%id, ?bounds, kind = ?config.kind, "window created");

        if config.visible {
            self.show(id)?;
        }
        Ok(id)
    }

    /// Hide, unlink and destroy a window, releasing its title and regions.
    ///
    /// The id is dead afterwards; using it again yields
    /// [`WmError::StaleWindow`].
    pub fn dispose(&mut self, id: WindowId) -> WmResult<()> {
        self.windows.get(id)?;
        self.hide(id)?;

        if self.modal == Some(id) {
            self.modal = None;
        }
        let mut window = self.windows.remove(id)?;
        window.title = None;
        self.release_regions(&window);
        self.events.retain(|event| match event {
            WindowEvent::Activate(w) | WindowEvent::Deactivate(w) => *w != id,
        });
        self.recompute_front();
        debug!(%id, "window disposed");
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The frontmost visible window.
    pub fn front_window(&self) -> Option<WindowId> {
        self.front
    }

    pub fn window(&self, id: WindowId) -> WmResult<&Window> {
        self.windows.get(id)
    }

    /// All windows, front to back.
    pub fn windows(&self) -> impl Iterator<Item = &Window> + '_ {
        self.windows.iter()
    }

    pub fn window_ids(&self) -> Vec<WindowId> {
        self.windows.ids()
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// The first visible window behind `id`.
    pub fn next_visible(&self, id: WindowId) -> WmResult<Option<WindowId>> {
        self.windows.get(id)?;
        Ok(self
            .windows
            .iter_behind(id)
            .find(|w| w.visible)
            .map(|w| w.id))
    }

    /// The window directly in front of `id`, visible or not.
    pub fn previous_window(&self, id: WindowId) -> WmResult<Option<WindowId>> {
        self.windows.get(id)?;
        Ok(self.windows.predecessor(id))
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn regions(&self) -> &R {
        &self.regions
    }

    pub fn painter(&self) -> &P {
        &self.painter
    }

    pub fn painter_mut(&mut self) -> &mut P {
        &mut self.painter
    }

    /// `GetWMgrPort`. `None` before `init`.
    pub fn port(&self) -> Option<&ManagerPort<R>> {
        self.port.as_ref()
    }

    /// Next queued activation event.
    pub fn poll_event(&mut self) -> Option<WindowEvent> {
        self.events.pop_front()
    }

    // ========================================================================
    // Titles and reference values
    // ========================================================================

    pub fn set_title(&mut self, id: WindowId, title: Str255) -> WmResult<()> {
        let window = self.windows.get_mut(id)?;
        window.title = None;
        if !title.is_empty() {
            window.title = Some(title);
        }
        trace!(%id, "title set");
        Ok(())
    }

    /// The window's title, empty if it has none.
    pub fn title(&self, id: WindowId) -> WmResult<Str255> {
        Ok(self.windows.get(id)?.title.clone().unwrap_or_default())
    }

    pub fn set_ref_con(&mut self, id: WindowId, ref_con: i32) -> WmResult<()> {
        self.windows.get_mut(id)?.ref_con = ref_con;
        Ok(())
    }

    pub fn ref_con(&self, id: WindowId) -> WmResult<i32> {
        Ok(self.windows.get(id)?.ref_con)
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// Front is the first visible window scanning from the head.
    pub(crate) fn recompute_front(&mut self) {
        self.front = self.windows.iter().find(|w| w.visible).map(|w| w.id);
    }

    /// Reset the structure and content regions to the window's bounds.
    pub(crate) fn sync_regions(&mut self, id: WindowId) -> WmResult<()> {
        let window = self.windows.get(id)?;
        let structure = window.structure_rect(&self.config.frame);
        self.regions
            .set_rect_region(window.structure_rgn, structure);
        self.regions.set_rect_region(window.content_rgn, window.bounds);
        Ok(())
    }

    pub(crate) fn paint(&mut self, id: WindowId, clobbered: Option<RgnHandle>) {
        if let Ok(window) = self.windows.get(id) {
            if window.visible {
                trace!(%id, "paint");
                self.painter.paint_one(window, clobbered);
            }
        }
    }

    /// Repaint visible windows behind `id` whose frames touch `clobbered`.
    /// A null `clobbered` repaints all of them.
    pub(crate) fn paint_behind(&mut self, id: WindowId, clobbered: Option<RgnHandle>) {
        let frame = self.config.frame;
        for window in self.windows.iter_behind(id) {
            if !window.visible {
                continue;
            }
            let touched = clobbered.map_or(true, |rgn| {
                self.regions
                    .rect_in_region(&window.structure_rect(&frame), rgn)
            });
            if touched {
                trace!(id = %window.id, "paint behind");
                self.painter.paint_one(window, clobbered);
            }
        }
    }

    /// Move the hilite to the front window if `from` lost front status.
    pub(crate) fn transfer_activation(&mut self, from: WindowId) {
        if self.front == Some(from) {
            return;
        }
        if let Ok(window) = self.windows.get_mut(from) {
            if window.hilited {
                window.hilited = false;
                self.events.push_back(WindowEvent::Deactivate(from));
                if let Some(front) = self.front {
                    self.activate(front);
                }
            }
        }
    }

    pub(crate) fn activate(&mut self, id: WindowId) {
        if let Ok(window) = self.windows.get_mut(id) {
            if !window.hilited {
                window.hilited = true;
                self.events.push_back(WindowEvent::Activate(id));
            }
        }
    }

    pub(crate) fn deactivate(&mut self, id: WindowId) {
        if let Ok(window) = self.windows.get_mut(id) {
            if window.hilited {
                window.hilited = false;
                self.events.push_back(WindowEvent::Deactivate(id));
            }
        }
    }

    /// A scoped copy of a region, owned by the caller.
    pub(crate) fn scratch_copy(&self, src: RgnHandle) -> AutoRegion<R> {
        AutoRegion::copy_into_new(self.regions.clone(), src)
    }

    fn release_regions(&self, window: &Window) {
        for rgn in [window.structure_rgn, window.content_rgn, window.update_rgn] {
            self.regions.dispose_region(rgn);
        }
    }
}

impl<R: RegionOps + Clone, P: Painter> Drop for WindowManager<R, P> {
    fn drop(&mut self) {
        for window in self.windows.iter() {
            self.release_regions(window);
        }
    }
}
