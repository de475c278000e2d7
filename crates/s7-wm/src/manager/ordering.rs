use alloc::vec::Vec;

use s7_quickdraw::RegionOps;
use tracing::debug;

use super::WindowManager;
use crate::error::{WmError, WmResult};
use crate::paint::Painter;
use crate::window::WindowId;

impl<R: RegionOps + Clone, P: Painter> WindowManager<R, P> {
    /// Relink at the front of the window's layer. Returns false if the
    /// window did not move.
    pub(crate) fn raise(&mut self, id: WindowId) -> WmResult<bool> {
        self.windows.get(id)?;
        if self.windows.head() == Some(id) || self.front == Some(id) {
            return Ok(false);
        }
        let before = self.windows.predecessor(id);
        self.windows.link_front(id)?;
        self.windows.restack();
        self.recompute_front();
        Ok(self.windows.predecessor(id) != before)
    }

    /// Move a window to the front of the list and repaint it if visible.
    /// Activation is unchanged.
    pub fn bring_to_front(&mut self, id: WindowId) -> WmResult<()> {
        if self.raise(id)? {
            debug!(%id, "brought to front");
            self.paint(id, None);
        }
        Ok(())
    }

    /// Bring a window to the front and make it the only active window.
    ///
    /// While a modal window is up, only the modal window can be selected.
    pub fn select(&mut self, id: WindowId) -> WmResult<()> {
        self.windows.get(id)?;
        if self.modal.is_some_and(|modal| modal != id) {
            return Err(WmError::InvalidOperation {
                op: "select",
                reason: "a modal window is active",
            });
        }
        self.bring_to_front(id)?;

        let others: Vec<WindowId> = self
            .windows
            .iter()
            .filter(|w| w.hilited && w.id != id)
            .map(|w| w.id)
            .collect();
        for other in others {
            self.deactivate(other);
        }
        self.activate(id);
        debug!(%id, "window selected");
        Ok(())
    }

    /// Move a window behind `behind`, or to the back of the list when
    /// `behind` is `None`.
    ///
    /// Windows that end up in front of it and overlap it are repainted, and
    /// if it was the active front window the new front window takes over.
    pub fn send_behind(&mut self, id: WindowId, behind: Option<WindowId>) -> WmResult<()> {
        self.windows.get(id)?;
        if let Some(behind) = behind {
            self.windows.get(behind)?;
            if behind == id {
                return Ok(());
            }
        }

        let was_behind: Vec<WindowId> = self.windows.iter_behind(id).map(|w| w.id).collect();
        match behind {
            Some(behind) => self.windows.link_after(id, behind)?,
            None => self.windows.link_back(id)?,
        }
        self.windows.restack();
        self.recompute_front();
        self.paint_overtaking(id, &was_behind);

        self.transfer_activation(id);
        debug!(%id, ?behind, "sent behind");
        Ok(())
    }

    /// Repaint the windows from `was_behind` that now sit in front of `id`
    /// and overlap it.
    pub(crate) fn paint_overtaking(&mut self, id: WindowId, was_behind: &[WindowId]) {
        let Ok(window) = self.windows.get(id) else {
            return;
        };
        if !window.visible {
            return;
        }
        let exposed = self.scratch_copy(window.structure_rgn);
        let frame = self.config.frame;
        for window in self.windows.iter() {
            if window.id == id {
                break;
            }
            let uncovered = was_behind.contains(&window.id)
                && window.visible
                && exposed.handle().map_or(true, |rgn| {
                    self.regions
                        .rect_in_region(&window.structure_rect(&frame), rgn)
                });
            if uncovered {
                self.painter.paint_one(window, exposed.handle());
            }
        }
    }
}
