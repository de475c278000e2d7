//! Modal and floating windows
//!
//! Every window sits in a [`WindowLayer`]. The list keeps modal windows in
//! front of floating ones and floating ones in front of normal windows;
//! the ordering operations only move a window inside its own layer.

use alloc::vec::Vec;

use s7_quickdraw::RegionOps;
use tracing::debug;

use super::WindowManager;
use crate::error::WmResult;
use crate::paint::Painter;
use crate::window::{WindowId, WindowLayer};

impl<R: RegionOps + Clone, P: Painter> WindowManager<R, P> {
    /// Make `id` the modal window: it moves in front of every other window
    /// and becomes the active window. Any previous modal window returns to
    /// the normal layer.
    pub fn set_modal(&mut self, id: WindowId) -> WmResult<()> {
        self.windows.get(id)?;
        if self.modal != Some(id) {
            self.clear_modal()?;
        }
        self.set_layer(id, WindowLayer::Modal)?;
        self.modal = Some(id);
        self.select(id)?;
        debug!(%id, "modal window set");
        Ok(())
    }

    /// Return the modal window, if any, to the normal layer.
    pub fn clear_modal(&mut self) -> WmResult<()> {
        if let Some(id) = self.modal.take() {
            self.set_layer(id, WindowLayer::Normal)?;
            debug!(%id, "modal window cleared");
        }
        Ok(())
    }

    pub fn modal_window(&self) -> Option<WindowId> {
        self.modal
    }

    /// Move a window into the floating layer, above all normal windows.
    pub fn add_floating(&mut self, id: WindowId) -> WmResult<()> {
        self.windows.get(id)?;
        if self.modal == Some(id) {
            self.modal = None;
        }
        self.set_layer(id, WindowLayer::Floating)
    }

    /// Return a floating window to the normal layer. Other windows are left
    /// alone.
    pub fn remove_floating(&mut self, id: WindowId) -> WmResult<()> {
        if self.windows.get(id)?.layer == WindowLayer::Floating {
            self.set_layer(id, WindowLayer::Normal)?;
        }
        Ok(())
    }

    /// Whether a window accepts user interaction. With a modal window up,
    /// every other window is disabled.
    pub fn is_enabled(&self, id: WindowId) -> WmResult<bool> {
        self.windows.get(id)?;
        Ok(self.modal.map_or(true, |modal| modal == id))
    }

    /// Put `id` at the front of `layer` and restack.
    ///
    /// A promoted window is repainted if it moved. A demoted window has the
    /// windows that passed it repainted, and hands activation on if it lost
    /// front status.
    fn set_layer(&mut self, id: WindowId, layer: WindowLayer) -> WmResult<()> {
        let window = self.windows.get_mut(id)?;
        let previous = window.layer;
        if previous == layer {
            return Ok(());
        }
        window.layer = layer;

        let before = self.windows.predecessor(id);
        let was_behind: Vec<WindowId> = self.windows.iter_behind(id).map(|w| w.id).collect();
        self.windows.link_front(id)?;
        self.windows.restack();
        self.recompute_front();
        debug!(%id, ?previous, ?layer, "window layer changed");

        if self.windows.predecessor(id) == before {
            return Ok(());
        }
        if layer > previous {
            self.paint(id, None);
        } else {
            self.paint_overtaking(id, &was_behind);
            self.transfer_activation(id);
        }
        Ok(())
    }
}
