//! Repaint collaborator
//!
//! The manager never draws. Whenever a window's on-screen appearance may
//! have changed it calls [`Painter::paint_one`] and leaves the pixels to the
//! implementation.

use s7_quickdraw::RgnHandle;

use crate::window::Window;

pub trait Painter {
    /// Draw `window`'s frame and request its content be redrawn.
    ///
    /// `clobbered` is the area that was uncovered when the call comes from
    /// hiding, moving or restacking another window. Painters may restrict
    /// drawing to it. `None` means the whole window.
    fn paint_one(&mut self, window: &Window, clobbered: Option<RgnHandle>);
}

impl<P: Painter + ?Sized> Painter for &mut P {
    fn paint_one(&mut self, window: &Window, clobbered: Option<RgnHandle>) {
        (**self).paint_one(window, clobbered)
    }
}

/// Painter that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPainter;

impl Painter for NullPainter {
    fn paint_one(&mut self, _window: &Window, _clobbered: Option<RgnHandle>) {}
}
