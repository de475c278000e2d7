use s7_quickdraw::Rect;

use super::{WindowId, WindowKind};
use crate::title::Str255;

/// Parameters for creating a window
#[derive(Clone, Debug)]
pub struct WindowConfig {
    /// Content rectangle in global coordinates
    pub bounds: Rect,
    pub title: Str255,
    /// Show the window as part of creation
    pub visible: bool,
    pub kind: WindowKind,
    /// Requested stacking position. Accepted for compatibility; new windows
    /// are always linked frontmost.
    pub behind: Option<WindowId>,
    pub has_close_box: bool,
    /// Opaque value for the caller
    pub ref_con: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            bounds: Rect::new(0, 0, 200, 100),
            title: Str255::empty(),
            visible: true,
            kind: WindowKind::Document,
            behind: None,
            has_close_box: true,
            ref_con: 0,
        }
    }
}
