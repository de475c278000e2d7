use serde::{Deserialize, Serialize};

/// Result of hit-testing a point, as reported by `FindWindow`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowPart {
    /// No window under the point
    Desk,
    /// Menu bar band at the top of the screen
    MenuBar,
    /// Title bar or frame; dragging moves the window
    Drag,
    /// Drawable interior
    Content,
    /// Close box
    GoAway,
    /// Grow box in the bottom-right corner
    Grow,
    /// Zoom box of a window in its user state
    ZoomIn,
    /// Zoom box of a window in its standard (zoomed) state
    ZoomOut,
}

impl WindowPart {
    /// Toolbox part code (`inDesk`, `inMenuBar`, ...).
    pub fn code(self) -> i16 {
        match self {
            Self::Desk => 0,
            Self::MenuBar => 1,
            Self::Content => 3,
            Self::Drag => 4,
            Self::Grow => 5,
            Self::GoAway => 6,
            Self::ZoomIn => 7,
            Self::ZoomOut => 8,
        }
    }

    pub fn is_zoom(self) -> bool {
        matches!(self, Self::ZoomIn | Self::ZoomOut)
    }
}
