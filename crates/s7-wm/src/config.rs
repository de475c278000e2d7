//! Manager configuration and frame metrics

use serde::{Deserialize, Serialize};

use s7_quickdraw::Rect;

/// Frame metrics shared by every document-style window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameStyle {
    /// Height of the title bar drawn above the content
    pub title_bar_height: i16,
    /// Width of the one-pixel frame around the content
    pub border_width: i16,
    pub close_box_size: i16,
    /// Distance from the left frame edge to the close box
    pub close_box_margin: i16,
    pub zoom_box_size: i16,
    /// Distance from the right frame edge to the zoom box
    pub zoom_box_margin: i16,
    /// Side of the grow box in the content's bottom-right corner
    pub grow_box_size: i16,
}

/// Standard System 7 frame.
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 20,
    border_width: 1,
    close_box_size: 12,
    close_box_margin: 8,
    zoom_box_size: 12,
    zoom_box_margin: 8,
    grow_box_size: 15,
};

impl Default for FrameStyle {
    fn default() -> Self {
        FRAME_STYLE
    }
}

/// Window manager configuration.
///
/// Every field has a default, so a partial document deserializes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    pub screen_width: i16,
    pub screen_height: i16,
    /// Height of the menu bar band at the top of the screen. Zero disables
    /// the `MenuBar` hit-test result.
    pub menu_bar_height: i16,
    pub max_windows: usize,
    pub frame: FrameStyle,
    /// Size limits for `grow_window` when the caller passes none: `left`
    /// and `top` are the minimum width and height, `right` and `bottom`
    /// the maximum.
    pub grow_limits: Rect,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            menu_bar_height: 0,
            max_windows: 64,
            frame: FRAME_STYLE,
            grow_limits: Rect::new(80, 60, 2048, 2048),
        }
    }
}

impl ManagerConfig {
    /// The whole screen in global coordinates.
    pub fn screen_rect(&self) -> Rect {
        Rect::new(0, 0, self.screen_width, self.screen_height)
    }

    /// Default area a dragged window's frame must stay inside: the screen
    /// below the menu bar.
    pub fn drag_rect(&self) -> Rect {
        Rect::new(0, self.menu_bar_height, self.screen_width, self.screen_height)
    }

    /// The zoomed ("standard") state: 80% of the screen, centered, pushed
    /// below the menu bar.
    pub fn standard_state(&self) -> Rect {
        let w = self.screen_width as i32;
        let h = self.screen_height as i32;
        let zw = w * 4 / 5;
        let zh = h * 4 / 5;
        let left = (w - zw) / 2;
        let top = (h - zh) / 2 + self.menu_bar_height as i32;
        Rect::new(
            clamp_i16(left),
            clamp_i16(top),
            clamp_i16(left + zw),
            clamp_i16(top + zh),
        )
    }
}

fn clamp_i16(v: i32) -> i16 {
    v.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}
