use s7_quickdraw::{Point, Rect, RgnHandle};

use super::{WindowId, WindowKind, WindowLayer, WindowPart};
use crate::config::FrameStyle;
use crate::title::Str255;

/// Which region drawing is currently clipped to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClipSource {
    #[default]
    Content,
    /// Inside a begin/end update bracket
    Update,
}

/// A window record.
///
/// The three regions are owned by the window and disposed by the manager
/// when the window is disposed. `bounds` is the content rectangle; the frame
/// and title bar lie outside it.
#[derive(Debug)]
pub struct Window {
    pub(crate) id: WindowId,
    pub(crate) bounds: Rect,
    pub(crate) kind: WindowKind,
    pub(crate) layer: WindowLayer,
    pub(crate) visible: bool,
    pub(crate) hilited: bool,
    pub(crate) has_close_box: bool,
    pub(crate) zoomed: bool,
    /// Bounds to return to when zooming out
    pub(crate) user_state: Rect,
    pub(crate) ref_con: i32,
    pub(crate) title: Option<Str255>,
    pub(crate) structure_rgn: RgnHandle,
    pub(crate) content_rgn: RgnHandle,
    pub(crate) update_rgn: RgnHandle,
    pub(crate) clip: ClipSource,
    pub(crate) in_update: bool,
    pub(crate) next: Option<WindowId>,
}

impl Window {
    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    pub fn layer(&self) -> WindowLayer {
        self.layer
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_hilited(&self) -> bool {
        self.hilited
    }

    pub fn has_close_box(&self) -> bool {
        self.has_close_box
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    pub fn user_state(&self) -> Rect {
        self.user_state
    }

    pub fn ref_con(&self) -> i32 {
        self.ref_con
    }

    pub fn title(&self) -> Option<&Str255> {
        self.title.as_ref()
    }

    pub fn structure_region(&self) -> RgnHandle {
        self.structure_rgn
    }

    pub fn content_region(&self) -> RgnHandle {
        self.content_rgn
    }

    pub fn update_region(&self) -> RgnHandle {
        self.update_rgn
    }

    pub fn clip_source(&self) -> ClipSource {
        self.clip
    }

    /// Region drawing is clipped to right now.
    pub fn clip_region(&self) -> RgnHandle {
        match self.clip {
            ClipSource::Content => self.content_rgn,
            ClipSource::Update => self.update_rgn,
        }
    }

    pub fn in_update(&self) -> bool {
        self.in_update
    }

    /// The next window behind this one.
    pub fn next(&self) -> Option<WindowId> {
        self.next
    }

    // ========================================================================
    // Frame geometry
    // ========================================================================

    /// Full visual extent: content, border and title bar.
    pub fn structure_rect(&self, style: &FrameStyle) -> Rect {
        let b = self.bounds;
        let bw = style.border_width;
        let top = if self.kind.has_title_bar() {
            b.top.saturating_sub(style.title_bar_height)
        } else {
            b.top.saturating_sub(bw)
        };
        Rect::new(
            b.left.saturating_sub(bw),
            top,
            b.right.saturating_add(bw),
            b.bottom.saturating_add(bw),
        )
    }

    pub fn title_bar_rect(&self, style: &FrameStyle) -> Option<Rect> {
        if !self.kind.has_title_bar() {
            return None;
        }
        let b = self.bounds;
        Some(Rect::new(
            b.left.saturating_sub(style.border_width),
            b.top.saturating_sub(style.title_bar_height),
            b.right.saturating_add(style.border_width),
            b.top,
        ))
    }

    pub fn close_box_rect(&self, style: &FrameStyle) -> Option<Rect> {
        if !self.has_close_box {
            return None;
        }
        let bar = self.title_bar_rect(style)?;
        let size = style.close_box_size;
        let left = bar.left.saturating_add(style.close_box_margin);
        let top = bar.top.saturating_add(style.title_bar_height.saturating_sub(size) / 2);
        Some(Rect::new(
            left,
            top,
            left.saturating_add(size),
            top.saturating_add(size),
        ))
    }

    pub fn zoom_box_rect(&self, style: &FrameStyle) -> Option<Rect> {
        if !self.kind.has_zoom_box() {
            return None;
        }
        let bar = self.title_bar_rect(style)?;
        let size = style.zoom_box_size;
        let right = bar.right.saturating_sub(style.zoom_box_margin);
        let top = bar.top.saturating_add(style.title_bar_height.saturating_sub(size) / 2);
        Some(Rect::new(
            right.saturating_sub(size),
            top,
            right,
            top.saturating_add(size),
        ))
    }

    pub fn grow_box_rect(&self, style: &FrameStyle) -> Option<Rect> {
        if !self.kind.has_grow_box() {
            return None;
        }
        let b = self.bounds;
        let size = style.grow_box_size;
        Some(Rect::new(
            b.right.saturating_sub(size),
            b.bottom.saturating_sub(size),
            b.right,
            b.bottom,
        ))
    }

    /// Classify `pt` against this window's frame. `None` when the point is
    /// outside the structure rectangle.
    pub fn part_at(&self, pt: Point, style: &FrameStyle) -> Option<WindowPart> {
        if !self.structure_rect(style).contains(pt) {
            return None;
        }
        let inside = |r: Option<Rect>| r.is_some_and(|r| r.contains(pt));

        let part = if inside(self.close_box_rect(style)) {
            WindowPart::GoAway
        } else if inside(self.zoom_box_rect(style)) {
            if self.zoomed {
                WindowPart::ZoomOut
            } else {
                WindowPart::ZoomIn
            }
        } else if inside(self.grow_box_rect(style)) {
            WindowPart::Grow
        } else if inside(self.title_bar_rect(style)) {
            WindowPart::Drag
        } else if self.bounds.contains(pt) {
            WindowPart::Content
        } else {
            WindowPart::Drag
        };
        Some(part)
    }
}
