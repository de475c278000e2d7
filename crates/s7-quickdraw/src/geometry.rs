//! Points and rectangles in global coordinates
//!
//! Coordinates are signed 16-bit, as on the original Toolbox. Rectangles are
//! half-open: a point lies inside when `left <= h < right` and
//! `top <= v < bottom`. All arithmetic saturates instead of wrapping.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// A point, horizontal then vertical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub h: i16,
    pub v: i16,
}

impl Point {
    pub const fn new(h: i16, v: i16) -> Self {
        Self { h, v }
    }

    /// Translate by `(dh, dv)`.
    pub fn offset(self, dh: i16, dv: i16) -> Self {
        Self {
            h: self.h.saturating_add(dh),
            v: self.v.saturating_add(dv),
        }
    }
}

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i16,
    pub top: i16,
    pub right: i16,
    pub bottom: i16,
}

impl Rect {
    /// The canonical empty rectangle.
    pub const EMPTY: Rect = Rect {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub const fn new(left: i16, top: i16, right: i16, bottom: i16) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build a rectangle from its top-left corner and a size.
    pub fn with_size(origin: Point, width: i16, height: i16) -> Self {
        Self {
            left: origin.h,
            top: origin.v,
            right: origin.h.saturating_add(width.max(0)),
            bottom: origin.v.saturating_add(height.max(0)),
        }
    }

    pub fn width(&self) -> i16 {
        self.right.saturating_sub(self.left).max(0)
    }

    pub fn height(&self) -> i16 {
        self.bottom.saturating_sub(self.top).max(0)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    /// Area in pixels. Zero for empty rectangles.
    pub fn area(&self) -> i64 {
        if self.is_empty() {
            return 0;
        }
        (self.right as i64 - self.left as i64) * (self.bottom as i64 - self.top as i64)
    }

    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    pub fn contains(&self, pt: Point) -> bool {
        pt.h >= self.left && pt.h < self.right && pt.v >= self.top && pt.v < self.bottom
    }

    /// True if `other` lies entirely inside `self`. An empty rectangle is
    /// contained everywhere.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.is_empty()
            || (other.left >= self.left
                && other.right <= self.right
                && other.top >= self.top
                && other.bottom <= self.bottom)
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }

    /// Overlap of two rectangles, `None` when they do not overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let r = Rect {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        };
        if r.is_empty() {
            None
        } else {
            Some(r)
        }
    }

    /// Smallest rectangle enclosing both. Empty inputs are ignored.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    pub fn offset(&self, dh: i16, dv: i16) -> Rect {
        Rect {
            left: self.left.saturating_add(dh),
            top: self.top.saturating_add(dv),
            right: self.right.saturating_add(dh),
            bottom: self.bottom.saturating_add(dv),
        }
    }

    /// Shrink by `dh` on the left and right, `dv` on the top and bottom.
    /// Negative values grow the rectangle. A rectangle that collapses
    /// becomes [`Rect::EMPTY`].
    pub fn inset(&self, dh: i16, dv: i16) -> Rect {
        let r = Rect {
            left: self.left.saturating_add(dh),
            top: self.top.saturating_add(dv),
            right: self.right.saturating_sub(dh),
            bottom: self.bottom.saturating_sub(dv),
        };
        if r.is_empty() {
            Rect::EMPTY
        } else {
            r
        }
    }

    /// Same size, top-left corner at `(h, v)`.
    pub fn moved_to(&self, h: i16, v: i16) -> Rect {
        Rect::with_size(Point::new(h, v), self.width(), self.height())
    }

    /// Pieces of `self` not covered by `other`, as at most four disjoint
    /// rectangles (top band, bottom band, left and right slivers).
    pub fn subtract(&self, other: &Rect) -> Vec<Rect> {
        let mut out = Vec::with_capacity(4);
        if self.is_empty() {
            return out;
        }
        let Some(cut) = self.intersection(other) else {
            out.push(*self);
            return out;
        };

        let pieces = [
            Rect::new(self.left, self.top, self.right, cut.top),
            Rect::new(self.left, cut.bottom, self.right, self.bottom),
            Rect::new(self.left, cut.top, cut.left, cut.bottom),
            Rect::new(cut.right, cut.top, self.right, cut.bottom),
        ];
        out.extend(pieces.into_iter().filter(|r| !r.is_empty()));
        out
    }
}
