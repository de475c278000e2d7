//! The window manager port
//!
//! A drawing surface covering the whole screen. Its visible region is the
//! area the desktop and window frames are drawn into.

use s7_quickdraw::{Rect, RegionOps, RgnHandle};
use tracing::debug;

use crate::auto_region::AutoRegion;
use crate::error::WmResult;

pub struct ManagerPort<R: RegionOps> {
    port_rect: Rect,
    vis_rgn: RgnHandle,
    _vis: AutoRegion<R>,
}

impl<R: RegionOps> ManagerPort<R> {
    /// Allocate the port for a screen of `port_rect`.
    pub(crate) fn new(ops: R, port_rect: Rect) -> WmResult<Self> {
        let vis = AutoRegion::rect_into_new(ops, port_rect);
        let vis_rgn = vis.require()?;
        debug!(
            width = port_rect.width(),
            height = port_rect.height(),
            "window manager port allocated"
        );
        Ok(Self {
            port_rect,
            vis_rgn,
            _vis: vis,
        })
    }

    pub fn port_rect(&self) -> Rect {
        self.port_rect
    }

    pub fn vis_region(&self) -> RgnHandle {
        self.vis_rgn
    }
}
