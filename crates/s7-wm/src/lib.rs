//! System 7 Window Manager core
//!
//! This crate provides the window bookkeeping of the kernel desktop:
//! - Window lifecycle (create, dispose, show, hide)
//! - Z-order and activation (bring to front, select, send behind)
//! - Geometry changes (move, resize, zoom, constrained drag and grow)
//! - Modal and floating window layers
//! - Hit testing (`FindWindow` part codes)
//! - Update regions and the begin/end update bracket
//!
//! ## Architecture
//!
//! - [`auto_region`]: `AutoRegion`, the scoped owner that releases a region
//!   on every exit path
//! - [`window`]: `Window`, `WindowId`, the arena-backed `WindowList`, part
//!   codes, window kinds and layers
//! - [`manager`]: `WindowManager`, the explicit context object holding all
//!   window state
//! - [`paint`]: the `Painter` collaborator invoked when a window needs
//!   drawing
//! - [`shared`]: `SharedWindowManager`, a spin-lock wrapper for kernels that
//!   reach the manager from more than one context
//!
//! Regions come from any [`RegionOps`] implementation; `s7_quickdraw`
//! provides `RegionHeap` as the reference allocator.
//!
//! ## Example
//!
//! ```rust
//! use s7_quickdraw::{Point, Rect, RegionHeap};
//! use s7_wm::{NullPainter, Str255, WindowConfig, WindowManager, WindowPart};
//!
//! let mut wm = WindowManager::new(RegionHeap::new(), NullPainter);
//! wm.init().unwrap();
//!
//! let id = wm
//!     .create(WindowConfig {
//!         bounds: Rect::new(20, 40, 220, 140),
//!         title: Str255::try_from("Untitled").unwrap(),
//!         visible: true,
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//! assert_eq!(wm.front_window(), Some(id));
//! assert_eq!(wm.hit_test(Point::new(50, 80)), (WindowPart::Content, Some(id)));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Handles, not pointers**: windows are addressed by generational ids, so
//!    a disposed window can never be reached again
//! 2. **Scoped regions**: every temporary region is an `AutoRegion`
//! 3. **No hidden globals**: the manager is constructed and owned by the caller
//! 4. **`no_std`**: only `core` and `alloc` are required

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod auto_region;
pub mod config;
pub mod error;
pub mod manager;
pub mod paint;
pub mod shared;
pub mod title;
pub mod window;

mod port;

pub use auto_region::AutoRegion;
pub use config::{FrameStyle, ManagerConfig, FRAME_STYLE};
pub use error::{WmError, WmResult};
pub use manager::{WindowEvent, WindowManager};
pub use paint::{NullPainter, Painter};
pub use port::ManagerPort;
pub use shared::SharedWindowManager;
pub use title::Str255;
pub use window::{
    Window, WindowConfig, WindowId, WindowKind, WindowLayer, WindowList, WindowPart,
};

pub use s7_quickdraw::{Point, Rect, RegionOps, RgnHandle};
