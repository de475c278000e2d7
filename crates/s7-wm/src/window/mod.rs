//! Window management module
//!
//! Provides the window record, its frame geometry and part codes, and the
//! arena-backed window list.

mod config;
mod kind;
mod layer;
mod list;
mod part;
#[allow(clippy::module_inception)]
mod window;

use core::fmt;

pub use config::WindowConfig;
pub use kind::WindowKind;
pub use layer::WindowLayer;
pub use list::{Iter, WindowList};
pub use part::WindowPart;
pub use window::{ClipSource, Window};

/// Unique window identifier.
///
/// An arena slot plus the generation of that slot. Disposing a window bumps
/// the generation, so ids held past disposal resolve to
/// [`WmError::StaleWindow`](crate::WmError::StaleWindow) instead of whatever
/// window reuses the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId {
    index: u32,
    generation: u32,
}

impl WindowId {
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window#{}.{}", self.index, self.generation)
    }
}
