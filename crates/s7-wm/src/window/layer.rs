use serde::{Deserialize, Serialize};

/// Stacking band a window lives in. Higher layers always sit in front of
/// lower ones; ordering operations only move a window within its own band.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum WindowLayer {
    #[default]
    Normal,
    /// Palettes and tool windows
    Floating,
    /// The single modal dialog
    Modal,
}
