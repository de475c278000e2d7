use serde::{Deserialize, Serialize};

/// Window definition variants, keyed by their System 7 proc id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowKind {
    #[default]
    Document,
    DBox,
    PlainDBox,
    AltDBox,
    NoGrowDocument,
    MovableDBox,
    ZoomDocument,
    ZoomNoGrow,
    RoundDocument,
}

impl WindowKind {
    /// Map a proc id. Unknown ids fall back to `Document`.
    pub fn from_proc_id(proc_id: i16) -> Self {
        match proc_id {
            1 => Self::DBox,
            2 => Self::PlainDBox,
            3 => Self::AltDBox,
            4 => Self::NoGrowDocument,
            5 => Self::MovableDBox,
            8 => Self::ZoomDocument,
            12 => Self::ZoomNoGrow,
            16 => Self::RoundDocument,
            _ => Self::Document,
        }
    }

    pub fn proc_id(self) -> i16 {
        match self {
            Self::Document => 0,
            Self::DBox => 1,
            Self::PlainDBox => 2,
            Self::AltDBox => 3,
            Self::NoGrowDocument => 4,
            Self::MovableDBox => 5,
            Self::ZoomDocument => 8,
            Self::ZoomNoGrow => 12,
            Self::RoundDocument => 16,
        }
    }

    pub fn has_title_bar(self) -> bool {
        !matches!(self, Self::DBox | Self::PlainDBox | Self::AltDBox)
    }

    pub fn has_grow_box(self) -> bool {
        matches!(self, Self::Document | Self::ZoomDocument)
    }

    pub fn has_zoom_box(self) -> bool {
        matches!(self, Self::ZoomDocument | Self::ZoomNoGrow)
    }
}
