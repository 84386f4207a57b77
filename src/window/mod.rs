//! Window records and the engine that manages them.

mod desk;

pub use desk::Desk;

use bitflags::bitflags;

use crate::drag::DragSession;
use crate::geometry::InlineGeometry;
use crate::page::ElementId;

bitflags! {
    /// Explicit per-window wiring record, checked before every wiring step
    /// so repeated bootstrap calls never double-bind a trigger.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct WiredFlags: u8 {
        const RAISE = 1 << 0;
        const DRAG = 1 << 1;
        const LIFECYCLE = 1 << 2;
    }
}

/// Per-window state owned by the registry. Created when the window element
/// is discovered during wiring; lives until the engine does.
#[derive(Debug, Clone)]
pub struct WindowRecord {
    pub(crate) root: ElementId,
    /// Authoritative inline record; the surface copy mirrors it.
    pub(crate) geometry: InlineGeometry,
    /// Snapshot taken on fullscreen entry, consumed on exit. Never
    /// overwritten while present.
    pub(crate) saved: Option<InlineGeometry>,
    pub(crate) stack_order: Option<u32>,
    pub(crate) minimized: bool,
    pub(crate) fullscreen: bool,
    pub(crate) wired: WiredFlags,
    pub(crate) drag: Option<DragSession>,
}

impl WindowRecord {
    pub(crate) fn new(root: ElementId) -> Self {
        Self {
            root,
            geometry: InlineGeometry::default(),
            saved: None,
            stack_order: None,
            minimized: false,
            fullscreen: false,
            wired: WiredFlags::empty(),
            drag: None,
        }
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn geometry(&self) -> InlineGeometry {
        self.geometry
    }

    pub fn saved_geometry(&self) -> Option<InlineGeometry> {
        self.saved
    }

    pub fn stack_order(&self) -> Option<u32> {
        self.stack_order
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn wired(&self) -> WiredFlags {
        self.wired
    }
}
