//! Input vocabulary. Hosts translate their real pointer and wheel events
//! into these before forwarding them to the engine.

use crate::geometry::PxPoint;
use crate::page::ElementId;

/// Pointer device button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
}

/// A pointer press or move, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub button: PointerButton,
    pub position: PxPoint,
}

impl PointerEvent {
    pub fn primary(x: f64, y: f64) -> Self {
        Self {
            button: PointerButton::Primary,
            position: PxPoint::new(x, y),
        }
    }
}

/// A wheel event, identified by the element it targeted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub target: ElementId,
    pub delta_y: f64,
}

impl WheelEvent {
    pub fn new(target: ElementId, delta_y: f64) -> Self {
        Self { target, delta_y }
    }
}
