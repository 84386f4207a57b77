//! Drag-session state and the placement math behind it.

use crate::geometry::{InlineGeometry, PositionMode, PxPoint, PxRect, TransformStyle};

/// Live drag gesture: the pointer-down position and the window's explicit
/// origin at press time. Owned by exactly one window at a time; it exists
/// only between press and release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub press: PxPoint,
    pub origin: PxPoint,
}

impl DragSession {
    pub fn new(press: PxPoint, origin: PxPoint) -> Self {
        Self { press, origin }
    }

    /// Explicit left/top for the current pointer position: the origin plus
    /// the cumulative pointer delta since press.
    pub fn position_at(&self, pointer: PxPoint) -> PxPoint {
        PxPoint {
            x: self.origin.x + (pointer.x - self.press.x),
            y: self.origin.y + (pointer.y - self.press.y),
        }
    }
}

/// Explicit page coordinates for a window that was still implicitly
/// centered: its rendered viewport box shifted by the page scroll. Using
/// the pre-drag rendered position keeps the window from visually jumping
/// when centering is re-expressed as absolute positioning.
pub fn materialized_origin(rendered: PxRect, page_scroll: PxPoint) -> PxPoint {
    PxPoint {
        x: rendered.x + page_scroll.x,
        y: rendered.y + page_scroll.y,
    }
}

/// Write the materialized origin into the inline record: absolute
/// positioning with the centering transform cleared.
pub fn materialize(geometry: &mut InlineGeometry, origin: PxPoint) {
    geometry.left = Some(origin.x);
    geometry.top = Some(origin.y);
    geometry.position = Some(PositionMode::Absolute);
    geometry.transform = Some(TransformStyle::Cleared);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_tracks_pointer_delta() {
        let session = DragSession::new(PxPoint::new(100.0, 100.0), PxPoint::new(400.0, 200.0));
        assert_eq!(
            session.position_at(PxPoint::new(150.0, 130.0)),
            PxPoint::new(450.0, 230.0)
        );
        // Moving back past the press point goes negative; no clamping.
        assert_eq!(
            session.position_at(PxPoint::new(-350.0, 80.0)),
            PxPoint::new(-50.0, 180.0)
        );
    }

    #[test]
    fn materialize_clears_centering() {
        let mut geometry = InlineGeometry::default();
        materialize(
            &mut geometry,
            materialized_origin(PxRect::new(400.0, 200.0, 480.0, 320.0), PxPoint::new(0.0, 50.0)),
        );
        assert_eq!(geometry.left, Some(400.0));
        assert_eq!(geometry.top, Some(250.0));
        assert_eq!(geometry.position, Some(PositionMode::Absolute));
        assert_eq!(geometry.transform, Some(TransformStyle::Cleared));
        assert!(!geometry.is_implicitly_centered());
    }
}
