//! Pixel geometry and the inline-geometry record windows carry.

/// Point in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PxPoint {
    pub x: f64,
    pub y: f64,
}

impl PxPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PxSize {
    pub width: f64,
    pub height: f64,
}

impl PxSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PxRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PxRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn origin(&self) -> PxPoint {
        PxPoint {
            x: self.x,
            y: self.y,
        }
    }
}

/// Inline positioning scheme for a window element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionMode {
    /// No inline override; the element sits in normal flow.
    Static,
    /// Anchored to the page; offsets are page coordinates.
    Absolute,
    /// Anchored to the viewport; offsets are viewport coordinates.
    Fixed,
}

/// Inline transform override.
///
/// `CenterShift` restates the stylesheet's centering translate inline;
/// `Cleared` pins the element to its box origin, overriding any stylesheet
/// centering so explicit top/left mean what they say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformStyle {
    CenterShift,
    Cleared,
}

/// The eight inline slots the engine reads and writes on a window element.
///
/// `None` means "not set inline": the stylesheet rule (typically centered
/// placement) applies. A whole-struct copy is the snapshot saved across
/// fullscreen transitions, so restoring one puts every slot back verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InlineGeometry {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub position: Option<PositionMode>,
    pub transform: Option<TransformStyle>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl InlineGeometry {
    /// True while the window still relies on the stylesheet's implicit
    /// centering, i.e. a drag must materialize explicit coordinates before
    /// it can move the window.
    pub fn is_implicitly_centered(&self) -> bool {
        self.top.is_none() && self.left.is_none()
    }

    /// Clear the placement slots so implicit centering resumes. Size is
    /// left alone.
    pub fn reset_placement(&mut self) {
        self.top = None;
        self.left = None;
        self.right = None;
        self.bottom = None;
        self.position = None;
        self.transform = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_until_both_offsets_set() {
        let mut g = InlineGeometry::default();
        assert!(g.is_implicitly_centered());
        g.left = Some(12.0);
        assert!(g.is_implicitly_centered());
        g.top = Some(4.0);
        assert!(!g.is_implicitly_centered());
    }

    #[test]
    fn reset_placement_keeps_size() {
        let mut g = InlineGeometry {
            top: Some(40.0),
            left: Some(10.0),
            right: Some(1.0),
            bottom: Some(2.0),
            position: Some(PositionMode::Fixed),
            transform: Some(TransformStyle::Cleared),
            width: Some(640.0),
            height: Some(480.0),
        };
        g.reset_placement();
        assert!(g.is_implicitly_centered());
        assert_eq!(g.position, None);
        assert_eq!(g.transform, None);
        assert_eq!(g.width, Some(640.0));
        assert_eq!(g.height, Some(480.0));
    }
}
