//! The host seam. Everything the engine knows about the page goes through
//! [`PageSurface`]; a host implements it over a real document (a wasm
//! bridge, a webview shim) and [`mock::MockPage`] implements it for tests.

pub mod mock;

use crate::geometry::{InlineGeometry, PxPoint, PxRect, PxSize};

/// Opaque handle to a page element, issued by the surface. Stable for the
/// life of the page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u32);

impl ElementId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// The page as the engine sees it.
///
/// All engine operations are defensive against `None` returns: a missing
/// element skips the operation, it never fails it.
pub trait PageSurface {
    /// Look up an element by its id attribute.
    fn element(&self, id: &str) -> Option<ElementId>;

    /// Elements carrying the window marker, paired with their names. A
    /// window's name is its element id, and trigger ids derive from it
    /// (`{name}open`, `{name}close`, `{name}header`).
    fn window_elements(&self) -> Vec<(String, ElementId)>;

    /// Viewport size.
    fn viewport(&self) -> PxSize;

    /// Current page scroll offset.
    fn page_scroll(&self) -> PxPoint;

    /// Rendered bounding box in viewport coordinates, or `None` for an
    /// element without a box (hidden or detached).
    fn bounding_rect(&self, el: ElementId) -> Option<PxRect>;

    /// Current inline geometry of an element. Read once at wire time so
    /// pre-existing inline styles survive a later fullscreen round trip.
    fn inline_geometry(&self, el: ElementId) -> InlineGeometry;

    /// Push the full inline record to an element.
    fn apply_geometry(&mut self, el: ElementId, geometry: &InlineGeometry);

    /// Force or clear the hidden display override. Clearing restores
    /// whatever the stylesheet says, not any particular display value.
    fn set_force_hidden(&mut self, el: ElementId, hidden: bool);

    /// Set the element's stacking order.
    fn set_stack_order(&mut self, el: ElementId, order: u32);

    /// Computed style variable by name, e.g. `--fullscreen-top`. Custom
    /// properties cascade, so a root lookup is sufficient.
    fn style_var(&self, name: &str) -> Option<String>;

    /// Whether the fullscreen marker is present on the element. Consulted
    /// once at wire time for windows already fullscreen at startup.
    fn fullscreen_marked(&self, el: ElementId) -> bool;

    /// Adjust a scrollable pane's vertical scroll position by `delta_y`.
    fn scroll_pane_by(&mut self, el: ElementId, delta_y: f64);

    /// Move keyboard focus. Returns false when the element cannot take it.
    fn focus(&mut self, el: ElementId) -> bool;

    /// Replace the element's text content.
    fn set_text(&mut self, el: ElementId, text: &str);

    /// Containment test: is `node` equal to, or a descendant of,
    /// `ancestor`?
    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool;
}
