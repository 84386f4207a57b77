//! Wheel routing for the designated content window.

use crate::page::{ElementId, PageSurface};

/// What the host should do with a wheel event it forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDisposition {
    /// The engine applied the delta to the content pane. The host must
    /// suppress the default scroll and stop propagation.
    RoutedToContent,
    /// The target pane scrolls natively. The host must stop propagation
    /// only, so the page behind the window never scrolls.
    PaneLocal,
    /// Not over the designated window, or routing is unconfigured.
    Unhandled,
}

/// Elements the router operates on, resolved from configuration at
/// dispatch time.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RouteTargets {
    pub window: ElementId,
    pub content: ElementId,
    pub list: Option<ElementId>,
}

/// Classify a wheel event against the designated window. A target inside
/// the content or list pane keeps its native scrolling; any other target
/// over the window gets its vertical delta redirected to the content pane.
pub(crate) fn route_wheel(
    surface: &mut dyn PageSurface,
    targets: RouteTargets,
    target: ElementId,
    delta_y: f64,
) -> WheelDisposition {
    if !surface.contains(targets.window, target) {
        return WheelDisposition::Unhandled;
    }
    let pane_local = surface.contains(targets.content, target)
        || targets
            .list
            .is_some_and(|list| surface.contains(list, target));
    if pane_local {
        return WheelDisposition::PaneLocal;
    }
    surface.scroll_pane_by(targets.content, delta_y);
    WheelDisposition::RoutedToContent
}
