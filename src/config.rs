//! Engine configuration: designated elements and fullscreen defaults.

use crate::constants::{
    FULLSCREEN_BOTTOM_DEFAULT, FULLSCREEN_MARGIN_DEFAULT, FULLSCREEN_MIN_HEIGHT,
    FULLSCREEN_MIN_WIDTH, FULLSCREEN_TOP_DEFAULT,
};

/// Literal fullscreen parameters used when no style variable resolves,
/// plus the size floors applied regardless of resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FullscreenDefaults {
    pub top: f64,
    pub margin: f64,
    pub bottom: f64,
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for FullscreenDefaults {
    fn default() -> Self {
        Self {
            top: FULLSCREEN_TOP_DEFAULT,
            margin: FULLSCREEN_MARGIN_DEFAULT,
            bottom: FULLSCREEN_BOTTOM_DEFAULT,
            min_width: FULLSCREEN_MIN_WIDTH,
            min_height: FULLSCREEN_MIN_HEIGHT,
        }
    }
}

/// Designated elements the engine treats specially. Every field is
/// optional; a `None` (or a name that resolves to nothing at runtime)
/// disables that behavior rather than failing it.
#[derive(Debug, Clone, Default)]
pub struct DeskConfig {
    /// Window whose `open` hands keyboard focus to the content pane and
    /// whose surface captures wheel input for rerouting.
    pub content_window: Option<String>,
    /// Element id of the scrollable content pane inside `content_window`.
    pub content_pane: Option<String>,
    /// Optional list sub-pane that keeps wheel events local to itself.
    pub list_pane: Option<String>,
    /// Element whose text the clock tick replaces.
    pub clock_element: Option<String>,
    /// Fullscreen fallbacks and floors.
    pub fullscreen: FullscreenDefaults,
}

impl DeskConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
