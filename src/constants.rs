//! Shared crate-wide constants.

/// Fallback top offset (CSS px) for fullscreen windows when neither a
/// window-scoped nor a global style variable resolves.
pub const FULLSCREEN_TOP_DEFAULT: f64 = 100.0;

/// Fallback side margin (CSS px) for fullscreen windows.
pub const FULLSCREEN_MARGIN_DEFAULT: f64 = 16.0;

/// Fallback bottom margin (CSS px) for fullscreen windows.
pub const FULLSCREEN_BOTTOM_DEFAULT: f64 = 16.0;

/// Minimum explicit width (CSS px) a fullscreen window is given so tiny
/// viewports never produce a degenerate surface.
pub const FULLSCREEN_MIN_WIDTH: f64 = 260.0;

/// Minimum explicit height (CSS px) a fullscreen window is given.
pub const FULLSCREEN_MIN_HEIGHT: f64 = 160.0;

/// Base value of the stacking counter. The first raise hands out
/// `STACK_BASE + 1`, keeping raised windows above static page content
/// without the host supplying a base stacking order.
pub const STACK_BASE: u32 = 100;
