//! Fullscreen geometry: style-variable resolution and the applied layout.

use thiserror::Error;

use crate::config::FullscreenDefaults;
use crate::geometry::{InlineGeometry, PositionMode, PxSize, TransformStyle};
use crate::page::PageSurface;

/// Pixel-length parse failure for a style variable value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleVarError {
    #[error("empty value")]
    Empty,
    #[error("not a pixel length: {0:?}")]
    NotPixels(String),
}

/// Parse a CSS pixel length: "100px" or a bare number.
pub fn parse_px(value: &str) -> Result<f64, StyleVarError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StyleVarError::Empty);
    }
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    number
        .parse::<f64>()
        .map_err(|_| StyleVarError::NotPixels(value.to_string()))
}

/// Resolved fullscreen layout parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FullscreenInsets {
    pub top: f64,
    pub margin: f64,
    pub bottom: f64,
}

/// Walk the fallback chain for one parameter: window-scoped variable, then
/// global variable, then the literal default. A present but unparsable
/// value is logged and skipped, so the chain keeps falling.
fn resolve_inset(surface: &dyn PageSurface, window: &str, suffix: &str, default: f64) -> f64 {
    let scoped = format!("--{window}-fullscreen-{suffix}");
    let global = format!("--fullscreen-{suffix}");
    for name in [scoped, global] {
        let Some(value) = surface.style_var(&name) else {
            continue;
        };
        match parse_px(&value) {
            Ok(px) => return px,
            Err(err) => {
                tracing::warn!(var = %name, %value, %err, "ignoring unparsable fullscreen variable");
            }
        }
    }
    default
}

/// Resolve the three fullscreen insets for a window.
pub fn resolve_insets(
    surface: &dyn PageSurface,
    window: &str,
    defaults: FullscreenDefaults,
) -> FullscreenInsets {
    FullscreenInsets {
        top: resolve_inset(surface, window, "top", defaults.top),
        margin: resolve_inset(surface, window, "margin", defaults.margin),
        bottom: resolve_inset(surface, window, "bottom", defaults.bottom),
    }
}

/// Fixed-position geometry filling the viewport between the insets.
/// Width and height are floored so tiny viewports never produce a
/// degenerate surface.
pub fn fullscreen_geometry(
    viewport: PxSize,
    insets: FullscreenInsets,
    defaults: FullscreenDefaults,
) -> InlineGeometry {
    let width = (viewport.width - 2.0 * insets.margin).max(defaults.min_width);
    let height = (viewport.height - insets.top - insets.bottom).max(defaults.min_height);
    InlineGeometry {
        top: Some(insets.top),
        left: Some(insets.margin),
        right: None,
        bottom: None,
        position: Some(PositionMode::Fixed),
        transform: Some(TransformStyle::Cleared),
        width: Some(width),
        height: Some(height),
    }
}
