//! Peripheral clock text for a designated element.

use chrono::{DateTime, Local};

use crate::page::{ElementId, PageSurface};

/// Local date/time string the clock writes each tick.
pub fn format_clock(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Once-per-second clock display. The host drives the cadence; a missing
/// element disables the clock entirely.
#[derive(Debug, Default)]
pub struct Clock {
    element: Option<ElementId>,
}

impl Clock {
    pub fn new(element: Option<ElementId>) -> Self {
        Self { element }
    }

    pub fn element(&self) -> Option<ElementId> {
        self.element
    }

    pub fn tick(&self, surface: &mut dyn PageSurface) {
        if let Some(el) = self.element {
            surface.set_text(el, &format_clock(Local::now()));
        }
    }
}
