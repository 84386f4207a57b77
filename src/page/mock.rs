//! In-crate [`PageSurface`] double with a minimal layout model, used by the
//! integration suite and by embedders' tests.

use std::collections::BTreeMap;

use super::{ElementId, PageSurface};
use crate::geometry::{InlineGeometry, PositionMode, PxPoint, PxRect, PxSize};

#[derive(Debug, Clone)]
struct MockElement {
    dom_id: String,
    window: bool,
    parent: Option<ElementId>,
    base: PxSize,
    geometry: InlineGeometry,
    hidden: bool,
    stack_order: Option<u32>,
    scroll_top: f64,
    focusable: bool,
    fullscreen_marked: bool,
    text: String,
}

impl MockElement {
    fn new(dom_id: &str) -> Self {
        Self {
            dom_id: dom_id.to_string(),
            window: false,
            parent: None,
            base: PxSize::default(),
            geometry: InlineGeometry::default(),
            hidden: false,
            stack_order: None,
            scroll_top: 0.0,
            focusable: false,
            fullscreen_marked: false,
            text: String::new(),
        }
    }
}

/// Fake page. Layout model: explicit inline top/left win (fixed elements
/// anchor to the viewport, everything else to the page), and an element
/// without explicit offsets renders centered in the viewport, mirroring the
/// stylesheet contract the engine assumes.
#[derive(Debug, Default)]
pub struct MockPage {
    elements: Vec<MockElement>,
    by_dom_id: BTreeMap<String, ElementId>,
    viewport: PxSize,
    scroll: PxPoint,
    vars: BTreeMap<String, String>,
    focused: Option<ElementId>,
}

/// Default rendered size for window elements added to the mock.
pub const DEFAULT_WINDOW_SIZE: PxSize = PxSize::new(480.0, 320.0);

impl MockPage {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            viewport: PxSize::new(viewport_width, viewport_height),
            ..Self::default()
        }
    }

    fn push(&mut self, element: MockElement) -> ElementId {
        let id = ElementId::new(self.elements.len() as u32);
        self.by_dom_id.insert(element.dom_id.clone(), id);
        self.elements.push(element);
        id
    }

    fn get(&self, el: ElementId) -> &MockElement {
        &self.elements[el.raw() as usize]
    }

    fn get_mut(&mut self, el: ElementId) -> &mut MockElement {
        &mut self.elements[el.raw() as usize]
    }

    /// Add a window element. Its name is its dom id and it carries the
    /// window marker.
    pub fn add_window(&mut self, name: &str) -> ElementId {
        let mut element = MockElement::new(name);
        element.window = true;
        element.base = DEFAULT_WINDOW_SIZE;
        self.push(element)
    }

    /// Add a plain element (a trigger, header, clock target, ...).
    pub fn add_element(&mut self, dom_id: &str) -> ElementId {
        let element = MockElement::new(dom_id);
        self.push(element)
    }

    /// Add an element nested under `parent`.
    pub fn add_child(&mut self, parent: ElementId, dom_id: &str) -> ElementId {
        let mut element = MockElement::new(dom_id);
        element.parent = Some(parent);
        self.push(element)
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = PxSize::new(width, height);
    }

    pub fn set_page_scroll(&mut self, x: f64, y: f64) {
        self.scroll = PxPoint::new(x, y);
    }

    pub fn set_base_size(&mut self, el: ElementId, width: f64, height: f64) {
        self.get_mut(el).base = PxSize::new(width, height);
    }

    pub fn set_inline_geometry(&mut self, el: ElementId, geometry: InlineGeometry) {
        self.get_mut(el).geometry = geometry;
    }

    pub fn set_focusable(&mut self, el: ElementId, focusable: bool) {
        self.get_mut(el).focusable = focusable;
    }

    pub fn set_fullscreen_marked(&mut self, el: ElementId, marked: bool) {
        self.get_mut(el).fullscreen_marked = marked;
    }

    pub fn set_style_var(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }

    // Inspection side, for assertions.

    pub fn geometry(&self, el: ElementId) -> InlineGeometry {
        self.get(el).geometry
    }

    pub fn is_force_hidden(&self, el: ElementId) -> bool {
        self.get(el).hidden
    }

    pub fn stack_order(&self, el: ElementId) -> Option<u32> {
        self.get(el).stack_order
    }

    pub fn pane_scroll_top(&self, el: ElementId) -> f64 {
        self.get(el).scroll_top
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    pub fn text(&self, el: ElementId) -> &str {
        &self.get(el).text
    }
}

impl PageSurface for MockPage {
    fn element(&self, id: &str) -> Option<ElementId> {
        self.by_dom_id.get(id).copied()
    }

    fn window_elements(&self) -> Vec<(String, ElementId)> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.window)
            .map(|(index, element)| (element.dom_id.clone(), ElementId::new(index as u32)))
            .collect()
    }

    fn viewport(&self) -> PxSize {
        self.viewport
    }

    fn page_scroll(&self) -> PxPoint {
        self.scroll
    }

    fn bounding_rect(&self, el: ElementId) -> Option<PxRect> {
        let element = self.get(el);
        if element.hidden {
            return None;
        }
        let width = element.geometry.width.unwrap_or(element.base.width);
        let height = element.geometry.height.unwrap_or(element.base.height);
        let rect = match (element.geometry.left, element.geometry.top) {
            (Some(left), Some(top)) => {
                if element.geometry.position == Some(PositionMode::Fixed) {
                    PxRect::new(left, top, width, height)
                } else {
                    PxRect::new(left - self.scroll.x, top - self.scroll.y, width, height)
                }
            }
            _ => PxRect::new(
                (self.viewport.width - width) / 2.0,
                (self.viewport.height - height) / 2.0,
                width,
                height,
            ),
        };
        Some(rect)
    }

    fn inline_geometry(&self, el: ElementId) -> InlineGeometry {
        self.get(el).geometry
    }

    fn apply_geometry(&mut self, el: ElementId, geometry: &InlineGeometry) {
        self.get_mut(el).geometry = *geometry;
    }

    fn set_force_hidden(&mut self, el: ElementId, hidden: bool) {
        self.get_mut(el).hidden = hidden;
    }

    fn set_stack_order(&mut self, el: ElementId, order: u32) {
        self.get_mut(el).stack_order = Some(order);
    }

    fn style_var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn fullscreen_marked(&self, el: ElementId) -> bool {
        self.get(el).fullscreen_marked
    }

    fn scroll_pane_by(&mut self, el: ElementId, delta_y: f64) {
        let element = self.get_mut(el);
        element.scroll_top = (element.scroll_top + delta_y).max(0.0);
    }

    fn focus(&mut self, el: ElementId) -> bool {
        if self.get(el).focusable {
            self.focused = Some(el);
            true
        } else {
            false
        }
    }

    fn set_text(&mut self, el: ElementId, text: &str) {
        self.get_mut(el).text = text.to_string();
    }

    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(el) = current {
            if el == ancestor {
                return true;
            }
            current = self.get(el).parent;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_window_renders_mid_viewport() {
        let mut page = MockPage::new(1280.0, 720.0);
        let win = page.add_window("alpha");
        let rect = page.bounding_rect(win).unwrap();
        assert_eq!(rect, PxRect::new(400.0, 200.0, 480.0, 320.0));
    }

    #[test]
    fn explicit_absolute_offsets_track_page_scroll() {
        let mut page = MockPage::new(1280.0, 720.0);
        let win = page.add_window("alpha");
        page.set_inline_geometry(
            win,
            InlineGeometry {
                top: Some(100.0),
                left: Some(60.0),
                position: Some(PositionMode::Absolute),
                ..InlineGeometry::default()
            },
        );
        page.set_page_scroll(0.0, 30.0);
        let rect = page.bounding_rect(win).unwrap();
        assert_eq!(rect.origin(), PxPoint::new(60.0, 70.0));
    }

    #[test]
    fn containment_walks_parent_chain() {
        let mut page = MockPage::new(800.0, 600.0);
        let win = page.add_window("alpha");
        let pane = page.add_child(win, "alphacontent");
        let row = page.add_child(pane, "row1");
        let other = page.add_element("elsewhere");
        assert!(page.contains(win, row));
        assert!(page.contains(pane, row));
        assert!(!page.contains(pane, other));
        assert!(!page.contains(row, win));
    }
}
