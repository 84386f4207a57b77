use std::collections::BTreeMap;

use super::{WindowRecord, WiredFlags};
use crate::clock::Clock;
use crate::config::DeskConfig;
use crate::defer::{DeferredTask, NextPaint};
use crate::drag::{self, DragSession};
use crate::events::{PointerButton, PointerEvent, WheelEvent};
use crate::fullscreen;
use crate::geometry::PxPoint;
use crate::page::{ElementId, PageSurface};
use crate::scroll::{self, RouteTargets, WheelDisposition};
use crate::stack::StackOrder;

/// What a wired trigger element does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Trigger {
    /// Click raises the window.
    Raise(String),
    /// Primary-button press starts a drag (a click still raises).
    DragHandle(String),
    Open(String),
    Close(String),
}

/// The engine. Owns the window registry, the trigger map, the stacking
/// counter, and the deferred queue; the host forwards input events into the
/// entry points below and drains [`run_deferred`](Desk::run_deferred)
/// before each paint.
///
/// Every entry point is a defensive no-op on unknown names and missing
/// elements. Nothing here panics and nothing returns an error to the host.
pub struct Desk {
    config: DeskConfig,
    windows: BTreeMap<String, WindowRecord>,
    triggers: BTreeMap<ElementId, Trigger>,
    stack: StackOrder,
    defer: NextPaint,
    /// Window currently owning the single pointer, if any.
    active_drag: Option<String>,
    clock: Clock,
}

impl Desk {
    pub fn new(config: DeskConfig) -> Self {
        Self {
            config,
            windows: BTreeMap::new(),
            triggers: BTreeMap::new(),
            stack: StackOrder::new(),
            defer: NextPaint::new(),
            active_drag: None,
            clock: Clock::default(),
        }
    }

    pub fn window(&self, name: &str) -> Option<&WindowRecord> {
        self.windows.get(name)
    }

    /// Window names in registry order.
    pub fn window_names(&self) -> Vec<String> {
        self.windows.keys().cloned().collect()
    }

    /// Window currently being dragged, if any.
    pub fn dragging_window(&self) -> Option<&str> {
        self.active_drag.as_deref()
    }

    /// Whether deferred work is pending for the next paint.
    pub fn has_deferred_work(&self) -> bool {
        !self.defer.is_empty()
    }

    // ---------------------------------------------------------------------
    // Bootstrap

    /// Discover window elements, wire their triggers by naming convention,
    /// and adjust windows already marked fullscreen. Idempotent: calling it
    /// again wires only windows and triggers that appeared since.
    pub fn wire_all(&mut self, surface: &mut dyn PageSurface) {
        for (name, root) in surface.window_elements() {
            self.wire_window(surface, &name, root);
        }
        let clock_element = self
            .config
            .clock_element
            .as_deref()
            .and_then(|id| surface.element(id));
        self.clock = Clock::new(clock_element);
    }

    fn wire_window(&mut self, surface: &mut dyn PageSurface, name: &str, root: ElementId) {
        if !self.windows.contains_key(name) {
            let mut record = WindowRecord::new(root);
            record.geometry = surface.inline_geometry(root);
            self.windows.insert(name.to_string(), record);
            tracing::debug!(window = %name, "discovered window");
        }

        let wired = self
            .windows
            .get(name)
            .map(|record| record.wired)
            .unwrap_or_default();

        if !wired.contains(WiredFlags::DRAG) {
            // The header is the drag handle when present; otherwise the
            // window itself is, and it doubles as the raise trigger.
            match surface.element(&format!("{name}header")) {
                Some(header) => {
                    self.triggers
                        .entry(header)
                        .or_insert_with(|| Trigger::DragHandle(name.to_string()));
                    self.triggers
                        .entry(root)
                        .or_insert_with(|| Trigger::Raise(name.to_string()));
                }
                None => {
                    self.triggers
                        .entry(root)
                        .or_insert_with(|| Trigger::DragHandle(name.to_string()));
                }
            }
            if let Some(record) = self.windows.get_mut(name) {
                record.wired |= WiredFlags::DRAG | WiredFlags::RAISE;
            }
        }

        if !wired.contains(WiredFlags::LIFECYCLE) {
            match surface.element(&format!("{name}open")) {
                Some(el) => {
                    self.triggers
                        .entry(el)
                        .or_insert_with(|| Trigger::Open(name.to_string()));
                }
                None => tracing::debug!(window = %name, "no open trigger"),
            }
            match surface.element(&format!("{name}close")) {
                Some(el) => {
                    self.triggers
                        .entry(el)
                        .or_insert_with(|| Trigger::Close(name.to_string()));
                }
                None => tracing::debug!(window = %name, "no close trigger"),
            }
            if let Some(record) = self.windows.get_mut(name) {
                record.wired |= WiredFlags::LIFECYCLE;
            }
        }

        // A window already marked fullscreen at wire time is adjusted as if
        // it had just entered.
        let already_fullscreen = self
            .windows
            .get(name)
            .is_some_and(|record| record.fullscreen);
        if surface.fullscreen_marked(root) && !already_fullscreen {
            self.enter_fullscreen(surface, name);
        }
    }

    // ---------------------------------------------------------------------
    // Stacking

    /// Bring a window to the front. Returns the assigned order, or `None`
    /// for unknown names.
    pub fn raise(&mut self, surface: &mut dyn PageSurface, name: &str) -> Option<u32> {
        let record = self.windows.get_mut(name)?;
        let order = self.stack.bump();
        record.stack_order = Some(order);
        surface.set_stack_order(record.root, order);
        tracing::debug!(window = %name, order, "raised window");
        Some(order)
    }

    // ---------------------------------------------------------------------
    // Trigger dispatch

    /// Forward a click on a wired element. Returns true when the click
    /// activated a trigger.
    pub fn click(&mut self, surface: &mut dyn PageSurface, el: ElementId) -> bool {
        let Some(trigger) = self.triggers.get(&el).cloned() else {
            return false;
        };
        match trigger {
            Trigger::Raise(name) | Trigger::DragHandle(name) => {
                self.raise(surface, &name);
            }
            Trigger::Open(name) => self.open(surface, &name),
            Trigger::Close(name) => self.close(surface, &name),
        }
        true
    }

    // ---------------------------------------------------------------------
    // Drag

    /// Forward a pointer press that occurred on a wired element. Returns
    /// true when a drag began, which is the host's cue to attach its
    /// move/up listeners for the duration of the gesture.
    pub fn pointer_down(
        &mut self,
        surface: &mut dyn PageSurface,
        el: ElementId,
        event: PointerEvent,
    ) -> bool {
        if event.button != PointerButton::Primary {
            return false;
        }
        let Some(Trigger::DragHandle(name)) = self.triggers.get(&el).cloned() else {
            return false;
        };
        self.begin_drag(surface, &name, event.position)
    }

    fn begin_drag(&mut self, surface: &mut dyn PageSurface, name: &str, pointer: PxPoint) -> bool {
        self.raise(surface, name);
        let Some(record) = self.windows.get_mut(name) else {
            return false;
        };
        if record.geometry.is_implicitly_centered() {
            // Materialize explicit coordinates exactly once, from the
            // pre-drag rendered position, so the window does not jump.
            let Some(rendered) = surface.bounding_rect(record.root) else {
                tracing::debug!(window = %name, "drag on a window without a rendered box");
                return false;
            };
            let origin = drag::materialized_origin(rendered, surface.page_scroll());
            drag::materialize(&mut record.geometry, origin);
            surface.apply_geometry(record.root, &record.geometry);
        }
        let origin = PxPoint::new(
            record.geometry.left.unwrap_or(0.0),
            record.geometry.top.unwrap_or(0.0),
        );
        if record.drag.is_some() {
            tracing::debug!(window = %name, "replacing stale drag session");
        }
        record.drag = Some(DragSession::new(pointer, origin));
        self.active_drag = Some(name.to_string());
        tracing::debug!(window = %name, "drag started");
        true
    }

    /// Forward a pointer move while a drag is active; a no-op otherwise,
    /// which is the engine-side half of the scoped-listener contract.
    pub fn pointer_move(&mut self, surface: &mut dyn PageSurface, event: PointerEvent) {
        let Some(name) = self.active_drag.clone() else {
            return;
        };
        let Some(record) = self.windows.get_mut(&name) else {
            return;
        };
        let Some(session) = record.drag else {
            return;
        };
        let position = session.position_at(event.position);
        record.geometry.left = Some(position.x);
        record.geometry.top = Some(position.y);
        surface.apply_geometry(record.root, &record.geometry);
    }

    /// End the drag gesture. The host detaches its move/up listeners.
    pub fn pointer_up(&mut self) {
        if let Some(name) = self.active_drag.take()
            && let Some(record) = self.windows.get_mut(&name)
        {
            record.drag = None;
            tracing::debug!(window = %name, "drag ended");
        }
    }

    // ---------------------------------------------------------------------
    // Lifecycle

    /// Open a window: clear minimized state, raise it, drop the hidden
    /// override, and schedule the next-paint placement reset (plus focus
    /// handoff for the designated content window).
    pub fn open(&mut self, surface: &mut dyn PageSurface, name: &str) {
        let Some(record) = self.windows.get_mut(name) else {
            tracing::debug!(window = %name, "open on unknown window");
            return;
        };
        record.minimized = false;
        let root = record.root;
        self.raise(surface, name);
        surface.set_force_hidden(root, false);
        self.defer
            .schedule(DeferredTask::ResetPlacement(name.to_string()));
        if self.config.content_window.as_deref() == Some(name) {
            self.defer
                .schedule(DeferredTask::FocusContentPane(name.to_string()));
        }
        tracing::debug!(window = %name, "opened window");
    }

    /// Close a window: force the hidden override. Stacking order, explicit
    /// geometry, and fullscreen state are deliberately left in place; a
    /// later `open` resets placement.
    pub fn close(&mut self, surface: &mut dyn PageSurface, name: &str) {
        let Some(record) = self.windows.get(name) else {
            tracing::debug!(window = %name, "close on unknown window");
            return;
        };
        surface.set_force_hidden(record.root, true);
        tracing::debug!(window = %name, "closed window");
    }

    /// Minimize a window. `open` is the restore path.
    pub fn minimize(&mut self, surface: &mut dyn PageSurface, name: &str) {
        let Some(record) = self.windows.get_mut(name) else {
            tracing::debug!(window = %name, "minimize on unknown window");
            return;
        };
        record.minimized = true;
        surface.set_force_hidden(record.root, true);
        tracing::debug!(window = %name, "minimized window");
    }

    /// Drain deferred work. The host calls this after the current handler
    /// returns and before the next paint.
    pub fn run_deferred(&mut self, surface: &mut dyn PageSurface) {
        for task in self.defer.take() {
            match task {
                DeferredTask::ResetPlacement(name) => {
                    if let Some(record) = self.windows.get_mut(&name) {
                        record.geometry.reset_placement();
                        surface.apply_geometry(record.root, &record.geometry);
                    }
                }
                DeferredTask::FocusContentPane(name) => {
                    let Some(pane) = self
                        .config
                        .content_pane
                        .as_deref()
                        .and_then(|id| surface.element(id))
                    else {
                        tracing::debug!(window = %name, "content pane missing, focus skipped");
                        continue;
                    };
                    if !surface.focus(pane) {
                        tracing::debug!(window = %name, "content pane refused focus");
                    }
                }
            }
        }
    }

    // ---------------------------------------------------------------------
    // Fullscreen

    /// Explicit fullscreen notification. The host translates its
    /// marker-class toggles into this call; the engine never watches
    /// attributes itself.
    pub fn fullscreen_changed(
        &mut self,
        surface: &mut dyn PageSurface,
        name: &str,
        fullscreen: bool,
    ) {
        if fullscreen {
            self.enter_fullscreen(surface, name);
        } else {
            self.exit_fullscreen(surface, name);
        }
    }

    fn enter_fullscreen(&mut self, surface: &mut dyn PageSurface, name: &str) {
        {
            let Some(record) = self.windows.get_mut(name) else {
                tracing::debug!(window = %name, "fullscreen enter on unknown window");
                return;
            };
            // Only the first entry snapshots; entering again without an
            // exit must not clobber the original geometry.
            if record.saved.is_none() {
                record.saved = Some(record.geometry);
            }
            let insets = fullscreen::resolve_insets(surface, name, self.config.fullscreen);
            record.geometry =
                fullscreen::fullscreen_geometry(surface.viewport(), insets, self.config.fullscreen);
            record.fullscreen = true;
            surface.apply_geometry(record.root, &record.geometry);
        }
        self.raise(surface, name);
        tracing::debug!(window = %name, "entered fullscreen");
    }

    fn exit_fullscreen(&mut self, surface: &mut dyn PageSurface, name: &str) {
        let Some(record) = self.windows.get_mut(name) else {
            tracing::debug!(window = %name, "fullscreen exit on unknown window");
            return;
        };
        record.fullscreen = false;
        let Some(saved) = record.saved.take() else {
            // Exit without a matching entry; nothing to restore.
            tracing::debug!(window = %name, "fullscreen exit without snapshot");
            return;
        };
        record.geometry = saved;
        surface.apply_geometry(record.root, &record.geometry);
        tracing::debug!(window = %name, "restored pre-fullscreen geometry");
    }

    // ---------------------------------------------------------------------
    // Wheel routing

    /// Forward a wheel event. The returned disposition tells the host
    /// whether to suppress the default scroll and/or stop propagation.
    pub fn wheel(&mut self, surface: &mut dyn PageSurface, event: WheelEvent) -> WheelDisposition {
        let Some(window_name) = self.config.content_window.as_deref() else {
            return WheelDisposition::Unhandled;
        };
        let Some(record) = self.windows.get(window_name) else {
            return WheelDisposition::Unhandled;
        };
        let Some(content) = self
            .config
            .content_pane
            .as_deref()
            .and_then(|id| surface.element(id))
        else {
            tracing::debug!("wheel routing disabled, content pane missing");
            return WheelDisposition::Unhandled;
        };
        let list = self
            .config
            .list_pane
            .as_deref()
            .and_then(|id| surface.element(id));
        scroll::route_wheel(
            surface,
            RouteTargets {
                window: record.root,
                content,
                list,
            },
            event.target,
            event.delta_y,
        )
    }

    // ---------------------------------------------------------------------
    // Clock

    /// Once-per-second clock update; the host drives the cadence.
    pub fn tick_clock(&self, surface: &mut dyn PageSurface) {
        self.clock.tick(surface);
    }
}
