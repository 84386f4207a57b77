//! page-wm: an embeddable window manager for in-page desktop shells.
//!
//! A set of named surfaces on a document-like page behave like draggable,
//! stackable, openable/closable desktop windows, with a fullscreen-like
//! mode and wheel rerouting into a scrollable content pane. The engine is
//! headless: it never touches a real document. A host implements
//! [`PageSurface`] over its page (a wasm bridge, a webview shim, or the
//! in-crate [`page::mock::MockPage`]) and forwards input events into a
//! [`Desk`].
//!
//! The host contract, in order:
//!
//! 1. build a [`Desk`] from a [`DeskConfig`] and call
//!    [`Desk::wire_all`] once the page is ready (and again after inserting
//!    new windows; wiring is idempotent);
//! 2. forward clicks on wired elements to [`Desk::click`], pointer input
//!    to [`Desk::pointer_down`] / [`Desk::pointer_move`] /
//!    [`Desk::pointer_up`], attaching its global move/up listeners only
//!    while `pointer_down` reports a drag began;
//! 3. forward wheel events to [`Desk::wheel`] and enact the returned
//!    [`WheelDisposition`];
//! 4. translate its fullscreen marker toggles into
//!    [`Desk::fullscreen_changed`];
//! 5. drain [`Desk::run_deferred`] after each handler, before the next
//!    paint, and call [`Desk::tick_clock`] once per second.
//!
//! Everything runs on the host's event loop; the engine is single-threaded
//! by contract and never blocks.

pub mod clock;
pub mod config;
pub mod constants;
pub mod defer;
pub mod drag;
pub mod events;
pub mod fullscreen;
pub mod geometry;
pub mod page;
pub mod scroll;
pub mod stack;
pub mod window;

pub use config::{DeskConfig, FullscreenDefaults};
pub use events::{PointerButton, PointerEvent, WheelEvent};
pub use geometry::{InlineGeometry, PositionMode, PxPoint, PxRect, PxSize, TransformStyle};
pub use page::{ElementId, PageSurface};
pub use scroll::WheelDisposition;
pub use window::{Desk, WindowRecord, WiredFlags};
