use page_wm::page::mock::MockPage;
use page_wm::PageSurface;
use page_wm::{
    Desk, DeskConfig, InlineGeometry, PositionMode, PxRect, TransformStyle,
};

fn viewer_page() -> MockPage {
    let mut page = MockPage::new(1280.0, 720.0);
    page.add_window("viewer");
    page
}

fn wired_desk(page: &mut MockPage) -> Desk {
    let mut desk = Desk::new(DeskConfig::new());
    desk.wire_all(page);
    desk
}

#[test]
fn enter_then_exit_restores_all_slots_verbatim() {
    let mut page = viewer_page();
    let viewer_el = page.element("viewer").unwrap();
    let original = InlineGeometry {
        top: Some(40.0),
        left: Some(10.0),
        right: Some(3.0),
        bottom: Some(7.0),
        position: Some(PositionMode::Absolute),
        transform: Some(TransformStyle::CenterShift),
        width: Some(500.0),
        height: Some(350.0),
    };
    page.set_inline_geometry(viewer_el, original);
    let mut desk = wired_desk(&mut page);

    desk.fullscreen_changed(&mut page, "viewer", true);
    assert!(desk.window("viewer").unwrap().is_fullscreen());
    let fullscreen = page.geometry(viewer_el);
    assert_eq!(fullscreen.position, Some(PositionMode::Fixed));
    assert_ne!(fullscreen, original);

    desk.fullscreen_changed(&mut page, "viewer", false);
    assert!(!desk.window("viewer").unwrap().is_fullscreen());
    assert_eq!(page.geometry(viewer_el), original);
    // The snapshot is consumed on exit.
    assert_eq!(desk.window("viewer").unwrap().saved_geometry(), None);
}

#[test]
fn double_enter_keeps_the_original_snapshot() {
    let mut page = viewer_page();
    let viewer_el = page.element("viewer").unwrap();
    let original = InlineGeometry {
        top: Some(40.0),
        left: Some(10.0),
        ..InlineGeometry::default()
    };
    page.set_inline_geometry(viewer_el, original);
    let mut desk = wired_desk(&mut page);

    desk.fullscreen_changed(&mut page, "viewer", true);
    desk.fullscreen_changed(&mut page, "viewer", true);
    desk.fullscreen_changed(&mut page, "viewer", false);
    assert_eq!(page.geometry(viewer_el), original);
}

#[test]
fn exit_without_enter_does_nothing() {
    let mut page = viewer_page();
    let viewer_el = page.element("viewer").unwrap();
    let mut desk = wired_desk(&mut page);

    let before = page.geometry(viewer_el);
    desk.fullscreen_changed(&mut page, "viewer", false);
    assert_eq!(page.geometry(viewer_el), before);
}

#[test]
fn fullscreen_layout_fills_viewport_between_margins() {
    let mut page = viewer_page();
    let viewer_el = page.element("viewer").unwrap();
    let mut desk = wired_desk(&mut page);

    desk.fullscreen_changed(&mut page, "viewer", true);
    let geometry = page.geometry(viewer_el);
    // Literal defaults: 100px top, 16px side and bottom.
    assert_eq!(geometry.top, Some(100.0));
    assert_eq!(geometry.left, Some(16.0));
    assert_eq!(geometry.width, Some(1280.0 - 32.0));
    assert_eq!(geometry.height, Some(720.0 - 116.0));
    assert_eq!(geometry.transform, Some(TransformStyle::Cleared));

    // The mock lays out fixed elements in viewport coordinates.
    let rect = page.bounding_rect(viewer_el).unwrap();
    assert_eq!(rect, PxRect::new(16.0, 100.0, 1248.0, 604.0));
}

#[test]
fn style_variables_override_defaults_per_window_then_globally() {
    let mut page = viewer_page();
    page.add_window("guide");
    let viewer_el = page.element("viewer").unwrap();
    let guide_el = page.element("guide").unwrap();
    page.set_style_var("--viewer-fullscreen-top", "80px");
    page.set_style_var("--fullscreen-top", "60px");
    page.set_style_var("--fullscreen-margin", "20px");
    let mut desk = wired_desk(&mut page);

    desk.fullscreen_changed(&mut page, "viewer", true);
    let viewer_geometry = page.geometry(viewer_el);
    assert_eq!(viewer_geometry.top, Some(80.0));
    assert_eq!(viewer_geometry.left, Some(20.0));

    desk.fullscreen_changed(&mut page, "guide", true);
    let guide_geometry = page.geometry(guide_el);
    assert_eq!(guide_geometry.top, Some(60.0));
    assert_eq!(guide_geometry.left, Some(20.0));
}

#[test]
fn unparsable_variable_falls_down_the_chain() {
    let mut page = viewer_page();
    let viewer_el = page.element("viewer").unwrap();
    page.set_style_var("--viewer-fullscreen-top", "very tall");
    let mut desk = wired_desk(&mut page);

    desk.fullscreen_changed(&mut page, "viewer", true);
    assert_eq!(page.geometry(viewer_el).top, Some(100.0));
}

#[test]
fn tiny_viewports_get_floored_sizes() {
    let mut page = viewer_page();
    let viewer_el = page.element("viewer").unwrap();
    page.set_viewport(200.0, 180.0);
    let mut desk = wired_desk(&mut page);

    desk.fullscreen_changed(&mut page, "viewer", true);
    let geometry = page.geometry(viewer_el);
    assert_eq!(geometry.width, Some(260.0));
    assert_eq!(geometry.height, Some(160.0));
}

#[test]
fn entering_fullscreen_raises_the_window() {
    let mut page = viewer_page();
    let mut desk = wired_desk(&mut page);

    assert_eq!(desk.window("viewer").unwrap().stack_order(), None);
    desk.fullscreen_changed(&mut page, "viewer", true);
    assert!(desk.window("viewer").unwrap().stack_order().is_some());
}

#[test]
fn window_marked_fullscreen_at_wire_time_is_adjusted() {
    let mut page = viewer_page();
    let viewer_el = page.element("viewer").unwrap();
    let original = InlineGeometry {
        top: Some(40.0),
        left: Some(10.0),
        ..InlineGeometry::default()
    };
    page.set_inline_geometry(viewer_el, original);
    page.set_fullscreen_marked(viewer_el, true);

    let mut desk = Desk::new(DeskConfig::new());
    desk.wire_all(&mut page);

    assert!(desk.window("viewer").unwrap().is_fullscreen());
    assert_eq!(page.geometry(viewer_el).position, Some(PositionMode::Fixed));

    // A later re-wire must not re-enter (and must not touch the snapshot).
    desk.wire_all(&mut page);
    desk.fullscreen_changed(&mut page, "viewer", false);
    assert_eq!(page.geometry(viewer_el), original);
}
